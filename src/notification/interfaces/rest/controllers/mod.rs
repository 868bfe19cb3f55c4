pub mod notification_rest_controller;
