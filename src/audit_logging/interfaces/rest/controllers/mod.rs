pub mod audit_log_rest_controller;
