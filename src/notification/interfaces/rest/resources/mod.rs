pub mod notification_error_response_resource;
pub mod webhook_config_resource;
