pub mod audit_log_command_service;
