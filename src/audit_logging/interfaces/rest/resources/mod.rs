pub mod audit_log_entry_resource;
pub mod audit_log_error_response_resource;
pub mod record_audit_log_entry_request_resource;
