pub mod audit_log_entry_id;
pub mod audit_log_user;
