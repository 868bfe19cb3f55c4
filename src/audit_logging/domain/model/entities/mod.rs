pub mod audit_log_entry;
