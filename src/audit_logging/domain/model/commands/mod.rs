pub mod record_audit_log_entry_command;
pub mod record_operation_outcome_command;
