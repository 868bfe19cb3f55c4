use async_trait::async_trait;

use crate::audit_logging::domain::model::{
    commands::{
        record_audit_log_entry_command::RecordAuditLogEntryCommand,
        record_operation_outcome_command::RecordOperationOutcomeCommand,
    },
    entities::audit_log_entry::AuditLogEntry,
    enums::audit_logging_domain_error::AuditLoggingDomainError,
};

#[async_trait]
pub trait AuditLogCommandService: Send + Sync {
    async fn handle_record_entry(
        &self,
        command: RecordAuditLogEntryCommand,
    ) -> Result<AuditLogEntry, AuditLoggingDomainError>;

    async fn handle_record_outcome(
        &self,
        command: RecordOperationOutcomeCommand,
    ) -> Result<AuditLogEntry, AuditLoggingDomainError>;
}
