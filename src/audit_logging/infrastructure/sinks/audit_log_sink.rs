use async_trait::async_trait;

use crate::audit_logging::domain::model::{
    entities::audit_log_entry::AuditLogEntry,
    enums::audit_logging_domain_error::AuditLoggingDomainError,
};

#[async_trait]
pub trait AuditLogSink: Send + Sync {
    async fn write_entry(&self, entry: &AuditLogEntry) -> Result<(), AuditLoggingDomainError>;
}
