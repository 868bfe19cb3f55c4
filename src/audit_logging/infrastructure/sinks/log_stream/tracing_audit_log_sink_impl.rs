use async_trait::async_trait;
use tracing::{info, warn};

use crate::audit_logging::{
    domain::model::{
        entities::audit_log_entry::AuditLogEntry,
        enums::audit_logging_domain_error::AuditLoggingDomainError,
        value_objects::audit_log_user::AuditLogUser,
    },
    infrastructure::sinks::audit_log_sink::AuditLogSink,
};

#[derive(Default)]
pub struct TracingAuditLogSinkImpl;

impl TracingAuditLogSinkImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditLogSink for TracingAuditLogSinkImpl {
    async fn write_entry(&self, entry: &AuditLogEntry) -> Result<(), AuditLoggingDomainError> {
        let user_id = entry.user().map(AuditLogUser::user_id);
        let email = entry.user().and_then(AuditLogUser::email);
        let ip_address = entry.user().and_then(AuditLogUser::ip_address);
        let user_agent = entry.user().and_then(AuditLogUser::user_agent);

        if entry.success() {
            info!(
                target: "audit_log",
                audit_log_id = %entry.id(),
                timestamp = entry.timestamp(),
                user_id = ?user_id,
                email = ?email,
                ip_address = ?ip_address,
                user_agent = ?user_agent,
                action_name = entry.action_name(),
                summary = entry.summary(),
                success = true,
                "audit log entry"
            );
        } else {
            warn!(
                target: "audit_log",
                audit_log_id = %entry.id(),
                timestamp = entry.timestamp(),
                user_id = ?user_id,
                email = ?email,
                ip_address = ?ip_address,
                user_agent = ?user_agent,
                action_name = entry.action_name(),
                summary = entry.summary(),
                success = false,
                error_message = ?entry.error_message(),
                "audit log entry"
            );
        }

        Ok(())
    }
}
