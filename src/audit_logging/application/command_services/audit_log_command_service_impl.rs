use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::audit_logging::{
    domain::{
        model::{
            commands::{
                record_audit_log_entry_command::RecordAuditLogEntryCommand,
                record_operation_outcome_command::RecordOperationOutcomeCommand,
            },
            entities::audit_log_entry::{AuditLogEntry, AuditLogEntryParts},
            enums::audit_logging_domain_error::AuditLoggingDomainError,
            value_objects::{audit_log_entry_id::AuditLogEntryId, audit_log_user::AuditLogUser},
        },
        services::audit_log_command_service::AuditLogCommandService,
    },
    infrastructure::sinks::audit_log_sink::AuditLogSink,
};

pub struct AuditLogCommandServiceImpl {
    sink: Arc<dyn AuditLogSink>,
    clock: fn() -> DateTime<Utc>,
}

impl AuditLogCommandServiceImpl {
    pub fn new(sink: Arc<dyn AuditLogSink>) -> Self {
        Self::new_with_clock(sink, Utc::now)
    }

    pub fn new_with_clock(sink: Arc<dyn AuditLogSink>, clock: fn() -> DateTime<Utc>) -> Self {
        Self { sink, clock }
    }

    async fn record(
        &self,
        user: Option<AuditLogUser>,
        action_name: &str,
        summary: &str,
        success: bool,
        error_message: Option<&str>,
    ) -> Result<AuditLogEntry, AuditLoggingDomainError> {
        let entry = AuditLogEntry::new(AuditLogEntryParts {
            id: AuditLogEntryId::new_random(),
            timestamp: (self.clock)().timestamp_millis(),
            user,
            action_name: action_name.to_string(),
            summary: summary.to_string(),
            success,
            error_message: error_message.map(str::to_string),
        });

        self.sink.write_entry(&entry).await?;

        Ok(entry)
    }
}

#[async_trait]
impl AuditLogCommandService for AuditLogCommandServiceImpl {
    async fn handle_record_entry(
        &self,
        command: RecordAuditLogEntryCommand,
    ) -> Result<AuditLogEntry, AuditLoggingDomainError> {
        self.record(
            command.user().cloned(),
            command.action_name(),
            command.summary(),
            command.success(),
            command.error_message(),
        )
        .await
    }

    async fn handle_record_outcome(
        &self,
        command: RecordOperationOutcomeCommand,
    ) -> Result<AuditLogEntry, AuditLoggingDomainError> {
        self.record(
            command.user().cloned(),
            command.action_name(),
            command.summary(),
            command.success(),
            command.error_message(),
        )
        .await
    }
}
