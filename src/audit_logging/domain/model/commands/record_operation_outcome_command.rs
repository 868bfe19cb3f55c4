use std::fmt::Display;

use crate::audit_logging::domain::model::{
    enums::audit_logging_domain_error::AuditLoggingDomainError,
    value_objects::audit_log_user::AuditLogUser,
};

#[derive(Clone, Debug)]
pub struct RecordOperationOutcomeCommand {
    user: Option<AuditLogUser>,
    action_name: String,
    summary: String,
    outcome: Result<(), String>,
}

impl RecordOperationOutcomeCommand {
    pub fn new<T, E: Display>(
        user: Option<AuditLogUser>,
        action_name: String,
        summary: String,
        outcome: &Result<T, E>,
    ) -> Result<Self, AuditLoggingDomainError> {
        if action_name.trim().is_empty() {
            return Err(AuditLoggingDomainError::InvalidActionName);
        }
        if summary.trim().is_empty() {
            return Err(AuditLoggingDomainError::InvalidSummary);
        }

        Ok(Self {
            user,
            action_name,
            summary,
            outcome: outcome.as_ref().map(|_| ()).map_err(|e| e.to_string()),
        })
    }

    pub fn user(&self) -> Option<&AuditLogUser> {
        self.user.as_ref()
    }
    pub fn action_name(&self) -> &str {
        &self.action_name
    }
    pub fn summary(&self) -> &str {
        &self.summary
    }
    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }
    pub fn error_message(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }
}
