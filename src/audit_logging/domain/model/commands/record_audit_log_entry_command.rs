use crate::audit_logging::domain::model::{
    enums::audit_logging_domain_error::AuditLoggingDomainError,
    value_objects::audit_log_user::AuditLogUser,
};

#[derive(Clone, Debug)]
pub struct RecordAuditLogEntryCommand {
    user: Option<AuditLogUser>,
    action_name: String,
    summary: String,
    success: bool,
    error_message: Option<String>,
}

pub struct RecordAuditLogEntryCommandParts {
    pub user: Option<AuditLogUser>,
    pub action_name: String,
    pub summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}

impl RecordAuditLogEntryCommand {
    pub fn new(parts: RecordAuditLogEntryCommandParts) -> Result<Self, AuditLoggingDomainError> {
        if parts.action_name.trim().is_empty() {
            return Err(AuditLoggingDomainError::InvalidActionName);
        }
        if parts.summary.trim().is_empty() {
            return Err(AuditLoggingDomainError::InvalidSummary);
        }

        Ok(Self {
            user: parts.user,
            action_name: parts.action_name,
            summary: parts.summary,
            success: parts.success,
            error_message: parts.error_message,
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
        self.success
    }
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
