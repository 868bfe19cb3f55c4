use crate::audit_logging::domain::model::value_objects::{
    audit_log_entry_id::AuditLogEntryId, audit_log_user::AuditLogUser,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLogEntry {
    id: AuditLogEntryId,
    timestamp: i64,
    user: Option<AuditLogUser>,
    action_name: String,
    summary: String,
    success: bool,
    error_message: Option<String>,
}

pub struct AuditLogEntryParts {
    pub id: AuditLogEntryId,
    pub timestamp: i64,
    pub user: Option<AuditLogUser>,
    pub action_name: String,
    pub summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}

impl AuditLogEntry {
    pub fn new(parts: AuditLogEntryParts) -> Self {
        Self {
            id: parts.id,
            timestamp: parts.timestamp,
            user: parts.user,
            action_name: parts.action_name,
            summary: parts.summary,
            success: parts.success,
            error_message: parts.error_message,
        }
    }

    pub fn id(&self) -> AuditLogEntryId {
        self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn user(&self) -> Option<&AuditLogUser> {
        self.user.as_ref()
    }

    pub fn is_system_initiated(&self) -> bool {
        self.user.is_none()
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
