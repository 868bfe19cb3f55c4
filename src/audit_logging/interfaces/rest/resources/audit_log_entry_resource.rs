use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::audit_logging::{
    domain::model::entities::audit_log_entry::AuditLogEntry,
    interfaces::rest::resources::record_audit_log_entry_request_resource::AuditLogUserResource,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditLogEntryResource {
    pub id: String,
    pub timestamp: i64,
    pub user: Option<AuditLogUserResource>,
    pub action_name: String,
    pub summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}

impl From<&AuditLogEntry> for AuditLogEntryResource {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            timestamp: entry.timestamp(),
            user: entry.user().map(|user| AuditLogUserResource {
                user_id: user.user_id().to_string(),
                email: user.email().map(str::to_string),
                ip_address: user.ip_address().map(str::to_string),
                user_agent: user.user_agent().map(str::to_string),
            }),
            action_name: entry.action_name().to_string(),
            summary: entry.summary().to_string(),
            success: entry.success(),
            error_message: entry.error_message().map(str::to_string),
        }
    }
}
