use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditLogUserResource {
    pub user_id: String,
    pub email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RecordAuditLogEntryRequestResource {
    pub user: Option<AuditLogUserResource>,
    #[validate(length(min = 1))]
    pub action_name: String,
    #[validate(length(min = 1))]
    pub summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}
