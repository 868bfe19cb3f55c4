use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WebhookConfigResource {
    pub webhook_url: String,
    pub notification_type: String,
}
