use async_trait::async_trait;
use uuid::Uuid;

use crate::workspace_integration::domain::model::entities::workspace_record::WorkspaceRecord;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionIdRequest {
    pub connection_id: Uuid,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum WorkspaceIntegrationError {
    #[error("workspace not found: {0}")]
    NotFound(String),

    #[error("workspace access unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid workspace request: {0}")]
    InvalidRequest(String),

    #[error("workspace service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait WorkspaceFacade: Send + Sync {
    async fn get_workspace_by_connection_id(
        &self,
        request: ConnectionIdRequest,
    ) -> Result<WorkspaceRecord, WorkspaceIntegrationError>;
}
