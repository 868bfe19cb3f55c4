use thiserror::Error;

use crate::workspace_integration::interfaces::acl::workspace_facade::WorkspaceIntegrationError;

#[derive(Debug, Error)]
pub enum NotificationDomainError {
    #[error("connection id is invalid")]
    InvalidConnectionId,

    #[error(transparent)]
    Upstream(#[from] WorkspaceIntegrationError),
}
