use std::time::Duration;

use async_trait::async_trait;
use tonic::{
    Code, Status,
    transport::{Channel, Endpoint},
};
use tracing::debug;

use crate::{
    workspace_grpc::{
        GetWorkspaceByConnectionIdRequest, Notification, NotificationType, WorkspaceRead,
        workspace_lookup_service_client::WorkspaceLookupServiceClient,
    },
    workspace_integration::{
        domain::model::{
            entities::workspace_record::{
                SlackConfiguration, WorkspaceNotification, WorkspaceRecord,
            },
            enums::workspace_notification_type::WorkspaceNotificationType,
        },
        interfaces::acl::workspace_facade::{
            ConnectionIdRequest, WorkspaceFacade, WorkspaceIntegrationError,
        },
    },
};

pub struct GrpcWorkspaceFacadeImpl {
    client: WorkspaceLookupServiceClient<Channel>,
}

impl GrpcWorkspaceFacadeImpl {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, WorkspaceIntegrationError> {
        let channel = Endpoint::from_shared(endpoint)
            .map_err(|e| WorkspaceIntegrationError::Unavailable(e.to_string()))?
            .connect_timeout(timeout)
            .timeout(timeout)
            .connect_lazy();

        Ok(Self {
            client: WorkspaceLookupServiceClient::new(channel),
        })
    }

    fn map_status(status: Status) -> WorkspaceIntegrationError {
        let message = status.message().to_string();
        match status.code() {
            Code::NotFound => WorkspaceIntegrationError::NotFound(message),
            Code::Unauthenticated | Code::PermissionDenied => {
                WorkspaceIntegrationError::Unauthorized(message)
            }
            Code::InvalidArgument => WorkspaceIntegrationError::InvalidRequest(message),
            _ => WorkspaceIntegrationError::Unavailable(message),
        }
    }

    fn map_notification_type(value: i32) -> WorkspaceNotificationType {
        match NotificationType::try_from(value) {
            Ok(NotificationType::Slack) => WorkspaceNotificationType::Slack,
            Ok(NotificationType::Customerio) => WorkspaceNotificationType::CustomerIo,
            Ok(NotificationType::Unspecified) | Err(_) => WorkspaceNotificationType::Unknown,
        }
    }

    fn map_notification(notification: Notification) -> WorkspaceNotification {
        WorkspaceNotification {
            notification_type: Self::map_notification_type(notification.notification_type),
            send_on_success: notification.send_on_success,
            send_on_failure: notification.send_on_failure,
            slack_configuration: notification
                .slack_configuration
                .map(|slack| SlackConfiguration {
                    webhook: slack.webhook,
                }),
        }
    }

    fn map_workspace(workspace: WorkspaceRead) -> WorkspaceRecord {
        WorkspaceRecord {
            workspace_id: workspace.workspace_id,
            name: workspace.name,
            notifications: workspace.notifications.map(|list| {
                list.items
                    .into_iter()
                    .map(Self::map_notification)
                    .collect()
            }),
        }
    }
}

#[async_trait]
impl WorkspaceFacade for GrpcWorkspaceFacadeImpl {
    async fn get_workspace_by_connection_id(
        &self,
        request: ConnectionIdRequest,
    ) -> Result<WorkspaceRecord, WorkspaceIntegrationError> {
        let mut client = self.client.clone();

        debug!(connection_id = %request.connection_id, "looking up workspace by connection");

        let response = client
            .get_workspace_by_connection_id(GetWorkspaceByConnectionIdRequest {
                connection_id: request.connection_id.to_string(),
            })
            .await
            .map_err(Self::map_status)?;

        Ok(Self::map_workspace(response.into_inner()))
    }
}
