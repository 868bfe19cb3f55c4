use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    notification::domain::{
        model::{
            enums::{
                notification_domain_error::NotificationDomainError,
                notification_type::NotificationType,
            },
            value_objects::{connection_id::ConnectionId, webhook_config::WebhookConfig},
        },
        services::config_fetcher::ConfigFetcher,
    },
    workspace_integration::{
        domain::model::{
            entities::workspace_record::WorkspaceRecord,
            enums::workspace_notification_type::WorkspaceNotificationType,
        },
        interfaces::acl::workspace_facade::{ConnectionIdRequest, WorkspaceFacade},
    },
};

pub struct WebhookConfigFetcher {
    workspace_facade: Arc<dyn WorkspaceFacade>,
}

impl WebhookConfigFetcher {
    pub fn new(workspace_facade: Arc<dyn WorkspaceFacade>) -> Self {
        Self { workspace_facade }
    }

    fn extract_webhook_config(workspace: &WorkspaceRecord) -> Option<WebhookConfig> {
        let slack = workspace
            .notifications
            .as_deref()?
            .iter()
            .find(|notification| notification.notification_type == WorkspaceNotificationType::Slack)?;

        let webhook = slack
            .slack_configuration
            .as_ref()
            .and_then(|configuration| configuration.webhook.clone());

        if webhook.is_none() {
            warn!(
                workspace_id = %workspace.workspace_id,
                "slack notification configured without a webhook"
            );
        }

        webhook.map(WebhookConfig::new)
    }
}

#[async_trait]
impl ConfigFetcher<WebhookConfig> for WebhookConfigFetcher {
    async fn fetch_config(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<WebhookConfig>, NotificationDomainError> {
        let workspace = self
            .workspace_facade
            .get_workspace_by_connection_id(ConnectionIdRequest {
                connection_id: connection_id.value(),
            })
            .await?;

        let config = Self::extract_webhook_config(&workspace);

        debug!(
            connection_id = %connection_id.value(),
            workspace_id = %workspace.workspace_id,
            found = config.is_some(),
            "resolved webhook config"
        );

        Ok(config)
    }

    fn notification_type(&self) -> NotificationType {
        NotificationType::Webhook
    }
}
