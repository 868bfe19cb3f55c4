use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::error;

use crate::{
    notification::{
        domain::{
            model::{
                enums::notification_domain_error::NotificationDomainError,
                value_objects::{connection_id::ConnectionId, webhook_config::WebhookConfig},
            },
            services::config_fetcher::ConfigFetcher,
        },
        interfaces::rest::resources::{
            notification_error_response_resource::NotificationErrorResponseResource,
            webhook_config_resource::WebhookConfigResource,
        },
    },
    workspace_integration::interfaces::acl::workspace_facade::WorkspaceIntegrationError,
};

#[derive(Clone)]
pub struct NotificationRestControllerState {
    pub webhook_config_fetcher: Arc<dyn ConfigFetcher<WebhookConfig>>,
}

pub fn router(state: NotificationRestControllerState) -> Router {
    Router::new()
        .route(
            "/notifications/connections/:connection_id/webhook-config",
            get(get_webhook_config),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/notifications/connections/{connection_id}/webhook-config",
    tag = "notifications",
    params(
        ("connection_id" = String, Path, description = "Connection identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Webhook configured for the connection's workspace", body = WebhookConfigResource),
        (status = 400, description = "Invalid connection id", body = NotificationErrorResponseResource),
        (status = 403, description = "Workspace service rejected the lookup", body = NotificationErrorResponseResource),
        (status = 404, description = "No webhook configured or connection unknown", body = NotificationErrorResponseResource),
        (status = 502, description = "Workspace service unavailable", body = NotificationErrorResponseResource)
    )
)]
pub async fn get_webhook_config(
    State(state): State<NotificationRestControllerState>,
    Path(connection_id): Path<String>,
) -> Result<Json<WebhookConfigResource>, (StatusCode, Json<NotificationErrorResponseResource>)> {
    let connection_id = ConnectionId::new(connection_id).map_err(map_domain_error)?;

    let config = state
        .webhook_config_fetcher
        .fetch_config(&connection_id)
        .await
        .map_err(map_domain_error)?;

    match config {
        Some(config) => Ok(Json(WebhookConfigResource {
            webhook_url: config.webhook_url().to_string(),
            notification_type: state
                .webhook_config_fetcher
                .notification_type()
                .as_str()
                .to_string(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(NotificationErrorResponseResource {
                message: "no webhook configured for connection".to_string(),
            }),
        )),
    }
}

fn map_domain_error(
    error: NotificationDomainError,
) -> (StatusCode, Json<NotificationErrorResponseResource>) {
    let status = match &error {
        NotificationDomainError::InvalidConnectionId => StatusCode::BAD_REQUEST,
        NotificationDomainError::Upstream(upstream) => match upstream {
            WorkspaceIntegrationError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkspaceIntegrationError::Unauthorized(_) => StatusCode::FORBIDDEN,
            WorkspaceIntegrationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WorkspaceIntegrationError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        },
    };

    if status.is_server_error() {
        error!(%error, "webhook config lookup failed");
    }

    (
        status,
        Json(NotificationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
