use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    notification::{
        application::config_fetchers::webhook_config_fetcher::WebhookConfigFetcher,
        interfaces::rest::controllers::notification_rest_controller::{
            NotificationRestControllerState, router,
        },
    },
    workspace_integration::application::acl::grpc_workspace_facade_impl::GrpcWorkspaceFacadeImpl,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_notification_router(config: &AppConfig) -> Result<Router, String> {
    let workspace_facade = Arc::new(
        GrpcWorkspaceFacadeImpl::new(
            config.workspace_grpc_endpoint.clone(),
            config.workspace_grpc_timeout,
        )
        .map_err(|e| e.to_string())?,
    );

    let webhook_config_fetcher = Arc::new(WebhookConfigFetcher::new(workspace_facade));

    Ok(router(NotificationRestControllerState {
        webhook_config_fetcher,
    }))
}
