use airbyte_notification_audit::{
    audit_logging::{
        build_audit_log_command_service, build_audit_logging_router,
        interfaces::rest::middleware::audited_operation_middleware::{
            AuditedOperationState, record_operation_outcome,
        },
        interfaces::rest::resources::{
            audit_log_entry_resource::AuditLogEntryResource,
            audit_log_error_response_resource::AuditLogErrorResponseResource,
            record_audit_log_entry_request_resource::{
                AuditLogUserResource, RecordAuditLogEntryRequestResource,
            },
        },
    },
    config::app_config::AppConfig,
    notification::{
        build_notification_router,
        interfaces::rest::resources::{
            notification_error_response_resource::NotificationErrorResponseResource,
            webhook_config_resource::WebhookConfigResource,
        },
    },
};
use axum::{Router, middleware};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        airbyte_notification_audit::notification::interfaces::rest::controllers::notification_rest_controller::get_webhook_config,
        airbyte_notification_audit::audit_logging::interfaces::rest::controllers::audit_log_rest_controller::record_audit_log_entry
    ),
    components(
        schemas(
            WebhookConfigResource,
            NotificationErrorResponseResource,
            RecordAuditLogEntryRequestResource,
            AuditLogUserResource,
            AuditLogEntryResource,
            AuditLogErrorResponseResource
        )
    ),
    tags(
        (name = "notifications", description = "Per-connection notification configuration"),
        (name = "audit-logging", description = "Audit log recording")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let audit_log_command_service = build_audit_log_command_service();

    let notification_router = match build_notification_router(&config) {
        Ok(router) => router,
        Err(e) => {
            error!(error = %e, "failed to build notification router");
            std::process::exit(1);
        }
    };

    let app = Router::new()
        .merge(notification_router.layer(middleware::from_fn_with_state(
            AuditedOperationState::new(audit_log_command_service.clone(), "getWebhookConfig"),
            record_operation_outcome,
        )))
        .merge(build_audit_logging_router(audit_log_command_service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind server address");
            std::process::exit(1);
        }
    };

    info!(
        port = config.port,
        workspace_endpoint = %config.workspace_grpc_endpoint,
        "server listening, swagger ui at /swagger-ui"
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server terminated");
        std::process::exit(1);
    }
}
