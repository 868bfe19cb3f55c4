use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::error;
use validator::Validate;

use crate::audit_logging::{
    domain::{
        model::{
            commands::record_audit_log_entry_command::{
                RecordAuditLogEntryCommand, RecordAuditLogEntryCommandParts,
            },
            enums::audit_logging_domain_error::AuditLoggingDomainError,
            value_objects::audit_log_user::AuditLogUser,
        },
        services::audit_log_command_service::AuditLogCommandService,
    },
    interfaces::rest::resources::{
        audit_log_entry_resource::AuditLogEntryResource,
        audit_log_error_response_resource::AuditLogErrorResponseResource,
        record_audit_log_entry_request_resource::RecordAuditLogEntryRequestResource,
    },
};

#[derive(Clone)]
pub struct AuditLogRestControllerState {
    pub command_service: Arc<dyn AuditLogCommandService>,
}

pub fn router(state: AuditLogRestControllerState) -> Router {
    Router::new()
        .route("/audit-logs", post(record_audit_log_entry))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/audit-logs",
    tag = "audit-logging",
    request_body = RecordAuditLogEntryRequestResource,
    responses(
        (status = 201, description = "Audit log entry recorded", body = AuditLogEntryResource),
        (status = 400, description = "Invalid request", body = AuditLogErrorResponseResource),
        (status = 500, description = "Audit sink error", body = AuditLogErrorResponseResource)
    )
)]
pub async fn record_audit_log_entry(
    State(state): State<AuditLogRestControllerState>,
    Json(request): Json<RecordAuditLogEntryRequestResource>,
) -> Result<(StatusCode, Json<AuditLogEntryResource>), (StatusCode, Json<AuditLogErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AuditLogErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let user = request
        .user
        .map(|user| AuditLogUser::new(user.user_id, user.email, user.ip_address, user.user_agent))
        .transpose()
        .map_err(map_domain_error)?;

    let command = RecordAuditLogEntryCommand::new(RecordAuditLogEntryCommandParts {
        user,
        action_name: request.action_name,
        summary: request.summary,
        success: request.success,
        error_message: request.error_message,
    })
    .map_err(map_domain_error)?;

    let entry = state
        .command_service
        .handle_record_entry(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(AuditLogEntryResource::from(&entry))))
}

fn map_domain_error(
    error: AuditLoggingDomainError,
) -> (StatusCode, Json<AuditLogErrorResponseResource>) {
    let status = match &error {
        AuditLoggingDomainError::InvalidActionName
        | AuditLoggingDomainError::InvalidSummary
        | AuditLoggingDomainError::InvalidUser => StatusCode::BAD_REQUEST,
        AuditLoggingDomainError::SinkError(_) => {
            error!(%error, "failed to record audit log entry");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(AuditLogErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
