use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::audit_logging::domain::{
    model::commands::record_operation_outcome_command::RecordOperationOutcomeCommand,
    services::audit_log_command_service::AuditLogCommandService,
};

const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AuditedOperationState {
    pub command_service: Arc<dyn AuditLogCommandService>,
    pub action_name: String,
}

impl AuditedOperationState {
    pub fn new(command_service: Arc<dyn AuditLogCommandService>, action_name: impl Into<String>) -> Self {
        Self {
            command_service,
            action_name: action_name.into(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub async fn record_operation_outcome(
    State(state): State<AuditedOperationState>,
    request: Request,
    next: Next,
) -> Response {
    let summary = format!("{} {}", request.method(), request.uri().path());

    let response = next.run(request).await;
    let status = response.status();

    let (response, outcome) = if status.is_client_error() || status.is_server_error() {
        let (parts, body) = response.into_parts();
        match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
            Ok(bytes) => {
                let message = serde_json::from_slice::<ErrorBody>(&bytes)
                    .map(|body| body.message)
                    .unwrap_or_else(|_| status_reason(status));
                (Response::from_parts(parts, Body::from(bytes)), Err(message))
            }
            Err(e) => {
                warn!(error = %e, action_name = %state.action_name, "failed to read error response body");
                (Response::from_parts(parts, Body::empty()), Err(status_reason(status)))
            }
        }
    } else {
        (response, Ok(status))
    };

    match RecordOperationOutcomeCommand::new(None, state.action_name.clone(), summary, &outcome) {
        Ok(command) => {
            if let Err(e) = state.command_service.handle_record_outcome(command).await {
                error!(error = %e, action_name = %state.action_name, "failed to record operation outcome");
            }
        }
        Err(e) => {
            error!(error = %e, action_name = %state.action_name, "invalid audited operation");
        }
    }

    response
}

fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
