use std::sync::Arc;

use axum::Router;

use crate::audit_logging::{
    application::command_services::audit_log_command_service_impl::AuditLogCommandServiceImpl,
    domain::services::audit_log_command_service::AuditLogCommandService,
    infrastructure::sinks::log_stream::tracing_audit_log_sink_impl::TracingAuditLogSinkImpl,
    interfaces::rest::controllers::audit_log_rest_controller::{
        AuditLogRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_audit_log_command_service() -> Arc<dyn AuditLogCommandService> {
    let sink = Arc::new(TracingAuditLogSinkImpl::new());
    Arc::new(AuditLogCommandServiceImpl::new(sink))
}

pub fn build_audit_logging_router(command_service: Arc<dyn AuditLogCommandService>) -> Router {
    router(AuditLogRestControllerState { command_service })
}
