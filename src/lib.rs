pub mod audit_logging;
pub mod config;
pub mod notification;
pub mod workspace_integration;
pub mod workspace_grpc {
    tonic::include_proto!("workspace_lookup");
}
