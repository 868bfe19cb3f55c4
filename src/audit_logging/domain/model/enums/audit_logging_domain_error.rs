use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditLoggingDomainError {
    #[error("action name is invalid")]
    InvalidActionName,

    #[error("summary is invalid")]
    InvalidSummary,

    #[error("audit user is invalid")]
    InvalidUser,

    #[error("audit sink error: {0}")]
    SinkError(String),
}
