pub mod audit_log_sink;
pub mod log_stream;
