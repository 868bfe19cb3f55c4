pub mod tracing_audit_log_sink_impl;
