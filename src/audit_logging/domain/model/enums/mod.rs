pub mod audit_logging_domain_error;
