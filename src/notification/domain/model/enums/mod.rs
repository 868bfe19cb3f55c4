pub mod notification_domain_error;
pub mod notification_type;
