pub mod connection_id;
pub mod customer_io_email_config;
pub mod webhook_config;
