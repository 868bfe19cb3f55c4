pub mod workspace_notification_type;
