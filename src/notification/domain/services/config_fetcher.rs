use async_trait::async_trait;

use crate::notification::domain::model::{
    enums::{notification_domain_error::NotificationDomainError, notification_type::NotificationType},
    value_objects::connection_id::ConnectionId,
};

#[async_trait]
pub trait ConfigFetcher<T>: Send + Sync
where
    T: Send,
{
    async fn fetch_config(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<T>, NotificationDomainError>;

    fn notification_type(&self) -> NotificationType;
}
