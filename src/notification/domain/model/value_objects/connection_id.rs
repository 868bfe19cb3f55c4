use uuid::Uuid;

use crate::notification::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new(value: String) -> Result<Self, NotificationDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| NotificationDomainError::InvalidConnectionId)?;
        Ok(Self(parsed))
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
