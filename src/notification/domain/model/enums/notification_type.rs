#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NotificationType {
    Webhook,
    CustomerIo,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webhook => "webhook",
            Self::CustomerIo => "customerio",
        }
    }
}
