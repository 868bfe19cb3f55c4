#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebhookConfig {
    webhook_url: String,
}

impl WebhookConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}
