#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomerIoEmailConfig {
    to: String,
}

impl CustomerIoEmailConfig {
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}
