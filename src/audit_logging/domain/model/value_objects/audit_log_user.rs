use crate::audit_logging::domain::model::enums::audit_logging_domain_error::AuditLoggingDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLogUser {
    user_id: String,
    email: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl AuditLogUser {
    pub fn new(
        user_id: String,
        email: Option<String>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, AuditLoggingDomainError> {
        if user_id.trim().is_empty() {
            return Err(AuditLoggingDomainError::InvalidUser);
        }

        Ok(Self {
            user_id,
            email,
            ip_address,
            user_agent,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
