use secrecy::Secret;

use thiserror::Error;

use crate::client::RelayCredentials;
use crate::domain::EmailAddress;

/// Sender account identity
pub const EMAIL_USER: &str = "EMAIL_USER";
/// Sender credential
pub const EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
/// Notification destination address
pub const EMAIL_RECIPIENT: &str = "EMAIL_RECIPIENT";

/// Source of runtime-resolved notification parameters.
///
/// Values are looked up fresh on every invocation, never cached at process
/// start, so credentials can be supplied or rotated externally without
/// redeploying. Lookups never fail on their own; an unset key is reported as
/// `None` and callers must check and fail fast.
pub trait ParamSource: Send + Sync {
    fn value(&self, key: &str) -> Option<String>;
}

/// Process-environment backed source, used in production.
///
/// An empty value counts as unset.
#[derive(Debug, Default)]
pub struct EnvSource;

impl ParamSource for EnvSource {
    fn value(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// The three notification parameters, resolved and validated for one
/// invocation.
#[derive(Debug)]
pub struct EmailParams {
    pub credentials: RelayCredentials,
    pub recipient: EmailAddress,
}

impl EmailParams {
    /// Resolve all required parameters from `source`, failing on the first
    /// one that is missing or unparseable. Each failure is logged before the
    /// invocation is aborted.
    pub fn resolve(source: &dyn ParamSource) -> Result<Self, ParamError> {
        let user = require(source, EMAIL_USER)?;
        let user = parse_address(EMAIL_USER, &user)?;

        let password = require(source, EMAIL_PASSWORD)?;

        let recipient = require(source, EMAIL_RECIPIENT)?;
        let recipient = parse_address(EMAIL_RECIPIENT, &recipient)?;

        Ok(Self {
            credentials: RelayCredentials {
                user,
                password: Secret::new(password),
            },
            recipient,
        })
    }
}

fn require(source: &dyn ParamSource, key: &'static str) -> Result<String, ParamError> {
    source.value(key).ok_or_else(|| {
        tracing::error!("{} is not set", key);
        ParamError::Missing(key)
    })
}

fn parse_address(key: &'static str, value: &str) -> Result<EmailAddress, ParamError> {
    value.parse().map_err(|reason| {
        tracing::error!("{} is invalid: {}", key, reason);
        ParamError::Invalid(key, reason)
    })
}
