use std::fmt::Debug;

use async_trait::async_trait;

use super::state::Identity;

/// Failure reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider answered with its own explanation, shown to the user as-is.
    #[error("{0}")]
    Rejected(String),
    /// The call failed without a usable message.
    #[error("identity service unavailable")]
    Unavailable,
}

impl IdentityError {
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) if !message.trim().is_empty() => Some(message),
            Self::Rejected(_) | Self::Unavailable => None,
        }
    }
}

/// Email/password identity provider.
///
/// A successful call may still return `None` for the user; the session treats
/// that as a failed attempt.
#[async_trait]
pub trait IdentityService: Debug + Send + Sync {
    async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, IdentityError>;

    async fn create_user_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, IdentityError>;

    async fn update_display_name(
        &self,
        identity: &Identity,
        name: &str,
    ) -> Result<(), IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}
