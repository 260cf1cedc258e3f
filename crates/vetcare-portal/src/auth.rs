//! Identity provider seam.
//!
//! Authentication is delegated to an external service; the portal only
//! consumes the session it hands back and listens for state transitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// An authenticated session as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    /// Opaque provider token for subsequent calls.
    pub token: String,
}

/// Listener invoked with the new session on sign-in and `None` on sign-out.
pub type AuthStateCallback = Box<dyn Fn(Option<AuthSession>) + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("credenciales inválidas")]
    InvalidCredentials,

    #[error("sesión expirada")]
    SessionExpired,

    #[error("proveedor de identidad no disponible: {0}")]
    ProviderUnavailable(String),
}

/// External identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_out(&self, token: &str) -> Result<(), AuthError>;

    /// Register a listener for session transitions. The provider calls it
    /// with the session after every successful sign-in and with `None`
    /// after every sign-out.
    fn on_auth_state_change(&self, callback: AuthStateCallback);
}
