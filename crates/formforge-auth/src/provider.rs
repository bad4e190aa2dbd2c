//! Authenticator implementations.
//!
//! The HTTP layer hands the raw bearer token (if any) to an
//! [`Authenticator`] and gets back `Some(User)` or `None`. `None` means
//! "not authenticated" and is always recoverable; the caller decides what
//! to do about it.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::tokens::Signer;
use crate::user::User;

/// Resolves the current user from a request's bearer token.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the authenticated user, or `None` if the token is absent,
    /// malformed, or forged.
    async fn current_user(&self, token: Option<&str>) -> Option<User>;
}

/// Authenticates HMAC-signed tokens issued by [`TokenAuthenticator::issue`].
///
/// The token is the base64-encoded JSON user record plus a signature. The
/// server is stateless: whoever holds a validly signed token is that user.
pub struct TokenAuthenticator {
    signer: Signer,
}

impl TokenAuthenticator {
    /// Creates an authenticator with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            signer: Signer::new(secret_key),
        }
    }

    /// Issues a signed bearer token for a user.
    pub fn issue(&self, user: &User) -> String {
        let payload = serde_json::to_string(user).expect("user serializes");
        self.signer.sign(&URL_SAFE_NO_PAD.encode(payload))
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn current_user(&self, token: Option<&str>) -> Option<User> {
        let payload = self.signer.unsign(token?).ok()?;
        let raw = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&raw).ok()
    }
}

/// A fixed token-to-user mapping, for tests and local development.
#[derive(Default)]
pub struct StaticAuthenticator {
    users: Vec<(String, User)>,
}

impl StaticAuthenticator {
    /// Creates an empty authenticator that rejects everyone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token for a user.
    #[must_use]
    pub fn with_user(mut self, token: impl Into<String>, user: User) -> Self {
        self.users.push((token.into(), user));
        self
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn current_user(&self, token: Option<&str>) -> Option<User> {
        let token = token?;
        self.users
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, user)| user.clone())
    }
}
