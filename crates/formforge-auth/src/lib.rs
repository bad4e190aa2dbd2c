//! # formforge-auth
//!
//! The identity boundary. Form ownership is keyed by user id; this crate
//! supplies the [`User`] record, the [`Authenticator`] seam the HTTP layer
//! asks for the current user, and an HMAC-signed bearer-token
//! implementation. An absent user is a recoverable condition (`None`),
//! never an error, at this level.

pub mod provider;
pub mod tokens;
pub mod user;

pub use provider::{Authenticator, StaticAuthenticator, TokenAuthenticator};
pub use tokens::Signer;
pub use user::User;
