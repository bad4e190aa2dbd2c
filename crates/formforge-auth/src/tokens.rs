//! Cryptographic signing for bearer tokens.
//!
//! [`Signer`] signs and verifies strings using HMAC-SHA256 with a salted
//! key and constant-time signature comparison. Token payloads are URL-safe
//! base64 so the signed value never contains the separator.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use formforge_core::{FormForgeError, FormForgeResult};

type HmacSha256 = Hmac<Sha256>;

/// The separator between payload and signature.
const SEP: char = ':';

/// Signs and verifies strings using HMAC-SHA256.
pub struct Signer {
    key: String,
    salt: String,
}

impl Signer {
    /// Creates a new `Signer` with the given secret key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            salt: "formforge.auth.tokens.Signer".to_string(),
        }
    }

    /// Sets the salt mixed into the HMAC key.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    fn make_signature(&self, value: &str) -> String {
        let salted_key = format!("{}:{}", self.salt, self.key);
        let mut mac =
            HmacSha256::new_from_slice(salted_key.as_bytes()).expect("HMAC accepts any key size");
        mac.update(value.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Signs a value, returning `"value:signature"`.
    pub fn sign(&self, value: &str) -> String {
        format!("{value}{SEP}{}", self.make_signature(value))
    }

    /// Verifies a signed string and returns the original value.
    pub fn unsign(&self, signed_value: &str) -> FormForgeResult<String> {
        let (value, sig) = signed_value.rsplit_once(SEP).ok_or_else(|| {
            FormForgeError::ParseError("no separator in signed value".to_string())
        })?;
        let expected = self.make_signature(value);
        if constant_time_eq(sig, &expected) {
            Ok(value.to_string())
        } else {
            Err(FormForgeError::NotAuthenticated)
        }
    }
}

/// Compares two strings in constant time.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
