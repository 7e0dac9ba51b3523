/*
[INPUT]:  URL-encoded form body and API secret
[OUTPUT]: Lowercase hex HMAC-SHA1 signature (sig header)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::http::{FybError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Compute the hex HMAC-SHA1 of `encoded_body` keyed by `secret`.
///
/// The exchange verifies this exact digest, so the hash function is fixed.
pub fn sign(encoded_body: &str, secret: &str) -> Result<String> {
    let mut mac = <HmacSha1 as KeyInit>::new_from_slice(secret.as_bytes())
        .map_err(|e| FybError::Signing(e.to_string()))?;
    mac.update(encoded_body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Signs form bodies for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer holding the API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign an encoded form body
    pub fn sign_request(&self, encoded_body: &str) -> Result<String> {
        sign(encoded_body, &self.secret)
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
