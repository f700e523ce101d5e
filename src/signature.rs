//! Webhook payload authenticity.
//!
//! Meta signs every webhook delivery with an HMAC-SHA256 of the raw request
//! body, keyed with your app secret, and sends it in the
//! `X-Hub-Signature-256` header as `sha256=<hex>`. This module extracts that
//! signature and verifies it without leaking timing information.
//!
//! Extraction and verification are separate fallible steps: a request with no
//! usable header fails extraction ([`SignatureError::MissingHeader`] /
//! [`SignatureError::MissingPrefix`]), a request with a wrong signature fails
//! verification ([`SignatureError::Mismatch`]).

use hmac::{Hmac, Mac};
use http::HeaderMap;
use sha2::Sha256;

use crate::error::SignatureError;

/// The request header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

/// The scheme prefix on the signature header value.
const SIGNATURE_PREFIX: &str = "sha256=";

/// Extracts the hex-encoded signature from the request headers.
///
/// Returns the hex digest with the `sha256=` prefix stripped.
///
/// # Example
/// ```rust
/// use http::HeaderMap;
/// use whatsapp_webhooks_rs::signature::{extract, SIGNATURE_HEADER};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(SIGNATURE_HEADER, "sha256=1234567890".parse().unwrap());
///
/// assert_eq!(extract(&headers).unwrap(), "1234567890");
/// ```
pub fn extract(headers: &HeaderMap) -> Result<&str, SignatureError> {
    let value = headers
        .get(SIGNATURE_HEADER)
        .ok_or(SignatureError::MissingHeader)?
        .to_str()
        .map_err(|_| SignatureError::InvalidHeader)?;

    value
        .strip_prefix(SIGNATURE_PREFIX)
        .ok_or(SignatureError::MissingPrefix)
}

/// Computes the hex-encoded HMAC-SHA256 signature of `body` under `secret`.
///
/// This is the value Meta puts after `sha256=` in the signature header. It is
/// exposed so callers can sign their own test traffic.
pub fn sign(secret: &str, body: &[u8]) -> String {
    // HMAC accepts keys of any length; new_from_slice only fails for
    // variable-output MACs, which Hmac<Sha256> is not.
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies `signature` (hex, no prefix) against the HMAC of `body` under `secret`.
///
/// Uses a constant-time comparison to prevent timing attacks.
pub fn verify(secret: &str, body: &[u8], signature: &str) -> Result<(), SignatureError> {
    let expected = sign(secret, body);

    if subtle::ConstantTimeEq::ct_eq(signature.as_bytes(), expected.as_bytes()).into() {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}
