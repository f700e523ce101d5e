//! Error Handling
//!
//! This module defines the crate's core error types, providing a structured way to handle
//! the issues that can occur while receiving and dispatching WhatsApp webhook
//! notifications: authentication failures, payload decoding failures, lifecycle
//! vetoes, and engine misconfiguration.

use std::error::Error as StdError;

/// The **top-level error enum** for the `whatsapp-webhooks-rs` crate.
///
/// This enum aggregates the categories of errors that can terminate a webhook
/// request. It uses `#[non_exhaustive]` to allow for future additions of error
/// variants without breaking client code.
///
/// Note that a *hook* failure is deliberately not represented here: a failing
/// hook never terminates a request. Those failures travel to the hook-error
/// reporter as a [`HookError`] instead.
///
/// [`HookError`]: crate::hooks::HookError
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request failed the authenticity gate: the signature header was
    /// missing, malformed, or did not match the HMAC of the body.
    #[error("signature verification failed: {0}")]
    Signature(#[from] SignatureError),

    /// The request body could not be decoded into a [`Notification`] tree.
    ///
    /// This covers malformed JSON as well as a known field carrying an
    /// incompatible shape. Unknown extra fields are *not* an error; the
    /// upstream schema grows and the decoder ignores what it does not know.
    ///
    /// [`Notification`]: crate::notification::Notification
    #[error("failed to decode webhook payload: {0}")]
    Decode(#[from] DecodeError),

    /// The before-hook declined to proceed with the request.
    ///
    /// The wrapped error is whatever the caller's before-hook returned.
    #[error("request rejected by before-hook: {0}")]
    Rejected(#[source] BoxError),
}

impl Error {
    pub(crate) fn rejected(err: BoxError) -> Self {
        Self::Rejected(err)
    }
}

/// Errors from signature extraction and verification.
///
/// Extraction failures (`MissingHeader`, `InvalidHeader`, `MissingPrefix`) are
/// distinct from an actual `Mismatch`: the former mean the request never
/// presented a checkable signature, the latter means it presented one and it
/// was wrong.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignatureError {
    /// No `X-Hub-Signature-256` header on the request.
    #[error("missing X-Hub-Signature-256 header")]
    MissingHeader,

    /// The header value was not visible ASCII.
    #[error("signature header is not valid ASCII")]
    InvalidHeader,

    /// The header value did not start with the `sha256=` scheme prefix.
    #[error("signature header is missing the 'sha256=' prefix")]
    MissingPrefix,

    /// The provided signature did not match the HMAC of the body.
    #[error("signature does not match the request body")]
    Mismatch,
}

/// An error that occurred while **decoding a webhook payload** into the
/// notification tree.
///
/// Carries the original raw body content that could not be decoded, useful
/// for debugging a misbehaving upstream or a tampered request.
#[derive(thiserror::Error, Debug)]
#[error("invalid notification payload. Raw body content was: '{body}'")]
#[non_exhaustive]
pub struct DecodeError {
    #[source]
    pub(crate) source: serde_json::Error,
    pub body: String,
}

impl DecodeError {
    pub(crate) fn new(source: serde_json::Error, body: &[u8]) -> Self {
        Self {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// Errors raised while **building a [`WebhookService`]**.
///
/// Configuration is validated once, at build time, so an invalid combination
/// fails early instead of at the first request.
///
/// [`WebhookService`]: crate::webhook_service::WebhookService
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Signature validation was enabled without providing a secret.
    #[error("signature validation is enabled but no app secret was provided")]
    MissingSecret,
}

/// A convenient type alias for a boxed, trait-object error that can be sent across threads.
///
/// This is the error type caller-supplied hooks return; it erases the concrete
/// type so hooks from different subsystems can share one registry.
pub type BoxError = Box<dyn StdError + Send + Sync>;
