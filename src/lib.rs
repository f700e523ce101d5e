#![deny(clippy::future_not_send)]
#![deny(clippy::large_enum_variant)]

//! # whatsapp_webhooks_rs
//!
//! A notification dispatch engine for WhatsApp Business Platform webhooks.
//! This crate receives the HTTP POST Meta sends to your endpoint, verifies
//! its authenticity, decodes the notification envelope into a typed tree,
//! and routes every contained event — inbound messages of all kinds,
//! delivery status changes, and platform-reported errors — to the async
//! hook you registered for that exact event kind.
//!
//! ## ✨ Features
//!
//! - **Typed payload model**: the full Notification → Entry → Change → Value
//!   tree, with every message kind (text, media, location, contacts, orders,
//!   interactive replies, reactions, referrals, system events) decoded into
//!   its own payload struct. Unknown upstream additions degrade gracefully
//!   instead of failing requests.
//! - **Signature gate**: HMAC-SHA256 payload verification against the
//!   `X-Hub-Signature-256` header with constant-time comparison, skippable
//!   for local development.
//! - **Per-kind dispatch table**: one optional hook per [`MessageType`],
//!   plus status-change, notification-error, and whole-notification slots,
//!   with a well-defined fallback and document-order guarantees.
//! - **Request lifecycle**: an optional before-hook that can veto a request
//!   and an observational after-hook that sees every outcome.
//! - **Failure isolation**: a failing hook is reported, tagged with the
//!   entry/change/message that failed, and never turns into a non-2xx
//!   response — the platform must not be told to redeliver.
//! - **Subscription handshake**: answers Meta's `hub.challenge` GET
//!   verification when a verify token is configured.
//!
//! ## 🚀 Example
//!
//! ```rust,no_run
//! use whatsapp_webhooks_rs::{Hooks, MessageType, WebhookService};
//! use axum::{Router, routing::any};
//!
//! #[tokio::main]
//! async fn main() {
//!     let hooks = Hooks::new()
//!         .on_message(MessageType::Text, |ctx, msg| async move {
//!             let name = ctx
//!                 .contact(&msg.from)
//!                 .map(|c| c.profile.name.as_str())
//!                 .unwrap_or("someone");
//!             println!("{name} says: {:?}", msg.text_body());
//!             Ok(())
//!         })
//!         .on_status_change(|_ctx, status| async move {
//!             println!("message {} is now {:?}", status.id, status.status);
//!             Ok(())
//!         });
//!
//!     let service = WebhookService::builder()
//!         .secret("YOUR_META_APP_SECRET")
//!         .validate_signature(true)
//!         .verify_token("MY_SECURE_VERIFICATION_TOKEN")
//!         .hook_error_reporter(|err| eprintln!("hook failed: {err}"))
//!         .build(hooks)
//!         .unwrap();
//!
//!     // `handle` accepts GET (handshake) and POST (notifications) alike.
//!     let app = Router::new().route(
//!         "/webhook",
//!         any({
//!             let service = service.clone();
//!             move |req: axum::extract::Request| async move { service.handle(req).await }
//!         }),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! ## Dispatch semantics, in one place
//!
//! For every structurally valid, signature-verified request the engine:
//!
//! 1. invokes the generic notification hook (if registered) once with the
//!    whole batch,
//! 2. walks entries → changes → messages/statuses/errors in document order,
//! 3. routes each message under its classified kind (a hook registered for
//!    [`MessageType::Unrecognized`] acts as the fallback for kinds without
//!    their own hook),
//! 4. feeds every platform-reported error to the platform-error reporter,
//! 5. forwards each hook failure to the hook-error reporter and keeps going,
//! 6. answers `200` regardless of how many hooks failed.

mod dispatch;
pub mod error;
pub mod hooks;
pub mod message;
pub mod notification;
pub mod signature;
pub mod webhook_service;

use serde::{de, Deserialize, Deserializer};
use std::fmt;

/// Represents a timestamp carried in a webhook payload.
///
/// Meta typically uses UNIX timestamps (`seconds since epoch`), but encodes
/// them inconsistently: some payloads carry a JSON number, others a decimal
/// string. Both decode into this type.
///
/// # Note
/// - Currently, all observed timestamps are UNIX-based.
/// - This may change without warning.
/// - Always assume the value is a raw `i64` unless explicitly documented otherwise.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Timestamp {
    pub(crate) inner: i64,
}

impl Timestamp {
    /// Returns the raw timestamp in seconds.
    ///
    /// This is usually a UNIX timestamp (seconds since epoch).
    pub fn seconds(&self) -> i64 {
        self.inner
    }
}

impl From<i64> for Timestamp {
    fn from(inner: i64) -> Self {
        Self { inner }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl de::Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a unix timestamp as an integer or a decimal string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Timestamp { inner: v })
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Timestamp { inner: v as i64 })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<i64>()
                    .map(|inner| Timestamp { inner })
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

pub use error::Error;
pub use hooks::Hooks;
pub use message::{Message, MessageType};
pub use notification::Notification;
pub use webhook_service::{WebhookService, WebhookServiceBuilder};
