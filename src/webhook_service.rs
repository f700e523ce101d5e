//! The webhook service — for "Bring Your Own Server" integrations.
//!
//! This module provides a [`WebhookService`] that encapsulates the full
//! request lifecycle for a WhatsApp webhook endpoint: signature gate,
//! before-hook, payload decode, per-unit dispatch, after-hook, and response
//! mapping. It is designed to be mounted in any web server framework that
//! uses standard `http` types, such as `axum`, `hyper`, or `warp` — the
//! service is handed a request and produces a response, nothing more.
//!
//! # Key Components
//!
//! - [`WebhookServiceBuilder`]: configures the secret, signature validation,
//!   lifecycle hooks, error reporters, and response statuses. Validation
//!   happens once, at [`build`], so a bad combination fails at startup
//!   rather than at the first request.
//! - [`WebhookService`]: the configured engine. It's `Clone`, `Send`, `Sync`,
//!   and `'static`, making it suitable for use as shared state in any web
//!   framework.
//! - [`WebhookService::handle`]: the single asynchronous method that
//!   processes an incoming `http::Request` and returns an `http::Response`.
//!
//! # Request lifecycle
//!
//! ```text
//! POST ─► signature gate ─► before-hook ─► decode ─► dispatch ─► after-hook ─► 200
//!             │fail             │veto         │fail
//!             ▼                 ▼             ▼
//!            401               403      400 (+ after-hook)
//! ```
//!
//! All three non-success statuses are configurable. Hook failures during
//! dispatch never change the response: the upstream platform retries on any
//! non-2xx, and a caller bug must not turn into a redelivery storm.
//!
//! # Usage Example (with axum)
//!
//! ```rust,no_run
//! use whatsapp_webhooks_rs::{Hooks, MessageType, WebhookService};
//! use axum::{Router, routing::post};
//!
//! #[tokio::main]
//! async fn main() {
//!     let hooks = Hooks::new().on_message(MessageType::Text, |_ctx, msg| async move {
//!         println!("{} says: {:?}", msg.from, msg.text_body());
//!         Ok(())
//!     });
//!
//!     // 1. Build the service
//!     let service = WebhookService::builder()
//!         .secret("my_app_secret")
//!         .validate_signature(true)
//!         .build(hooks)
//!         .unwrap();
//!
//!     // 2. Integrate into your router
//!     let app = Router::new().route(
//!         "/webhook",
//!         post({
//!             let service = service.clone();
//!             move |req: axum::extract::Request| async move { service.handle(req).await }
//!         }),
//!     );
//!
//!     // 3. Run your server
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! [`build`]: WebhookServiceBuilder::build

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::extract::Query;
use axum::response::IntoResponse;
use http::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::dispatch;
use crate::error::{ConfigError, Error};
use crate::hooks::{
    AfterHook, BeforeHook, HookError, HookErrorReporter, HookResult, Hooks, NotificationContext,
    PlatformErrorReporter, RequestContext,
};
use crate::notification::{Notification, NotificationError};
use crate::signature;

// Not stable
pub type Body = axum::body::Body;

/// Upstream notifications are small; anything past this is not a webhook.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// A builder for creating a [`WebhookService`].
///
/// Collects the whole configuration surface of the engine: the shared
/// secret, the signature-validation switch, the subscription verify token,
/// the lifecycle hooks, the two error reporters, and the non-success
/// response statuses. [`build`] validates the combination and returns the
/// immutable service.
///
/// [`build`]: WebhookServiceBuilder::build
#[derive(Default)]
#[must_use]
pub struct WebhookServiceBuilder {
    secret: Option<String>,
    validate_signature: bool,
    verify_token: Option<String>,
    before: Option<BeforeHook>,
    after: Option<AfterHook>,
    hook_errors: Option<HookErrorReporter>,
    platform_errors: Option<PlatformErrorReporter>,
    signature_failure_status: Option<StatusCode>,
    bad_payload_status: Option<StatusCode>,
    rejection_status: Option<StatusCode>,
}

impl WebhookServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app secret used to verify payload signatures.
    ///
    /// Required when [`validate_signature`] is enabled.
    ///
    /// [`validate_signature`]: WebhookServiceBuilder::validate_signature
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Enables or disables signature verification of incoming payloads.
    ///
    /// When enabled, the engine recomputes the HMAC-SHA256 of every request
    /// body under the configured secret and compares it, constant-time,
    /// against the `X-Hub-Signature-256` header; mismatches are rejected
    /// before anything is decoded. When disabled — useful for local
    /// development — no extraction or comparison occurs at all.
    ///
    /// # Security Note 🔒
    /// It is **highly recommended** to enable signature validation in
    /// production so that only payloads genuinely originating from Meta's
    /// servers reach your hooks.
    pub fn validate_signature(mut self, validate: bool) -> Self {
        self.validate_signature = validate;
        self
    }

    /// Sets the verify token for the webhook subscription handshake.
    ///
    /// During webhook setup in the Meta Developer Console you provide a
    /// "Verify Token"; Meta then sends a GET request carrying
    /// `hub.verify_token` and `hub.challenge` query parameters, and the
    /// endpoint must echo the challenge when the tokens match. With a token
    /// configured, [`WebhookService::handle`] answers that handshake;
    /// without one, GET requests are refused.
    pub fn verify_token(mut self, verify_token: impl Into<String>) -> Self {
        self.verify_token = Some(verify_token.into());
        self
    }

    /// Registers the before-hook.
    ///
    /// Invoked with the raw [`RequestContext`] after the signature gate but
    /// before decoding. Returning an error vetoes the request: nothing is
    /// decoded, no other hook runs, and the response carries the
    /// [`rejection_status`].
    ///
    /// [`rejection_status`]: WebhookServiceBuilder::rejection_status
    pub fn before<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.before = Some(Box::new(move |ctx| Box::pin(hook(ctx))));
        self
    }

    /// Registers the after-hook.
    ///
    /// Invoked exactly once after dispatch completes — successfully or not —
    /// with the decoded notification (`None` if decoding failed) and the
    /// terminal error (`None` on success). Strictly observational: by the
    /// time it runs the response is already decided.
    pub fn after<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Notification>, Option<Arc<Error>>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.after = Some(Box::new(move |notification, error| {
            Box::pin(hook(notification, error))
        }));
        self
    }

    /// Installs the reporter for hook failures.
    ///
    /// Called synchronously with each [`HookError`] as dispatch encounters
    /// it. The default reporter does nothing; absence and no-op are
    /// behaviorally identical.
    pub fn hook_error_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&HookError) + Send + Sync + 'static,
    {
        self.hook_errors = Some(Box::new(reporter));
        self
    }

    /// Installs the reporter for platform-reported errors.
    ///
    /// Called with every [`NotificationError`] found inside a payload,
    /// before the notification-error hook (if any) runs. These are the
    /// upstream's errors, not this engine's. The default reporter does
    /// nothing.
    pub fn platform_error_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&NotificationContext, &NotificationError) + Send + Sync + 'static,
    {
        self.platform_errors = Some(Box::new(reporter));
        self
    }

    /// Sets the status returned when signature extraction or verification
    /// fails. Defaults to `401 Unauthorized`.
    pub fn signature_failure_status(mut self, status: StatusCode) -> Self {
        self.signature_failure_status = Some(status);
        self
    }

    /// Sets the status returned when the payload cannot be decoded.
    /// Defaults to `400 Bad Request`.
    pub fn bad_payload_status(mut self, status: StatusCode) -> Self {
        self.bad_payload_status = Some(status);
        self
    }

    /// Sets the status returned when the before-hook vetoes a request.
    /// Defaults to `403 Forbidden`.
    pub fn rejection_status(mut self, status: StatusCode) -> Self {
        self.rejection_status = Some(status);
        self
    }

    /// Builds and returns a [`WebhookService`] from the configured builder.
    ///
    /// # Arguments
    /// * `hooks` - The per-kind dispatch table. An empty [`Hooks`] is valid;
    ///   every event is then skipped silently.
    ///
    /// # Errors
    /// [`ConfigError::MissingSecret`] when signature validation is enabled
    /// without a non-empty secret.
    pub fn build(self, hooks: Hooks) -> Result<WebhookService, ConfigError> {
        if self.validate_signature && self.secret.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingSecret);
        }

        Ok(WebhookService {
            inner: Arc::new(Inner {
                hooks,
                secret: self.secret,
                validate_signature: self.validate_signature,
                verify_token: self.verify_token,
                before: self.before,
                after: self.after,
                hook_errors: self.hook_errors.unwrap_or_else(|| Box::new(|_| {})),
                platform_errors: self.platform_errors.unwrap_or_else(|| Box::new(|_, _| {})),
                signature_failure_status: self
                    .signature_failure_status
                    .unwrap_or(StatusCode::UNAUTHORIZED),
                bad_payload_status: self.bad_payload_status.unwrap_or(StatusCode::BAD_REQUEST),
                rejection_status: self.rejection_status.unwrap_or(StatusCode::FORBIDDEN),
            }),
        })
    }
}

/// Shared, immutable state behind the service.
struct Inner {
    hooks: Hooks,
    secret: Option<String>,
    validate_signature: bool,
    verify_token: Option<String>,
    before: Option<BeforeHook>,
    after: Option<AfterHook>,
    hook_errors: HookErrorReporter,
    platform_errors: PlatformErrorReporter,
    signature_failure_status: StatusCode,
    bad_payload_status: StatusCode,
    rejection_status: StatusCode,
}

/// The notification dispatch engine, ready to handle requests.
///
/// Created with [`WebhookService::builder`]. Cheap to clone (an `Arc`
/// internally) and immutable after build: concurrent requests share it
/// without synchronization, and nothing mutates the registry or
/// configuration afterwards.
#[derive(Clone)]
pub struct WebhookService {
    inner: Arc<Inner>,
}

impl fmt::Debug for WebhookService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookService")
            .field("hooks", &self.inner.hooks)
            .field("validate_signature", &self.inner.validate_signature)
            .field("verify_token", &self.inner.verify_token.is_some())
            .finish_non_exhaustive()
    }
}

impl WebhookService {
    /// Returns a new builder to create a `WebhookService`.
    pub fn builder() -> WebhookServiceBuilder {
        WebhookServiceBuilder::new()
    }

    /// The primary request handler for your server.
    ///
    /// This single function handles both GET (subscription handshake) and
    /// POST (notification payload) requests. It is generic over the body so
    /// it can be used with `axum`, `hyper`, `warp`, and other
    /// `http`-compatible frameworks.
    ///
    /// The returned status is `200` for any structurally valid,
    /// signature-verified notification, regardless of how many individual
    /// hooks failed — the upstream treats any non-2xx as a request to
    /// redeliver, and hook failures are a caller-observability concern, not
    /// a transport one.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Body>
    where
        B: Into<Body>,
    {
        let req = req.map(Into::into);
        let method = req.method().clone();

        if method == Method::POST {
            self.handle_notification(req).await
        } else if method == Method::GET {
            self.handle_verification(&req)
        } else {
            StatusCode::METHOD_NOT_ALLOWED.into_response()
        }
    }

    /// The POST path: the dispatch state machine.
    async fn handle_notification(&self, req: Request<Body>) -> Response<Body> {
        let inner = &self.inner;
        let (parts, body) = req.into_parts();

        let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to read webhook request body");
                return (inner.bad_payload_status, "Failed to read request body.").into_response();
            }
        };

        if inner.validate_signature {
            // build() guarantees a non-empty secret when validation is on.
            let secret = inner.secret.as_deref().unwrap_or_default();
            let verdict = signature::extract(&parts.headers)
                .and_then(|provided| signature::verify(secret, &body, provided));

            if let Err(err) = verdict {
                let err = Error::Signature(err);
                warn!(error = %err, "rejecting webhook request");
                return (
                    inner.signature_failure_status,
                    "Signature verification failed",
                )
                    .into_response();
            }
        }

        if let Some(before) = &inner.before {
            let ctx = RequestContext::new(parts.headers.clone(), body.clone());
            if let Err(err) = before(ctx).await {
                let err = Error::rejected(err);
                warn!(error = %err, "before-hook vetoed webhook request");
                return (inner.rejection_status, "Request rejected.").into_response();
            }
        }

        let notification = match Notification::from_slice(&body) {
            Ok(notification) => notification,
            Err(err) => {
                warn!(error = %err.source, "webhook payload failed to decode");
                self.after(None, Some(Arc::new(Error::Decode(err)))).await;
                return (
                    inner.bad_payload_status,
                    "Invalid JSON payload. Please ensure the body is valid JSON.",
                )
                    .into_response();
            }
        };

        debug!(
            object = %notification.object,
            entries = notification.entries.len(),
            "dispatching webhook notification"
        );

        dispatch::dispatch(
            &inner.hooks,
            &inner.hook_errors,
            &inner.platform_errors,
            &notification,
        )
        .await;

        self.after(Some(notification), None).await;

        (StatusCode::OK, "").into_response()
    }

    /// The GET path: Meta's challenge-response handshake.
    fn handle_verification(&self, req: &Request<Body>) -> Response<Body> {
        let Some(verify_token) = &self.inner.verify_token else {
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                "GET method not supported without a verify_token configured.",
            )
                .into_response();
        };

        let challenge = match Query::<WebhookChallenge>::try_from_uri(req.uri()) {
            Ok(Query(challenge)) => challenge,
            Err(err) => {
                warn!(error = %err, "malformed verification request");
                return (StatusCode::BAD_REQUEST, "Invalid verification request.").into_response();
            }
        };

        // Verify the token matches our secret and echo
        if challenge.hub_verify_token == *verify_token {
            (StatusCode::OK, challenge.hub_challenge).into_response()
        } else {
            warn!(
                received = %challenge.hub_verify_token,
                "invalid verification token"
            );
            (StatusCode::FORBIDDEN, "Invalid verification token").into_response()
        }
    }

    async fn after(&self, notification: Option<Notification>, error: Option<Arc<Error>>) {
        if let Some(after) = &self.inner.after {
            after(notification, error).await;
        }
    }
}

// Webhook challenge struct
#[derive(Debug, Deserialize)]
struct WebhookChallenge {
    #[serde(rename = "hub.mode", default)]
    _hub_mode: String,
    #[serde(rename = "hub.challenge", default)]
    hub_challenge: String,
    #[serde(rename = "hub.verify_token", default)]
    hub_verify_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_enabled_requires_secret() {
        let err = WebhookService::builder()
            .validate_signature(true)
            .build(Hooks::new())
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingSecret);
    }

    #[test]
    fn empty_secret_is_rejected_like_a_missing_one() {
        let err = WebhookService::builder()
            .validate_signature(true)
            .secret("")
            .build(Hooks::new())
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingSecret);
    }

    #[test]
    fn secret_without_validation_builds() {
        WebhookService::builder()
            .secret("lilsecretofold")
            .build(Hooks::new())
            .unwrap();
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let service = WebhookService::builder().build(Hooks::new()).unwrap();

        let req = Request::delete("/webhook").body(Body::empty()).unwrap();
        let response = service.handle(req).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn get_without_verify_token_is_refused() {
        let service = WebhookService::builder().build(Hooks::new()).unwrap();

        let req = Request::get("/webhook?hub.mode=subscribe&hub.challenge=123&hub.verify_token=x")
            .body(Body::empty())
            .unwrap();
        let response = service.handle(req).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
