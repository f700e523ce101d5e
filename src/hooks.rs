//! Hook registry and lifecycle callback types.
//!
//! A [`Hooks`] value is the dispatch table of the engine: one optional async
//! handler per [`MessageType`], plus named slots for status changes,
//! platform-reported errors, and a generic whole-notification hook. It is
//! built once, handed to [`WebhookServiceBuilder::build`], and never mutated
//! afterwards — concurrent requests read it without synchronization.
//!
//! Registration is chainable, in the same style the service builder uses:
//!
//! ```rust
//! use whatsapp_webhooks_rs::hooks::Hooks;
//! use whatsapp_webhooks_rs::message::MessageType;
//!
//! let hooks = Hooks::new()
//!     .on_message(MessageType::Text, |ctx, msg| async move {
//!         println!("text from {} in entry {}", msg.from, ctx.entry_id);
//!         Ok(())
//!     })
//!     .on_status_change(|_ctx, status| async move {
//!         println!("message {} is now {:?}", status.id, status.status);
//!         Ok(())
//!     });
//! # let _ = hooks;
//! ```
//!
//! Hooks are awaited inline on the request task, in document order. A hook
//! that fails does not stop dispatch; its error is forwarded to the
//! hook-error reporter together with a [`HookError`] locating the unit that
//! failed. Cancellation is ambient: if the request future is dropped, the
//! in-flight hook is cancelled at its next await point.
//!
//! [`WebhookServiceBuilder::build`]: crate::webhook_service::WebhookServiceBuilder::build

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use futures::future::BoxFuture;
use http::HeaderMap;

use crate::error::{BoxError, Error};
use crate::message::{Message, MessageType};
use crate::notification::{Contact, Metadata, Notification, NotificationError, StatusChange};

/// What a hook invocation returns.
///
/// `Err` is forwarded to the hook-error reporter; it never fails the request.
pub type HookResult = Result<(), BoxError>;

pub(crate) type MessageHook =
    Box<dyn Fn(NotificationContext, Message) -> BoxFuture<'static, HookResult> + Send + Sync>;
pub(crate) type StatusChangeHook =
    Box<dyn Fn(NotificationContext, StatusChange) -> BoxFuture<'static, HookResult> + Send + Sync>;
pub(crate) type NotificationErrorHook = Box<
    dyn Fn(NotificationContext, NotificationError) -> BoxFuture<'static, HookResult> + Send + Sync,
>;
pub(crate) type NotificationHook =
    Box<dyn Fn(Notification) -> BoxFuture<'static, HookResult> + Send + Sync>;

pub(crate) type BeforeHook =
    Box<dyn Fn(RequestContext) -> BoxFuture<'static, HookResult> + Send + Sync>;
pub(crate) type AfterHook = Box<
    dyn Fn(Option<Notification>, Option<Arc<Error>>) -> BoxFuture<'static, ()> + Send + Sync,
>;

pub(crate) type HookErrorReporter = Box<dyn Fn(&HookError) + Send + Sync>;
pub(crate) type PlatformErrorReporter =
    Box<dyn Fn(&NotificationContext, &NotificationError) + Send + Sync>;

/// The registry of per-kind event handlers.
///
/// Every slot is optional; an event with no matching handler is skipped
/// silently. For messages there is one extra rule: a handler registered
/// under [`MessageType::Unrecognized`] doubles as the *fallback* for any
/// message kind that has no handler of its own.
#[derive(Default)]
pub struct Hooks {
    pub(crate) message: HashMap<MessageType, MessageHook>,
    pub(crate) status_change: Option<StatusChangeHook>,
    pub(crate) notification_error: Option<NotificationErrorHook>,
    pub(crate) notification: Option<NotificationHook>,
}

impl Hooks {
    /// Creates an empty registry. Dispatching against it invokes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for one message kind.
    ///
    /// Registering the same kind twice replaces the earlier handler. The
    /// handler receives the [`NotificationContext`] of the change the
    /// message arrived in and the decoded [`Message`].
    pub fn on_message<F, Fut>(mut self, kind: MessageType, hook: F) -> Self
    where
        F: Fn(NotificationContext, Message) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.message
            .insert(kind, Box::new(move |ctx, msg| Box::pin(hook(ctx, msg))));
        self
    }

    /// Registers the handler for delivery/read status updates.
    pub fn on_status_change<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(NotificationContext, StatusChange) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.status_change = Some(Box::new(move |ctx, status| Box::pin(hook(ctx, status))));
        self
    }

    /// Registers the handler for platform-reported notification errors.
    ///
    /// These are errors the upstream put *inside* the payload — data, not
    /// local faults. The platform-error reporter sees every such error
    /// regardless of whether this hook is registered.
    pub fn on_notification_error<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(NotificationContext, NotificationError) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.notification_error = Some(Box::new(move |ctx, err| Box::pin(hook(ctx, err))));
        self
    }

    /// Registers the generic notification handler.
    ///
    /// Invoked once per request, before any per-unit hook, with the entire
    /// decoded [`Notification`] — a place to react to the whole batch
    /// without per-kind knowledge.
    pub fn on_notification<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Notification) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.notification = Some(Box::new(move |notification| Box::pin(hook(notification))));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.message.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();

        f.debug_struct("Hooks")
            .field("message", &kinds)
            .field("status_change", &self.status_change.is_some())
            .field("notification_error", &self.notification_error.is_some())
            .field("notification", &self.notification.is_some())
            .finish()
    }
}

/// Where in the notification tree a dispatched unit came from.
///
/// Handed to every per-unit hook, and carried on [`HookError`] so reporter
/// output is actionable.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct NotificationContext {
    /// The business account the change belongs to.
    pub entry_id: String,

    /// The subscribed field of the change, e.g. `messages`.
    pub field: String,

    /// The business phone number the change concerns.
    pub metadata: Option<Metadata>,

    /// Sender contact information included with the change.
    pub contacts: Vec<Contact>,
}

impl NotificationContext {
    /// Looks up the contact record for a WhatsApp ID, typically a message's
    /// `from`.
    pub fn contact(&self, wa_id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.wa_id == wa_id)
    }
}

/// What the before-hook sees: the raw request, prior to decoding.
///
/// The body is the exact bytes the signature (if any) was verified over.
#[derive(Clone, Debug)]
pub struct RequestContext {
    headers: HeaderMap,
    body: Bytes,
}

impl RequestContext {
    pub(crate) fn new(headers: HeaderMap, body: Bytes) -> Self {
        Self { headers, body }
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw request body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A hook failure, tagged with enough context to be actionable.
///
/// Forwarded to the hook-error reporter; never surfaced in the HTTP
/// response. The locating fields are `None` for failures of the generic
/// notification hook, which has no single unit.
#[derive(Debug)]
#[non_exhaustive]
pub struct HookError {
    /// The business account of the failing unit.
    pub entry_id: Option<String>,

    /// The change field of the failing unit.
    pub field: Option<String>,

    /// The platform message ID, when the unit was a message or status change.
    pub message_id: Option<String>,

    /// What the hook returned.
    pub error: BoxError,
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hook failed")?;

        if let Some(entry_id) = &self.entry_id {
            write!(f, " (entry: {entry_id}")?;
            if let Some(field) = &self.field {
                write!(f, ", field: {field}")?;
            }
            if let Some(message_id) = &self.message_id {
                write!(f, ", message: {message_id}")?;
            }
            write!(f, ")")?;
        }

        write!(f, ": {}", self.error)
    }
}
