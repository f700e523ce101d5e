//! The dispatch walk.
//!
//! Takes a decoded [`Notification`] and the hook registry and routes every
//! contained unit in document order: entries, then changes, then the change
//! value's messages, statuses, and errors, each in array order. There is no
//! internal fan-out; hooks run one after another on the request task, so
//! document order holds by construction and ambient cancellation reaches
//! every hook.

use tracing::debug;

use crate::hooks::{
    HookError, HookErrorReporter, Hooks, NotificationContext, PlatformErrorReporter,
};
use crate::message::{Message, MessageType};
use crate::notification::Notification;

/// The kind a message is routed under.
///
/// Classification reads only the discriminator; routing additionally looks
/// at the payload: a text message carrying ad-referral data routes as
/// `Referral`, and one enquiring about a catalog product routes as
/// `ProductEnquiry`, so those handlers win over the plain-text handler.
fn effective_kind(message: &Message) -> MessageType {
    match message.message_type {
        MessageType::Text if message.referral.is_some() => MessageType::Referral,
        MessageType::Text if message.referred_product().is_some() => MessageType::ProductEnquiry,
        kind => kind,
    }
}

/// Routes every unit of `notification` to its registered hook.
///
/// Hook failures are forwarded to `hook_errors` and never interrupt the
/// walk; by the time this returns, every unit has had its chance.
pub(crate) async fn dispatch(
    hooks: &Hooks,
    hook_errors: &HookErrorReporter,
    platform_errors: &PlatformErrorReporter,
    notification: &Notification,
) {
    // The generic hook goes first: once per request, whole batch.
    if let Some(hook) = &hooks.notification {
        if let Err(error) = hook(notification.clone()).await {
            hook_errors(&HookError {
                entry_id: None,
                field: None,
                message_id: None,
                error,
            });
        }
    }

    for entry in &notification.entries {
        for change in &entry.changes {
            let ctx = NotificationContext {
                entry_id: entry.id.clone(),
                field: change.field.clone(),
                metadata: change.value.metadata.clone(),
                contacts: change.value.contacts.clone(),
            };

            for message in &change.value.messages {
                let kind = effective_kind(message);
                let hook = hooks
                    .message
                    .get(&kind)
                    .or_else(|| hooks.message.get(&MessageType::Unrecognized));

                let Some(hook) = hook else {
                    debug!(kind = %kind, message = %message.id, "no hook registered, skipping message");
                    continue;
                };

                if let Err(error) = hook(ctx.clone(), message.clone()).await {
                    hook_errors(&HookError {
                        entry_id: Some(entry.id.clone()),
                        field: Some(change.field.clone()),
                        message_id: Some(message.id.clone()),
                        error,
                    });
                }
            }

            for status in &change.value.statuses {
                let Some(hook) = &hooks.status_change else {
                    debug!(message = %status.id, "no status-change hook registered, skipping");
                    continue;
                };

                if let Err(error) = hook(ctx.clone(), status.clone()).await {
                    hook_errors(&HookError {
                        entry_id: Some(entry.id.clone()),
                        field: Some(change.field.clone()),
                        message_id: Some(status.id.clone()),
                        error,
                    });
                }
            }

            for platform_error in &change.value.errors {
                // The reporter sees every platform-reported error; the hook
                // is ordinary, optional dispatch on top of it.
                platform_errors(&ctx, platform_error);

                if let Some(hook) = &hooks.notification_error {
                    if let Err(error) = hook(ctx.clone(), platform_error.clone()).await {
                        hook_errors(&HookError {
                            entry_id: Some(entry.id.clone()),
                            field: Some(change.field.clone()),
                            message_id: None,
                            error,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageContent;
    use crate::message::ReferredProduct;

    fn text_message() -> Message {
        serde_json::from_str(
            r#"{"from":"123","id":"wamid.T","timestamp":"1","type":"text","text":{"body":"hi"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn plain_text_routes_as_text() {
        assert_eq!(effective_kind(&text_message()), MessageType::Text);
    }

    #[test]
    fn text_with_referred_product_routes_as_product_enquiry() {
        let mut message = text_message();
        message.context = Some(crate::message::MessageContext {
            referred_product: Some(ReferredProduct {
                catalog_id: "CATALOG".into(),
                product_retailer_id: "SKU".into(),
            }),
            ..Default::default()
        });

        assert_eq!(effective_kind(&message), MessageType::ProductEnquiry);
        assert!(matches!(message.content, MessageContent::Text(_)));
    }

    #[test]
    fn text_with_referral_routes_as_referral() {
        let mut message = text_message();
        message.referral = Some(crate::message::Referral {
            source_type: Some("ad".into()),
            ..Default::default()
        });

        assert_eq!(effective_kind(&message), MessageType::Referral);
    }

    #[test]
    fn non_text_kinds_route_unchanged() {
        let message: Message = serde_json::from_str(
            r#"{"from":"123","id":"wamid.R","timestamp":"1","type":"reaction","reaction":{"message_id":"wamid.T","emoji":"❤"}}"#,
        )
        .unwrap();

        assert_eq!(effective_kind(&message), MessageType::Reaction);
    }
}
