//! Webhook notification envelope.
//!
//! Every delivery from the platform is one `Notification`: the business
//! object tag plus a batch of per-account [`Entry`] items, each carrying
//! field-tagged [`Change`]s whose [`Value`] holds the substantive payload —
//! inbound [`Message`]s, outbound-message [`StatusChange`]s, or
//! platform-reported [`NotificationError`]s.
//!
//! The decoder is strict about shape (a known field with an incompatible
//! shape fails the request) but ignores every field it does not know: the
//! upstream schema is a moving target and unknown additions must not break
//! the endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::DecodeError;
use crate::message::Message;
use crate::Timestamp;

/// The top-level webhook payload.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Notification {
    /// The webhook object a business is subscribed to, normally
    /// `whatsapp_business_account`. Carried as data, never validated: a new
    /// product domain must not break the endpoint.
    #[serde(default)]
    pub object: String,

    /// The batched changes. Multiple changes of the same type from different
    /// objects may be batched together; an empty batch is valid and simply
    /// dispatches nothing.
    #[serde(rename = "entry", default)]
    pub entries: Vec<Entry>,
}

impl Notification {
    /// Decodes a notification from raw body bytes.
    ///
    /// Malformed JSON or an incompatible field shape is terminal; unknown
    /// extra fields are ignored. Decoding is deterministic: the same bytes
    /// always produce a structurally equal tree.
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(|err| DecodeError::new(err, body))
    }
}

/// One business account's batch of changes within a [`Notification`].
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Entry {
    /// The WhatsApp Business Account ID this batch belongs to.
    #[serde(default)]
    pub id: String,

    /// When the event notification was sent (not when the change occurred).
    #[serde(default)]
    pub time: Option<Timestamp>,

    /// The changed fields and their new values.
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// One field-tagged unit of change within an [`Entry`].
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Change {
    /// The subscribed field that changed, e.g. `messages`.
    #[serde(default)]
    pub field: String,

    /// The substantive payload of the change.
    #[serde(default)]
    pub value: Value,
}

/// The payload body of a [`Change`].
///
/// In a well-formed payload at most one of `messages`, `statuses`, and
/// `errors` is populated, but the model tolerates any subset being empty.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Value {
    /// The messaging product, normally `whatsapp`.
    #[serde(default)]
    pub messaging_product: Option<String>,

    /// The business phone number the event concerns.
    #[serde(default)]
    pub metadata: Option<Metadata>,

    /// Sender contact information for the messages in this value.
    #[serde(default)]
    pub contacts: Vec<Contact>,

    /// Inbound user messages.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Delivery/read status updates for previously sent messages.
    #[serde(default)]
    pub statuses: Vec<StatusChange>,

    /// Errors the platform reports about the subscription itself.
    #[serde(default)]
    pub errors: Vec<NotificationError>,
}

/// The business phone number a change belongs to.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Metadata {
    /// The display phone number of the business
    #[serde(default)]
    pub display_phone_number: String,

    /// ID for the phone number. A business replies to a message using this ID.
    #[serde(default)]
    pub phone_number_id: String,
}

/// A customer who sent one of the messages in a change value.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Contact {
    /// The customer's WhatsApp ID. May not match the customer's phone number.
    #[serde(default)]
    pub wa_id: String,

    /// Additional unique, alphanumeric identifier for the WhatsApp user.
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub profile: Profile,
}

/// A customer profile object.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Profile {
    /// The customer's name.
    #[serde(default)]
    pub name: String,
}

/// A delivery/read status update for a previously sent outbound message.
///
/// A `read` status implies delivery: when a message is delivered and read
/// almost simultaneously, the platform skips the `delivered` notification.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct StatusChange {
    /// The ID of the outbound message this update concerns.
    pub id: String,

    /// The new delivery state.
    pub status: DeliveryStatus,

    /// When the status changed.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,

    /// The customer's WhatsApp ID the message was sent to.
    #[serde(default)]
    pub recipient_id: Option<String>,

    /// Conversation-level metadata.
    #[serde(default)]
    pub conversation: Option<ConversationInfo>,

    /// Pricing data for the message.
    #[serde(default)]
    pub pricing: Option<Pricing>,

    /// Data originally attached to the message (e.g., custom tags).
    #[serde(default)]
    pub biz_opaque_callback_data: Option<String>,

    /// Platform errors related to this message, populated on `failed`.
    #[serde(default)]
    pub errors: Vec<NotificationError>,
}

/// The delivery state of an outbound message.
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DeliveryStatus {
    /// Message in transit within WhatsApp systems
    Accepted,
    /// Message sent to WhatsApp
    Sent,
    /// Message delivered to device
    Delivered,
    /// Message read by recipient
    Read,
    /// Message failed to send
    Failed,
    /// Catalog item in message is unavailable
    Warning,
    /// Message was deleted by sender
    Deleted,
    /// Any state not enumerated yet. Decodes rather than failing the
    /// request, so new upstream states degrade gracefully.
    #[serde(untagged)]
    Other(String),
}

/// Metadata about the conversation a status update is part of.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct ConversationInfo {
    /// Unique conversation ID
    pub id: String,

    /// Origin type
    #[serde(deserialize_with = "deserialize_origin", default)]
    pub origin: Option<ConversationOrigin>,

    /// When the conversation will expire, if known
    #[serde(default)]
    pub expiration_timestamp: Option<Timestamp>,
}

/// The category of conversation being billed.
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ConversationOrigin {
    /// Any category not enumerated
    #[serde(untagged)]
    Other(String),
}

/// Pricing metadata for a billed message.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Pricing {
    /// Whether this message is billable
    #[serde(default)]
    pub billable: Option<bool>,

    /// Pricing model name (e.g. "CBP")
    #[serde(default)]
    pub pricing_model: Option<String>,

    /// What type of conversation this falls under
    #[serde(default)]
    pub category: Option<String>,
}

// The wire shape is {"origin": {"type": "..."}}; callers only ever want the
// type tag.
fn deserialize_origin<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ConversationOrigin>, D::Error> {
    #[derive(Deserialize)]
    struct Object {
        r#type: ConversationOrigin,
    }

    let helper = <Option<Object>>::deserialize(deserializer)?;
    Ok(helper.map(|o| o.r#type))
}

/// An **error object reported by the platform inside a webhook payload**.
///
/// This is data about the upstream's own failures — an undeliverable
/// message, an unsupported message kind, a subscription problem — not a
/// fault of this engine. It is distinct from the crate's [`Error`] enum,
/// which describes local request-processing failures.
///
/// Both the legacy top-level `details` placement and the v16+
/// `error_data.details` placement decode; [`NotificationError::details`]
/// returns whichever is present.
///
/// [`Error`]: crate::error::Error
#[derive(thiserror::Error, Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct NotificationError {
    /// Numerical error code assigned by the platform.
    pub code: i64,

    /// Concise title or summary of the error.
    #[serde(default)]
    pub title: Option<String>,

    /// A more descriptive message explaining the error.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    details: Option<String>,

    #[serde(rename = "error_data", default)]
    error_data: ErrorData,

    /// URL pointing to the platform's documentation for the error.
    #[serde(rename = "href", default)]
    pub support: Option<String>,
}

impl NotificationError {
    /// Detailed description of the error, wherever the payload placed it.
    pub fn details(&self) -> Option<&str> {
        self.error_data.details.as_deref().or(self.details.as_deref())
    }
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(code: {})", self.code)?;

        if let Some(title) = &self.title {
            write!(f, " - {title}")?;
        }

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(details) = self.details() {
            write!(f, " ({details})")?;
        }

        if let Some(support) = &self.support {
            write!(f, " [{support}]")?;
        }

        Ok(())
    }
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
struct ErrorData {
    #[serde(default)]
    details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageContent, MessageType};

    // We only test for successful deserialization
    macro_rules! test_payload {
        (|$title:ident|: $($payload:tt)*) => {
            #[test]
            fn $title() {
                serde_json::from_str::<Notification>(stringify!($($payload)*)).unwrap();
            }
        }
    }

    test_payload! {
        |unknown|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "WHATSAPP_BUSINESS_ACCOUNT_ID",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "PHONE_NUMBER",
                      "phone_number_id": "PHONE_NUMBER_ID"
                    },
                    "contacts": [
                      {
                        "profile": {
                          "name": "NAME"
                        },
                        "wa_id": "WHATSAPP_ID"
                      }
                    ],
                    "messages": [
                      {
                        "from": "PHONE_NUMBER",
                        "id": "wamid.ID",
                        "timestamp": "1731617831",
                        "errors": [
                          {
                            "code": 131051,
                            "details": "Message type is not currently supported",
                            "title": "Unsupported message type"
                          }
                        ],
                        "type": "unknown"
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |order_message|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "8856996819413533",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "16505553333",
                      "phone_number_id": "phone-number-id"
                    },
                    "contacts": [
                      {
                        "profile": {
                          "name": "Kerry Fisher"
                        },
                        "wa_id": "16315551234"
                      }
                    ],
                    "messages": [
                      {
                        "from": "16315551234",
                        "id": "wamid.ABGGFlCGg0cvAgo6cHbBhfK5760V",
                        "order": {
                          "catalog_id": "the-catalog_id",
                          "product_items": [
                            {
                              "product_retailer_id": "the-product-SKU-identifier",
                              "quantity": 50,
                              "item_price": 308,
                              "currency": "USD"
                            }
                          ],
                          "text": "text-message-sent-along-with-the-order"
                        },
                        "context": {
                          "from": "16315551234",
                          "id": "wamid.gBGGFlaCGg0xcvAdgmZ9plHrf2Mh-o"
                        },
                        "timestamp": 1603069091,
                        "type": "order"
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |contextual_message|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "ID",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "PHONE_NUMBER",
                      "phone_number_id": "PHONE_NUMBER_ID"
                    },
                    "contacts": [
                      {
                        "profile": {
                          "name": "NAME"
                        },
                        "wa_id": "PHONE_NUMBER_ID"
                      }
                    ],
                    "messages": [
                      {
                        "from": "PHONE_NUMBER",
                        "id": "wamid.ID",
                        "text": {
                          "body": "MESSAGE_TEXT"
                        },
                        "context": {
                          "from": "PHONE_NUMBER",
                          "id": "wamid.ID",
                          "referred_product": {
                            "catalog_id": "CATALOG_ID",
                            "product_retailer_id": "PRODUCT_ID"
                          }
                        },
                        "timestamp": 1738499404,
                        "type": "text"
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |interactive_button_reply|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "WHATSAPP_BUSINESS_ACCOUNT_ID",
              "changes": [
                {
                  "value": {
                      "messaging_product": "whatsapp",
                      "metadata": {
                           "display_phone_number": "PHONE_NUMBER",
                           "phone_number_id": "PHONE_NUMBER_ID"
                      },
                      "contacts": [
                        {
                          "profile": {
                            "name": "NAME"
                          },
                          "wa_id": "PHONE_NUMBER_ID"
                        }
                      ],
                      "messages": [
                        {
                          "from": "PHONE_NUMBER_ID",
                          "id": "wamid.ID",
                          "timestamp": 17893000,
                          "interactive": {
                            "button_reply": {
                              "id": "unique-button-identifier-here",
                              "title": "button-text"
                            },
                            "type": "button_reply"
                          },
                          "type": "interactive"
                        }
                      ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |location_message|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "WHATSAPP_BUSINESS_ACCOUNT_ID",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "PHONE_NUMBER",
                      "phone_number_id": "PHONE_NUMBER_ID"
                    },
                    "contacts": [
                      {
                        "profile": {
                          "name": "NAME"
                        },
                        "wa_id": "WHATSAPP_ID"
                      }
                    ],
                    "messages": [
                      {
                        "from": "PHONE_NUMBER",
                        "id": "wamid.ID",
                        "timestamp": 1238838484,
                        "location": {
                          "latitude": -233,
                          "longitude": 40,
                          "name": "LOCATION_NAME",
                          "address": "LOCATION_ADDRESS"
                        },
                        "type": "location"
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |media_message_sticker|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "ID",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "PHONE_NUMBER",
                      "phone_number_id": "PHONE_NUMBER_ID"
                    },
                    "contacts": [
                      {
                        "profile": {
                          "name": "NAME"
                        },
                        "wa_id": "ID"
                      }
                    ],
                    "messages": [
                      {
                        "from": "SENDER_PHONE_NUMBER",
                        "id": "wamid.ID",
                        "timestamp": 179398488,
                        "type": "sticker",
                        "sticker": {
                          "mime_type": "image/webp",
                          "sha256": "HASH",
                          "id": "ID"
                        }
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |reaction_message|: {
            "object": "whatsapp_business_account",
            "entry": [
                {
                    "id": "WHATSAPP_BUSINESS_ACCOUNT_ID",
                    "changes": [
                        {
                            "value": {
                                "messaging_product": "whatsapp",
                                "metadata": {
                                    "display_phone_number": "PHONE_NUMBER",
                                    "phone_number_id": "PHONE_NUMBER_ID"
                                },
                                "contacts": [
                                    {
                                        "profile": {
                                            "name": "NAME"
                                        },
                                        "wa_id": "PHONE_NUMBER"
                                    }
                                ],
                                "messages": [
                                    {
                                        "from": "PHONE_NUMBER",
                                        "id": "wamid.ID",
                                        "timestamp": 17494004003,
                                        "reaction": {
                                            "message_id": "MESSAGE_ID",
                                            "emoji": "😀"
                                        },
                                        "type": "reaction"
                                    }
                                ]
                            },
                            "field": "messages"
                        }
                    ]
                }
            ]
        }
    }

    test_payload! {
        |message_update_failed|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "<WHATSAPP_BUSINESS_ACCOUNT_ID>",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "<BUSINESS_PHONE_NUMBER>",
                      "phone_number_id": "<BUSINESS_PHONE_NUMBER_ID>"
                    },
                    "statuses": [
                      {
                        "id": "<WHATSAPP_MESSAGE_ID>",
                        "status": "failed",
                        "timestamp": 12999990,
                        "recipient_id": "<WHATSAPP_USER_PHONE_NUMBER>",
                        "errors": [
                          {
                            "code": 131050,
                            "title": "Unable to deliver the message. This recipient has chosen to stop receiving marketing messages on WhatsApp from your business"
                          }
                        ]
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |message_update_sent|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "<WHATSAPP_BUSINESS_ACCOUNT_ID>",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "<BUSINESS_DISPLAY_PHONE_NUMBER>",
                      "phone_number_id": "<BUSINESS_PHONE_NUMBER_ID>"
                    },
                    "statuses": [
                      {
                        "id": "<WHATSAPP_MESSAGE_ID>",
                        "status": "sent",
                        "timestamp": 1289388883,
                        "recipient_id": "<WHATSAPP_USER_ID>",
                        "conversation": {
                          "id": "<CONVERSATION_ID>",
                          "origin": {
                            "type": "<CONVERSATION_CATEGORY>"
                          }
                        },
                        "pricing": {
                          "billable": true,
                          "pricing_model": "CBP",
                          "category": "<CONVERSATION_CATEGORY>"
                        }
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    test_payload! {
        |subscription_errors|: {
          "object": "whatsapp_business_account",
          "entry": [
            {
              "id": "WHATSAPP_BUSINESS_ACCOUNT_ID",
              "changes": [
                {
                  "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                      "display_phone_number": "PHONE_NUMBER",
                      "phone_number_id": "PHONE_NUMBER_ID"
                    },
                    "errors": [
                      {
                        "code": 130429,
                        "title": "Rate limit hit",
                        "message": "(#130429) Rate limit hit",
                        "error_data": {
                          "details": "Message failed to send because there were too many messages sent from this phone number in a short period of time"
                        }
                      }
                    ]
                  },
                  "field": "messages"
                }
              ]
            }
          ]
        }
    }

    #[test]
    fn decode_text_notification_structure() {
        let body = r#"{"object":"whatsapp_business_account","entry":[{"id":"144509515401993","changes":[{"value":{"messaging_product":"whatsapp","metadata":{"display_phone_number":"15550416043","phone_number_id":"121720824363144"},"contacts":[{"profile":{"name":"Ahmad Saekoni"},"wa_id":"6281272128270"}],"messages":[{"from":"6281272128270","id":"wamid.HBgNNjI4MTI3MjEyODI3MBUCABIYFjNFQjAzRjY1RTM0RkI3N0Q2QzE3MDEA","timestamp":"1706461964","text":{"body":"a"},"type":"text"}]},"field":"messages"}]}]}"#;

        let notification = Notification::from_slice(body.as_bytes()).unwrap();

        assert_eq!(notification.object, "whatsapp_business_account");
        assert_eq!(notification.entries.len(), 1);

        let entry = &notification.entries[0];
        assert_eq!(entry.id, "144509515401993");
        assert_eq!(entry.changes.len(), 1);

        let change = &entry.changes[0];
        assert_eq!(change.field, "messages");
        assert_eq!(
            change.value.contacts[0].profile.name,
            "Ahmad Saekoni"
        );

        let message = &change.value.messages[0];
        assert_eq!(message.message_type, MessageType::Text);
        assert_eq!(message.text_body(), Some("a"));
    }

    #[test]
    fn decode_is_idempotent() {
        let body = br#"{"object":"whatsapp_business_account","entry":[{"id":"130363306827170","changes":[{"value":{"messaging_product":"whatsapp","metadata":{"display_phone_number":"6281388288202","phone_number_id":"175174709002390"},"contacts":[{"profile":{"name":"Ahmad Saekoni"},"wa_id":"6281272128270"}],"messages":[{"from":"6281272128270","id":"wamid.HBgNNjI4MTI3MjEyODI3MBUCABIYFjNFQjA0RDhBMjNCN0E0QzkyQjg0NEQA","timestamp":"1706460409","type":"order","order":{"catalog_id":"363547682948433","text":"","product_items":[{"product_retailer_id":"1710","quantity":1,"item_price":11000,"currency":"IDR"}]}}]},"field":"messages"}]}]}"#;

        let first = Notification::from_slice(body).unwrap();
        let second = Notification::from_slice(body).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = br#"{
            "object": "whatsapp_business_account",
            "brand_new_top_level_field": {"nested": true},
            "entry": [{
                "id": "1",
                "novel_entry_field": 42,
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "surprise": ["x"],
                        "messages": []
                    }
                }]
            }]
        }"#;

        let notification = Notification::from_slice(body).unwrap();
        assert_eq!(notification.entries[0].id, "1");
    }

    #[test]
    fn empty_entry_batch_is_valid() {
        let notification =
            Notification::from_slice(br#"{"object":"whatsapp_business_account","entry":[]}"#)
                .unwrap();

        assert!(notification.entries.is_empty());
    }

    #[test]
    fn malformed_json_is_terminal() {
        let err = Notification::from_slice(b"this is not json").unwrap_err();
        assert!(err.body.contains("this is not json"));
    }

    #[test]
    fn incompatible_shape_is_terminal() {
        // `entry` must be an array.
        Notification::from_slice(br#"{"object":"x","entry":{"id":"1"}}"#).unwrap_err();
    }

    #[test]
    fn unrecognized_delivery_status_degrades() {
        let status: StatusChange = serde_json::from_str(
            r#"{"id": "wamid.X", "status": "held_for_quality_assessment", "timestamp": 1}"#,
        )
        .unwrap();

        assert_eq!(
            status.status,
            DeliveryStatus::Other("held_for_quality_assessment".into())
        );
    }

    #[test]
    fn notification_error_details_both_placements() {
        let legacy: NotificationError = serde_json::from_str(
            r#"{"code": 131051, "title": "Unsupported message type", "details": "legacy spot"}"#,
        )
        .unwrap();
        let current: NotificationError = serde_json::from_str(
            r#"{"code": 130429, "title": "Rate limit hit", "error_data": {"details": "new spot"}}"#,
        )
        .unwrap();

        assert_eq!(legacy.details(), Some("legacy spot"));
        assert_eq!(current.details(), Some("new spot"));
    }

    #[test]
    fn message_with_unrecognized_type_inside_notification() {
        let body = br#"{"object":"whatsapp_business_account","entry":[{"id":"1","changes":[{"field":"messages","value":{"messages":[{"from":"123","id":"wamid.A","timestamp":"5","type":"hologram"}]}}]}]}"#;

        let notification = Notification::from_slice(body).unwrap();
        let message = &notification.entries[0].changes[0].value.messages[0];

        assert_eq!(message.message_type, MessageType::Unrecognized);
        assert_eq!(message.content, MessageContent::Unknown);
    }
}
