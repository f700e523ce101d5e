//! Inbound message model.
//!
//! Everything a customer can send to a business arrives through the webhook
//! as a `messages` array entry with a `type` discriminator and one
//! kind-specific sub-object. This module provides the typed representation:
//! [`Message`], the closed [`MessageType`] classification, and the
//! kind-specific payload structs ([`Text`], [`Media`], [`Location`],
//! [`Order`], ...).
//!
//! Decoding is deliberately forgiving: a message whose `type` is missing or
//! not recognized still decodes, with [`MessageType::Unrecognized`] and
//! [`MessageContent::Unknown`], so new upstream message kinds degrade
//! gracefully instead of failing the whole request.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::notification::NotificationError;
use crate::Timestamp;

/// The kind of an inbound message, classified from its `type` discriminator.
///
/// This is a closed enumeration: every discriminator string maps to exactly
/// one variant, and anything outside the recognized set (including the empty
/// string) maps to [`MessageType::Unrecognized`]. Classification never fails.
///
/// Two variants deserve a note:
/// - [`MessageType::Unknown`] is the literal upstream `"unknown"`
///   discriminator — Meta's own marker for a message kind its API could not
///   deliver (such messages usually carry an `errors` array).
/// - [`MessageType::ProductEnquiry`] never comes off the wire. Product
///   enquiries arrive as `"text"` messages with a referred product in their
///   context; the dispatcher routes them under this kind so callers can hook
///   them separately from plain text.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[non_exhaustive]
pub enum MessageType {
    /// Plain text message
    Text,
    /// Image media message
    Image,
    /// Audio media message (including voice notes)
    Audio,
    /// Video media message
    Video,
    /// Document media message
    Document,
    /// Sticker media message
    Sticker,
    /// Shared geographic location
    Location,
    /// Shared contact cards
    Contacts,
    /// Shopping-cart order placed from a catalog
    Order,
    /// Quick-reply button press on a template message
    Button,
    /// Reply to an interactive message (button or list)
    Interactive,
    /// Emoji reaction to a previous message
    Reaction,
    /// Message originating from an ad or post click
    Referral,
    /// System event, e.g. a customer changed their number
    System,
    /// Meta's `"unknown"` marker for an unsupported message kind
    Unknown,
    /// A text message enquiring about a specific catalog product.
    ///
    /// Routing-only: never produced by [`MessageType::parse`].
    ProductEnquiry,
    /// Discriminator outside the recognized set (or absent)
    Unrecognized,
}

impl MessageType {
    /// Classifies a `type` discriminator string.
    ///
    /// Total, pure, and case-sensitive: identical input always yields
    /// identical output, and anything outside the recognized set yields
    /// [`MessageType::Unrecognized`] rather than an error.
    ///
    /// # Example
    /// ```rust
    /// use whatsapp_webhooks_rs::message::MessageType;
    ///
    /// assert_eq!(MessageType::parse("text"), MessageType::Text);
    /// assert_eq!(MessageType::parse("imageX"), MessageType::Unrecognized);
    /// ```
    pub fn parse(discriminator: &str) -> Self {
        match discriminator {
            "text" => Self::Text,
            "image" => Self::Image,
            "audio" => Self::Audio,
            "video" => Self::Video,
            "document" => Self::Document,
            "sticker" => Self::Sticker,
            "location" => Self::Location,
            "contacts" => Self::Contacts,
            "order" => Self::Order,
            "button" => Self::Button,
            "interactive" => Self::Interactive,
            "reaction" => Self::Reaction,
            "referral" => Self::Referral,
            "system" => Self::System,
            "unknown" => Self::Unknown,
            _ => Self::Unrecognized,
        }
    }

    /// The canonical discriminator string for this kind.
    ///
    /// [`MessageType::Unrecognized`] has no discriminator and renders empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Document => "document",
            Self::Sticker => "sticker",
            Self::Location => "location",
            Self::Contacts => "contacts",
            Self::Order => "order",
            Self::Button => "button",
            Self::Interactive => "interactive",
            Self::Reaction => "reaction",
            Self::Referral => "referral",
            Self::System => "system",
            Self::Unknown => "unknown",
            Self::ProductEnquiry => "product_enquiry",
            Self::Unrecognized => "",
        }
    }

    /// Whether this kind carries a [`Media`] payload.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Self::Image | Self::Audio | Self::Video | Self::Document | Self::Sticker
        )
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MessageType {
    #[inline]
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// A single inbound message from a customer.
///
/// Decoded from one element of a change value's `messages` array. The
/// kind-specific payload selected by the `type` discriminator lives in
/// [`Message::content`]; everything the kinds share (sender, platform message
/// id, timestamp) is lifted to the top level.
///
/// The platform message `id` is what callers should use for idempotent
/// processing — the upstream redelivers notifications it believes were not
/// acknowledged, and it deduplicates nothing on your behalf.
#[derive(PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct Message {
    /// The customer's phone number (WhatsApp ID) that sent the message.
    pub from: String,

    /// The platform message ID (`wamid.*`).
    pub id: String,

    /// When the message was sent (unix seconds).
    pub timestamp: Option<Timestamp>,

    /// The classified kind of this message.
    pub message_type: MessageType,

    /// The kind-specific payload.
    pub content: MessageContent,

    /// Reply/forward metadata, if the message relates to another message or
    /// a catalog product.
    pub context: Option<MessageContext>,

    /// Ad/post referral data. Arrives alongside a `text` payload when the
    /// customer messaged you by clicking an ad.
    pub referral: Option<Referral>,

    /// Errors Meta attached to the message (typically on `unknown` messages).
    pub errors: Vec<NotificationError>,
}

impl Message {
    /// Returns the body of a text message, if this is one.
    pub fn text_body(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(&text.body),
            _ => None,
        }
    }

    /// Returns the media payload, if this is a media message.
    pub fn media(&self) -> Option<&Media> {
        match &self.content {
            MessageContent::Media(media) => Some(media),
            _ => None,
        }
    }

    /// The catalog product this message enquires about, if any.
    pub fn referred_product(&self) -> Option<&ReferredProduct> {
        self.context.as_ref()?.referred_product.as_ref()
    }
}

/// The kind-specific payload of a [`Message`].
///
/// All five media kinds (image, audio, video, document, sticker) share the
/// [`Media`] shape; the concrete kind is carried by [`Message::message_type`].
#[derive(PartialEq, Clone, Debug)]
#[non_exhaustive]
pub enum MessageContent {
    /// Plain text body
    Text(Text),
    /// Image, audio, video, document, or sticker payload
    Media(Media),
    /// Shared location
    Location(Location),
    /// Shared contact cards
    Contacts(Vec<ContactCard>),
    /// Catalog order
    Order(Order),
    /// Template quick-reply button press
    Button(ButtonReply),
    /// Interactive button/list reply
    Interactive(InteractiveReply),
    /// Emoji reaction
    Reaction(Reaction),
    /// System event
    System(SystemUpdate),
    /// No decodable payload: the `type` was missing, unrecognized, or its
    /// sub-object was absent.
    Unknown,
}

/// Text content of an inbound message.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Text {
    /// Message text content
    pub body: String,
}

impl std::ops::Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

/// Media message content.
///
/// Used for images, audio, video, documents, and stickers. The media bytes
/// themselves are not in the webhook; `id` references them on the platform
/// for download through the Graph API.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct Media {
    /// Platform media ID, used to retrieve the content
    #[serde(default)]
    pub id: Option<String>,
    /// Type and format of the media
    #[serde(rename = "mime_type", default)]
    pub media_type: Option<String>,
    /// Checksum of the media content
    #[serde(default)]
    pub sha256: Option<String>,
    /// Optional description text
    #[serde(default)]
    pub caption: Option<String>,
    /// Original filename, for documents
    #[serde(default)]
    pub filename: Option<String>,
    /// Whether an audio message is a voice note
    #[serde(default)]
    pub voice: Option<bool>,
    /// Whether a sticker is animated
    #[serde(default)]
    pub animated: Option<bool>,
}

/// A shared geographic location.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct Location {
    /// Latitude coordinate
    #[serde(deserialize_with = "deserialize_str")]
    pub latitude: f64,
    /// Longitude coordinate
    #[serde(deserialize_with = "deserialize_str")]
    pub longitude: f64,
    /// Optional location name
    #[serde(default)]
    pub name: Option<String>,
    /// Optional street address
    #[serde(default)]
    pub address: Option<String>,
}

/// One shared contact card from a `contacts` message.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ContactCard {
    #[serde(default)]
    pub name: Option<ContactName>,
    #[serde(default)]
    pub phones: Vec<ContactPhone>,
    #[serde(default)]
    pub emails: Vec<ContactEmail>,
    #[serde(default)]
    pub org: Option<ContactOrg>,
    #[serde(default)]
    pub birthday: Option<String>,
}

/// Name block of a shared contact card.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ContactName {
    #[serde(default)]
    pub formatted_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Phone entry of a shared contact card.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ContactPhone {
    #[serde(default)]
    pub phone: String,
    /// WhatsApp ID for the phone, when the contact is reachable on WhatsApp
    #[serde(default)]
    pub wa_id: Option<String>,
    /// Label such as `CELL` or `WORK`
    #[serde(rename = "type", default)]
    pub phone_type: Option<String>,
}

/// Email entry of a shared contact card.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ContactEmail {
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub email_type: Option<String>,
}

/// Organization block of a shared contact card.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ContactOrg {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A product order placed through WhatsApp.
#[doc(alias = "Cart")]
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct Order {
    /// Catalog from which the ordered products originate
    #[serde(rename = "catalog_id")]
    pub catalog: String,
    /// An optional note the customer sent along with the order
    #[serde(rename = "text", default)]
    pub note: String,
    /// Ordered products
    #[serde(rename = "product_items", default)]
    pub products: Vec<OrderProduct>,
}

/// A single product item within an [`Order`].
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct OrderProduct {
    /// The product's SKU identifier in the catalog
    pub product_retailer_id: String,
    /// The quantity of this product in the order
    #[serde(deserialize_with = "deserialize_str")]
    pub quantity: u64,
    /// The price per unit of the product
    #[serde(rename = "item_price", deserialize_with = "deserialize_str")]
    pub unit_price: f64,
    /// Currency code (e.g., "USD")
    pub currency: String,
}

/// A quick-reply button press on a template message.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct ButtonReply {
    /// The button label the customer saw
    #[serde(default)]
    pub text: String,
    /// The developer-defined payload attached to the button
    #[serde(default)]
    pub payload: String,
}

/// A reply to an interactive message.
///
/// Exactly one of `button_reply` or `list_reply` is present in a well-formed
/// payload; [`InteractiveReply::selection`] returns whichever it is.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct InteractiveReply {
    #[serde(default)]
    pub button_reply: Option<ReplySelection>,
    #[serde(default)]
    pub list_reply: Option<ReplySelection>,
}

impl InteractiveReply {
    /// The selected button or list row, whichever this reply carries.
    pub fn selection(&self) -> Option<&ReplySelection> {
        self.button_reply.as_ref().or(self.list_reply.as_ref())
    }

    /// Whether this is a list-row selection (as opposed to a button press).
    pub fn is_list_reply(&self) -> bool {
        self.list_reply.is_some()
    }
}

/// The item a customer selected in an interactive reply.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct ReplySelection {
    /// Developer-assigned identifier of the button or row
    pub id: String,
    /// The visible title of the button or row
    #[serde(default)]
    pub title: String,
    /// Row description, for list replies
    #[serde(default)]
    pub description: Option<String>,
}

/// An emoji reaction to a previously sent or received message.
///
/// An absent `emoji` means the customer removed their earlier reaction.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct Reaction {
    /// The message being reacted to
    pub message_id: String,
    /// The reaction emoji; `None` when a reaction was withdrawn.
    // A String rather than a char: skin-tone and ZWJ emoji span
    // several codepoints.
    #[serde(default)]
    pub emoji: Option<String>,
}

/// A system event, such as a customer changing their phone number.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct SystemUpdate {
    /// Human-readable description of the event
    #[serde(default)]
    pub body: Option<String>,
    /// Event kind tag, e.g. `customer_changed_number`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// The customer's new WhatsApp ID after an identity change
    #[serde(default, alias = "new_wa_id")]
    pub wa_id: Option<String>,
    /// Identity hash for the changed account
    #[serde(default)]
    pub identity: Option<String>,
    /// The affected customer, where provided
    #[serde(default)]
    pub customer: Option<String>,
}

/// Referral data for a message that originated from an ad or post click.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Referral {
    #[serde(default)]
    pub source_url: Option<String>,
    /// `ad` or `post`
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub ctwa_clid: Option<String>,
}

/// Message context information.
///
/// Relates a message to other messages (replies, forwards) or to a catalog
/// product the customer is asking about.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
#[non_exhaustive]
pub struct MessageContext {
    /// Sender of the message being replied to
    #[serde(default)]
    pub from: Option<String>,
    /// ID of the message being replied to
    #[serde(default)]
    pub id: Option<String>,
    /// The product this message enquires about
    #[serde(default)]
    pub referred_product: Option<ReferredProduct>,
    /// Whether the message was forwarded
    #[serde(default)]
    pub forwarded: Option<bool>,
    /// Whether the message was forwarded more than five times
    #[serde(default)]
    pub frequently_forwarded: Option<bool>,
}

/// The catalog product referenced by a product enquiry.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[non_exhaustive]
pub struct ReferredProduct {
    pub catalog_id: String,
    pub product_retailer_id: String,
}

/// Wire representation of a message.
///
/// Every kind-specific sub-object is optional here; `Message::from_repr`
/// lifts the one selected by the `type` discriminator into
/// [`MessageContent`] and drops the rest.
#[derive(Deserialize)]
struct MessageRepr {
    #[serde(default)]
    from: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    timestamp: Option<Timestamp>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    context: Option<MessageContext>,
    #[serde(default)]
    referral: Option<Referral>,
    #[serde(default)]
    errors: Vec<NotificationError>,

    #[serde(default)]
    text: Option<Text>,
    #[serde(default)]
    image: Option<Media>,
    #[serde(default)]
    audio: Option<Media>,
    #[serde(default)]
    video: Option<Media>,
    #[serde(default)]
    document: Option<Media>,
    #[serde(default)]
    sticker: Option<Media>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    contacts: Option<Vec<ContactCard>>,
    #[serde(default)]
    order: Option<Order>,
    #[serde(default)]
    button: Option<ButtonReply>,
    #[serde(default)]
    interactive: Option<InteractiveReply>,
    #[serde(default)]
    reaction: Option<Reaction>,
    #[serde(default)]
    system: Option<SystemUpdate>,
}

impl Message {
    fn from_repr(mut repr: MessageRepr) -> Self {
        let message_type = MessageType::parse(repr.kind.as_deref().unwrap_or_default());

        let content = match message_type {
            MessageType::Text | MessageType::Referral => {
                repr.text.take().map(MessageContent::Text)
            }
            MessageType::Image => repr.image.take().map(MessageContent::Media),
            MessageType::Audio => repr.audio.take().map(MessageContent::Media),
            MessageType::Video => repr.video.take().map(MessageContent::Media),
            MessageType::Document => repr.document.take().map(MessageContent::Media),
            MessageType::Sticker => repr.sticker.take().map(MessageContent::Media),
            MessageType::Location => repr.location.take().map(MessageContent::Location),
            MessageType::Contacts => repr.contacts.take().map(MessageContent::Contacts),
            MessageType::Order => repr.order.take().map(MessageContent::Order),
            MessageType::Button => repr.button.take().map(MessageContent::Button),
            MessageType::Interactive => repr.interactive.take().map(MessageContent::Interactive),
            MessageType::Reaction => repr.reaction.take().map(MessageContent::Reaction),
            MessageType::System => repr.system.take().map(MessageContent::System),
            MessageType::Unknown | MessageType::ProductEnquiry | MessageType::Unrecognized => None,
        };

        Self {
            from: repr.from,
            id: repr.id,
            timestamp: repr.timestamp,
            message_type,
            content: content.unwrap_or(MessageContent::Unknown),
            context: repr.context,
            referral: repr.referral,
            errors: repr.errors,
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        MessageRepr::deserialize(deserializer).map(Message::from_repr)
    }
}

/// Accepts a value either in its native JSON shape or stringified.
///
/// Meta is inconsistent about this: order quantities, prices, and location
/// coordinates appear both ways across API versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum StrOr<'a, T> {
    Raw(Cow<'a, str>),
    Value(T),
}

pub(crate) fn deserialize_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    match <StrOr<'_, T>>::deserialize(deserializer)? {
        StrOr::Raw(s) => T::from_str(&s)
            .map_err(|err| <D::Error as serde::de::Error>::custom(format!("parsing value: {err}"))),
        StrOr::Value(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_type() {
        let cases = [
            ("text", MessageType::Text),
            ("image", MessageType::Image),
            ("audio", MessageType::Audio),
            ("video", MessageType::Video),
            ("document", MessageType::Document),
            ("sticker", MessageType::Sticker),
            ("location", MessageType::Location),
            ("contacts", MessageType::Contacts),
            ("order", MessageType::Order),
            ("button", MessageType::Button),
            ("interactive", MessageType::Interactive),
            ("reaction", MessageType::Reaction),
            ("referral", MessageType::Referral),
            ("system", MessageType::System),
            ("unknown", MessageType::Unknown),
            ("imageX", MessageType::Unrecognized),
            ("Text", MessageType::Unrecognized),
            ("", MessageType::Unrecognized),
            ("product_enquiry", MessageType::Unrecognized),
        ];

        for (input, want) in cases {
            assert_eq!(MessageType::parse(input), want, "input: {input:?}");
            // Deterministic regardless of call order.
            assert_eq!(MessageType::parse(input), want, "input: {input:?}");
        }
    }

    #[test]
    fn decode_text_message() {
        let message: Message = serde_json::from_str(
            r#"{
                "from": "6281272128270",
                "id": "wamid.ID",
                "timestamp": "1706461964",
                "text": {"body": "a"},
                "type": "text"
            }"#,
        )
        .unwrap();

        assert_eq!(message.message_type, MessageType::Text);
        assert_eq!(message.text_body(), Some("a"));
        assert_eq!(message.timestamp.unwrap().seconds(), 1706461964);
    }

    #[test]
    fn decode_message_without_type() {
        let message: Message =
            serde_json::from_str(r#"{"from": "123", "id": "wamid.ID", "timestamp": 1}"#).unwrap();

        assert_eq!(message.message_type, MessageType::Unrecognized);
        assert_eq!(message.content, MessageContent::Unknown);
    }

    #[test]
    fn decode_message_with_unrecognized_type() {
        // An upstream addition we don't know about yet must not fail decode.
        let message: Message = serde_json::from_str(
            r#"{
                "from": "123",
                "id": "wamid.ID",
                "timestamp": 1731617831,
                "type": "video_note",
                "video_note": {"id": "99", "mime_type": "video/mp4"}
            }"#,
        )
        .unwrap();

        assert_eq!(message.message_type, MessageType::Unrecognized);
        assert_eq!(message.content, MessageContent::Unknown);
    }

    #[test]
    fn decode_unknown_message_with_errors() {
        let message: Message = serde_json::from_str(
            r#"{
                "from": "123",
                "id": "wamid.ID",
                "timestamp": "1731617831",
                "errors": [{
                    "code": 131051,
                    "details": "Message type is not currently supported",
                    "title": "Unsupported message type"
                }],
                "type": "unknown"
            }"#,
        )
        .unwrap();

        assert_eq!(message.message_type, MessageType::Unknown);
        assert_eq!(message.content, MessageContent::Unknown);
        assert_eq!(message.errors.len(), 1);
        assert_eq!(message.errors[0].code, 131051);
    }

    #[test]
    fn decode_reaction_with_multi_codepoint_emoji() {
        let message: Message = serde_json::from_str(
            r#"{
                "from": "123",
                "id": "wamid.ID",
                "timestamp": 17494004003,
                "reaction": {"message_id": "MESSAGE_ID", "emoji": "👍🏾"},
                "type": "reaction"
            }"#,
        )
        .unwrap();

        match &message.content {
            MessageContent::Reaction(reaction) => {
                assert_eq!(reaction.message_id, "MESSAGE_ID");
                assert_eq!(reaction.emoji.as_deref(), Some("👍🏾"));
            }
            other => panic!("expected reaction content, got {other:?}"),
        }
    }

    #[test]
    fn decode_order_with_stringified_numbers() {
        let order: Order = serde_json::from_str(
            r#"{
                "catalog_id": "363547682948433",
                "text": "",
                "product_items": [{
                    "product_retailer_id": "1710",
                    "quantity": "1",
                    "item_price": "11000",
                    "currency": "IDR"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(order.products[0].quantity, 1);
        assert_eq!(order.products[0].unit_price, 11000.0);
    }

    #[test]
    fn decode_interactive_list_reply() {
        let message: Message = serde_json::from_str(
            r#"{
                "from": "123",
                "id": "wamid.ID",
                "timestamp": 178999000,
                "interactive": {
                    "list_reply": {
                        "id": "list_reply_id",
                        "title": "list_reply_title",
                        "description": "list_reply_description"
                    },
                    "type": "list_reply"
                },
                "type": "interactive"
            }"#,
        )
        .unwrap();

        match &message.content {
            MessageContent::Interactive(reply) => {
                assert!(reply.is_list_reply());
                assert_eq!(reply.selection().unwrap().id, "list_reply_id");
            }
            other => panic!("expected interactive content, got {other:?}"),
        }
    }
}
