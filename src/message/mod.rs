//! # Message module
//!
//! Module dedicated to the message entity and its wire
//! representation.
//!
//! A [`Message`] is read from the datastore and is immutable for the
//! duration of one action: the wire bytes built from it by
//! [`BuildMimeMessage`] are what actually travels to the remote
//! mailbox (draft save, sent-copy append).

mod error;
pub mod mime;

use std::fmt;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    mime::{BuildMimeMessage, MimeMessageBuilder},
};

/// The message identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email address with an optional display name.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// The display name part of the address.
    pub name: Option<String>,

    /// The address itself.
    pub email: String,
}

impl Address {
    pub fn new(name: Option<impl ToString>, email: impl ToString) -> Self {
        Self {
            name: name.map(|name| name.to_string()),
            email: email.to_string(),
        }
    }
}

/// An attachment carried by a message.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// The attachment file name.
    pub filename: String,

    /// The attachment MIME content type.
    pub content_type: String,

    /// The raw attachment content.
    pub bytes: Vec<u8>,
}

/// The message entity, as read from the datastore.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The message identifier.
    pub id: MessageId,

    /// The version counter of the message, bumped by the engine on
    /// every local edit. Draft actions enqueued against an older
    /// version are skipped.
    pub version: u64,

    /// Whether the message is a draft.
    pub is_draft: bool,

    /// The Message-Id header value, without angle brackets.
    pub message_id_header: String,

    /// The sender address.
    pub from: Option<Address>,

    /// The recipient addresses.
    pub to: Vec<Address>,

    /// The carbon copy addresses.
    pub cc: Vec<Address>,

    /// The blind carbon copy addresses.
    pub bcc: Vec<Address>,

    /// The Reply-To addresses.
    pub reply_to: Vec<Address>,

    /// The In-Reply-To header value, if the message is a reply.
    pub in_reply_to: Option<String>,

    /// The References header value, if any.
    pub references: Option<String>,

    /// The message subject.
    pub subject: String,

    /// The HTML body of the message.
    pub body: String,

    /// The attachments of the message.
    pub attachments: Vec<Attachment>,
}
