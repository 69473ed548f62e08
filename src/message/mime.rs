//! # MIME module
//!
//! Module dedicated to the wire representation of messages.

use async_trait::async_trait;
use mail_builder::{
    headers::{address, raw::Raw},
    MessageBuilder,
};

use super::{Address, Error, Message};
use crate::{account::Account, AnyResult};

/// Builds the canonical wire representation of a message.
///
/// Injected as a collaborator so engines with their own MIME pipeline
/// (inline images, signing, ...) can plug it in. The stock
/// [`MimeMessageBuilder`] fits the common case.
#[async_trait]
pub trait BuildMimeMessage: Send + Sync {
    /// Build the full MIME bytes for the given message of the given
    /// account.
    async fn build(&self, account: &Account, message: &Message) -> AnyResult<Vec<u8>>;
}

/// The stock MIME builder, based on [`mail_builder`].
///
/// Assembles addressing headers, the Message-Id/In-Reply-To/References
/// chain, the HTML body and regular attachments.
#[derive(Clone, Debug, Default)]
pub struct MimeMessageBuilder;

impl MimeMessageBuilder {
    pub fn new() -> Self {
        Self
    }
}

fn builder_address(addr: &Address) -> address::Address<'static> {
    address::Address::new_address(addr.name.clone(), addr.email.clone())
}

fn builder_addresses(addrs: &[Address]) -> Vec<address::Address<'static>> {
    addrs.iter().map(builder_address).collect()
}

#[async_trait]
impl BuildMimeMessage for MimeMessageBuilder {
    async fn build(&self, _account: &Account, message: &Message) -> AnyResult<Vec<u8>> {
        let from = message
            .from
            .as_ref()
            .ok_or(Error::BuildMimeMessageMissingFromError(message.id))?;

        let mut builder = MessageBuilder::new()
            .from(builder_address(from))
            .to(builder_addresses(&message.to))
            .subject(message.subject.clone())
            .message_id(message.message_id_header.clone())
            .html_body(message.body.clone());

        if !message.cc.is_empty() {
            builder = builder.cc(builder_addresses(&message.cc));
        }

        if !message.bcc.is_empty() {
            builder = builder.bcc(builder_addresses(&message.bcc));
        }

        if !message.reply_to.is_empty() {
            builder = builder.reply_to(builder_addresses(&message.reply_to));
        }

        if let Some(in_reply_to) = &message.in_reply_to {
            builder = builder.in_reply_to(vec![in_reply_to.clone()]);
        }

        if let Some(references) = &message.references {
            builder = builder.header("References", Raw::new(references.clone()));
        }

        for attachment in &message.attachments {
            builder = builder.attachment(
                attachment.content_type.clone(),
                attachment.filename.clone(),
                attachment.bytes.clone(),
            );
        }

        let bytes = builder
            .write_to_vec()
            .map_err(Error::WriteMimeMessageError)?;

        Ok(bytes)
    }
}
