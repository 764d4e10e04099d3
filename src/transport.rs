use anyhow::Result;
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};

/// Outbound side of the bot: deliver one text to the configured destination.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<()>;
}

/// Production transport: a Telegram channel addressed by username or chat id.
pub struct ChannelTransport {
    bot: AutoSend<Bot>,
    channel: Recipient,
}

impl ChannelTransport {
    pub fn new(bot: AutoSend<Bot>, channel: Recipient) -> Self {
        Self { bot, channel }
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.channel.clone(), text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}
