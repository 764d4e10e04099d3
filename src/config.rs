use anyhow::{bail, Context, Result};
use std::env::var;
use teloxide::types::{ChatId, Recipient};

/// Startup configuration. Both values are required; the process must not
/// come up without them.
#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub channel: Recipient,
}

impl Config {
    // Expect: `export TELOXIDE_TOKEN="123:abc"` and
    // `export AUTOPOST_BOT_CHANNEL="@mychannel"` (or a numeric chat id)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            var("TELOXIDE_TOKEN").ok(),
            var("AUTOPOST_BOT_CHANNEL").ok(),
        )
    }

    fn from_vars(token: Option<String>, channel: Option<String>) -> Result<Self> {
        let Some(token) = token else {
            bail!("TELOXIDE_TOKEN is not set");
        };
        let Some(channel) = channel else {
            bail!("AUTOPOST_BOT_CHANNEL is not set");
        };

        Ok(Self {
            token,
            channel: parse_channel(&channel)?,
        })
    }
}

fn parse_channel(raw: &str) -> Result<Recipient> {
    if raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    let id = raw
        .parse::<i64>()
        .with_context(|| format!("{raw} is not a channel username or chat id"))?;
    Ok(Recipient::Id(ChatId(id)))
}
