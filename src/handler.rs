use crate::poster::Poster;
use crate::BotRuntime;
use anyhow::Result;
use teloxide::payloads::SendMessageSetters;
use teloxide::{prelude::*, utils::command::BotCommands};

const USAGE: &str = "Привет! Я автопостер для канала.\n\
Команды:\n\
• /now — сразу публикую свежий пост в канал\n\
Планово публикую в 08:00 и 14:00 (МСК).";

#[derive(BotCommands, Debug)]
#[command(rename = "lowercase")]
enum Command {
    Start,
    Help,
    Now,
}

pub async fn message_handler(msg: Message, bot: AutoSend<Bot>, rt: BotRuntime) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // anything that is not one of our commands is left alone
    let Ok(command) = Command::parse(text, rt.username()) else {
        return Ok(());
    };

    tracing::info!("chat {} using command: {:?}", msg.chat.id, command);
    let reply = match command {
        Command::Start | Command::Help => USAGE.to_string(),
        Command::Now => now_reply(rt.poster()).await,
    };

    bot.send_message(msg.chat.id, reply)
        .reply_to_message_id(msg.id)
        .await?;

    Ok(())
}

/// Publish a post on demand and describe the outcome. A failed send is
/// reported back in the reply, never raised out of the command path.
async fn now_reply(poster: &Poster) -> String {
    match poster.send_post("now").await {
        Ok(()) => "✅ Отправил пост в канал.".to_string(),
        Err(e) => {
            tracing::error!("manual post failed: {:#}", e);
            format!("⚠️ Ошибка: {e:#}")
        }
    }
}
