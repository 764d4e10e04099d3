use anyhow::Result;
use autopost_bot::handler::*;
use autopost_bot::{BotRuntime, ChannelTransport, Config, Poster, Scheduler};
use std::sync::Arc;
use teloxide::payloads::DeleteWebhookSetters;
use teloxide::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("Bot initializing...");
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let bot = Bot::new(config.token.clone()).auto_send();

    // a leftover webhook would conflict with long polling
    if let Err(e) = bot.delete_webhook().drop_pending_updates(true).await {
        warn!("fail to delete webhook: {}", e);
    }

    let username = bot.get_me().await?.username().to_string();
    info!("Bot {} start running", username);

    let transport = Arc::new(ChannelTransport::new(bot.clone(), config.channel));
    let poster = Poster::new(transport);
    let scheduler = Scheduler::start(poster.clone());

    // setup bot runtime
    let runtime = BotRuntime::new(poster, username);

    // setup handler
    let dproot = dptree::entry().branch(Update::filter_message().endpoint(message_handler));
    Dispatcher::builder(bot, dproot)
        .dependencies(dptree::deps![runtime])
        .build()
        .setup_ctrlc_handler()
        .dispatch()
        .await;

    scheduler.stop();
    info!("Bot stopped");

    Ok(())
}
