//! Bot startup and the update dispatch loop.
//!
//! One branch per update kind (message, callback query); each branch logs
//! handler errors and returns normally so the loop stays alive. Ctrl-c stops
//! the dispatcher.

use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::types::BotCommand;
use teloxide::{dptree, prelude::*};
use tracing::{debug, error, info, warn};

use cbot_core::Command;
use coinmarket_client::CoinMarketClient;

use crate::config::BotConfig;
use crate::dispatch;

/// Builds the teloxide Bot from config, honoring the optional API URL override.
pub fn build_bot(config: &BotConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => {
            let url: reqwest::Url = url.parse().context("invalid TELEGRAM_API_URL")?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Registers the two-entry command menu with Telegram.
pub async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = Command::ALL
        .iter()
        .map(|c| BotCommand::new(c.menu_name(), c.description()))
        .collect();
    bot.set_my_commands(commands).await?;
    Ok(())
}

/// Runs the bot until interrupted: init tracing, spawn the command-menu
/// registration, then dispatch updates.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    cbot_core::init_tracing(&config.log_file)?;

    let bot = build_bot(&config)?;
    let client = Arc::new(match &config.coinmarket_api_url {
        Some(url) => {
            CoinMarketClient::with_base_url(config.coinmarket_api_key.clone(), url.clone())
        }
        None => CoinMarketClient::new(config.coinmarket_api_key.clone()),
    });

    // Fire-and-forget: the update loop starts regardless of the menu outcome.
    {
        let bot = bot.clone();
        tokio::spawn(async move {
            if let Err(err) = register_bot_commands(&bot).await {
                warn!(error = %err, "failed to register bot command menu");
            }
        });
    }

    info!("currency bot started");

    let message_branch = Update::filter_message().endpoint(
        |bot: Bot, msg: Message| async move {
            // Non-text messages fall through to the rejection reply, same as
            // unrecognized text.
            let text = msg.text().unwrap_or_default();
            if let Err(err) =
                dispatch::handle_text_message(&bot, msg.chat.id, msg.id, text).await
            {
                error!(error = %err, chat_id = msg.chat.id.0, "message handler error");
            }
            respond(())
        },
    );

    let callback_branch = Update::filter_callback_query().endpoint({
        let client = client.clone();
        move |bot: Bot, q: CallbackQuery| {
            let client = client.clone();
            async move {
                let Some(payload) = q.data.as_deref() else {
                    return respond(());
                };
                let Some(message) = q.regular_message() else {
                    return respond(());
                };
                if let Err(err) =
                    dispatch::handle_callback(&bot, &client, message.chat.id, message.id, payload)
                        .await
                {
                    error!(error = %err, chat_id = message.chat.id.0, "callback handler error");
                }
                respond(())
            }
        }
    });

    Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(message_branch)
            .branch(callback_branch),
    )
    .default_handler(|update| async move {
        debug!(update_id = ?update.id, "ignoring unhandled update kind");
    })
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}
