//! Bot configuration, loaded from environment variables.
//!
//! Secrets (bot token, quote API key) are required; everything else has a
//! default or is optional. `.env` is loaded by the binary before this runs.

use anyhow::Result;
use std::env;

/// Runtime configuration for the bot process.
pub struct BotConfig {
    pub bot_token: String,
    pub coinmarket_api_key: String,
    /// Optional quote API base URL override (tests point this at a mock server).
    pub coinmarket_api_url: Option<String>,
    /// Optional Telegram Bot API base URL override.
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. If `token` is given it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let coinmarket_api_key = env::var("COINMARKET_API_KEY")
            .map_err(|_| anyhow::anyhow!("COINMARKET_API_KEY not set"))?;
        let coinmarket_api_url = env::var("COINMARKET_API_URL").ok();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/currency-bot.log".to_string());

        Ok(Self {
            bot_token,
            coinmarket_api_key,
            coinmarket_api_url,
            telegram_api_url,
            log_file,
        })
    }
}
