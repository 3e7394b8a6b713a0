//! Update handling: text commands and inline-button callbacks.
//!
//! Handlers work on values already extracted from the update (chat id, message
//! id, text or payload), so tests can drive them without constructing full
//! Telegram update objects.

use cbot_core::{BotError, CallbackAction, Command, PlatformError, Result, Ticker};
use coinmarket_client::{CoinMarketClient, UsdQuote};
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId};
use tracing::{debug, info};

use crate::keyboards;

pub const WELCOME_TEXT: &str =
    "Hi!\nThis bot shows the current price of a chosen currency.";
pub const CURRENCY_MENU_TEXT: &str = "Choose a currency";
pub const UNKNOWN_COMMAND_TEXT: &str = "This bot only accepts commands from the menu.";

/// Handles one incoming message: best-effort delete of the trigger, then a
/// reply according to the parsed command. Text that is not a known command
/// (including non-text messages) gets the fixed rejection reply.
pub async fn handle_text_message(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: &str,
) -> Result<()> {
    delete_message_best_effort(bot, chat_id, message_id).await?;

    match Command::parse(text) {
        None => {
            bot.send_message(chat_id, UNKNOWN_COMMAND_TEXT)
                .await
                .map_err(to_platform_error)?;
            Ok(())
        }
        Some(Command::Start) => send_welcome(bot, chat_id).await,
        Some(Command::ShowCurrencies) => send_currency_menu(bot, chat_id).await,
    }
}

/// Handles one inline-button press. Unknown payloads are dropped without a
/// reply.
pub async fn handle_callback(
    bot: &Bot,
    client: &CoinMarketClient,
    chat_id: ChatId,
    message_id: MessageId,
    payload: &str,
) -> Result<()> {
    match CallbackAction::parse(payload) {
        None => {
            debug!(payload, "ignoring unknown callback payload");
            Ok(())
        }
        Some(CallbackAction::OpenCurrencyMenu | CallbackAction::ReturnToCurrencyMenu) => {
            delete_message_best_effort(bot, chat_id, message_id).await?;
            send_currency_menu(bot, chat_id).await
        }
        Some(CallbackAction::Quote(ticker)) => {
            delete_message_best_effort(bot, chat_id, message_id).await?;
            send_currency_price(bot, client, chat_id, ticker).await
        }
    }
}

/// Renders a quote reply: price to 3 decimals, market cap to the nearest
/// integer.
pub fn format_quote_reply(ticker: Ticker, quote: &UsdQuote) -> String {
    format!(
        "Currency: {}, price: {:.3}$\nMarket cap: {:.0}$",
        ticker.code(),
        quote.price,
        quote.market_cap
    )
}

async fn send_welcome(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(chat_id, WELCOME_TEXT)
        .reply_markup(keyboards::start_keyboard())
        .await
        .map_err(to_platform_error)?;
    Ok(())
}

async fn send_currency_menu(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(chat_id, CURRENCY_MENU_TEXT)
        .reply_markup(keyboards::currency_menu_keyboard())
        .await
        .map_err(to_platform_error)?;
    Ok(())
}

async fn send_currency_price(
    bot: &Bot,
    client: &CoinMarketClient,
    chat_id: ChatId,
    ticker: Ticker,
) -> Result<()> {
    let quote = client
        .latest_quote(ticker)
        .await
        .map_err(|e| BotError::Quote(e.to_string()))?;

    bot.send_message(chat_id, format_quote_reply(ticker, &quote))
        .reply_markup(keyboards::change_currency_keyboard())
        .await
        .map_err(to_platform_error)?;
    Ok(())
}

/// Deletes a message; the already-gone case is logged and ignored, anything
/// else propagates to the caller.
async fn delete_message_best_effort(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
) -> Result<()> {
    match bot.delete_message(chat_id, message_id).await {
        Ok(_) => Ok(()),
        Err(err) => match to_platform_error(err) {
            PlatformError::MessageNotFound => {
                info!(chat_id = chat_id.0, "message already deleted by user");
                Ok(())
            }
            other => Err(other.into()),
        },
    }
}

/// Maps a teloxide error into [`PlatformError`] at the transport seam.
fn to_platform_error(err: teloxide::RequestError) -> PlatformError {
    match err {
        teloxide::RequestError::Api(teloxide::ApiError::MessageToDeleteNotFound) => {
            PlatformError::MessageNotFound
        }
        other => PlatformError::Api(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quote_reply_rounds_price_to_three_decimals() {
        let quote = UsdQuote {
            price: 12345.6789,
            market_cap: 98765432.1,
        };

        assert_eq!(
            format_quote_reply(Ticker::Btc, &quote),
            "Currency: BTC, price: 12345.679$\nMarket cap: 98765432$"
        );
    }

    #[test]
    fn test_format_quote_reply_pads_short_prices() {
        let quote = UsdQuote {
            price: 7.5,
            market_cap: 1000.0,
        };

        assert_eq!(
            format_quote_reply(Ticker::Ton, &quote),
            "Currency: TON, price: 7.500$\nMarket cap: 1000$"
        );
    }

    #[test]
    fn test_format_quote_reply_small_price() {
        let quote = UsdQuote {
            price: 0.12345,
            market_cap: 99.6,
        };

        assert_eq!(
            format_quote_reply(Ticker::Dot, &quote),
            "Currency: DOT, price: 0.123$\nMarket cap: 100$"
        );
    }
}
