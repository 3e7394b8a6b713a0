//! # cbot-core
//!
//! Core types for the currency bot: supported tickers, menu commands, callback
//! actions, the error taxonomy, and tracing initialization. Transport-agnostic;
//! used by coinmarket-client and currency-bot.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, PlatformError, Result};
pub use logger::init_tracing;
pub use types::{CallbackAction, Command, Ticker};
