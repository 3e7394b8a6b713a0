//! # Currency bot application
//!
//! Telegram bot that serves near-real-time cryptocurrency quotes through an
//! inline-button menu. Wires cbot-core types and the coinmarket-client into a
//! teloxide dispatcher. Loads config from env and runs the update loop.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod keyboards;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_bot, register_bot_commands, run_bot};
