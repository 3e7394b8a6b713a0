//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error for update handling; [`PlatformError`]
//! splits Telegram failures so the benign "message already gone" case can be
//! matched in one branch.

use thiserror::Error;

/// Telegram platform errors. The transport crate maps its API errors into
/// this type at the seam.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The message to act on no longer exists (the user deleted it first).
    #[error("message not found")]
    MessageNotFound,

    #[error("telegram API error: {0}")]
    Api(String),
}

/// Top-level error for handling one update (platform transport or quote fetch).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("quote API error: {0}")]
    Quote(String),
}

/// Result type for update handling; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
