//! Core domain types: supported tickers, menu commands, and callback actions.
//!
//! All three are closed enums so the dispatcher can match exhaustively instead
//! of comparing strings across branches.

use std::fmt;

/// Callback payload that opens the currency menu from the welcome message.
pub const OPEN_CURRENCY_MENU: &str = "open_currency_menu";
/// Callback payload that re-opens the currency menu from a quote reply.
pub const RETURN_TO_CURRENCY_MENU: &str = "return_to_currency_menu";

/// A supported cryptocurrency. The set is closed: anything outside it is never
/// looked up against the quote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ticker {
    Btc,
    Eth,
    Ton,
    Bnb,
    Dot,
    Sol,
}

impl Ticker {
    /// All supported tickers, in menu order (first row, then second row).
    pub const ALL: [Ticker; 6] = [
        Ticker::Btc,
        Ticker::Eth,
        Ticker::Ton,
        Ticker::Bnb,
        Ticker::Dot,
        Ticker::Sol,
    ];

    /// Ticker code as used on the wire and in callback payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Ticker::Btc => "BTC",
            Ticker::Eth => "ETH",
            Ticker::Ton => "TON",
            Ticker::Bnb => "BNB",
            Ticker::Dot => "DOT",
            Ticker::Sol => "SOL",
        }
    }

    /// Human-readable name shown on the menu button.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ticker::Btc => "Bitcoin",
            Ticker::Eth => "Ethereum",
            Ticker::Ton => "Toncoin",
            Ticker::Bnb => "BNB",
            Ticker::Dot => "Polkadot",
            Ticker::Sol => "Solana",
        }
    }

    /// Parses a ticker code (exact match, as produced by [`Ticker::code`]).
    pub fn from_code(code: &str) -> Option<Ticker> {
        Ticker::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text commands the bot accepts, also registered in the Telegram command menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ShowCurrencies,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Start, Command::ShowCurrencies];

    /// Full command text as typed in the chat.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::ShowCurrencies => "/show_currencies",
        }
    }

    /// Command name for menu registration (Telegram wants it without the slash).
    pub fn menu_name(&self) -> &'static str {
        &self.as_str()[1..]
    }

    /// Description shown next to the command in the Telegram menu.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Start => "Start the bot.",
            Command::ShowCurrencies => {
                "Pick one of the supported currencies to get its current price."
            }
        }
    }

    /// Parses a message text into a command. Letter case is ignored; any text
    /// that is not exactly a known command yields `None`.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        Command::ALL
            .into_iter()
            .find(|c| text.eq_ignore_ascii_case(c.as_str()))
    }
}

/// Inline-button payloads the bot reacts to. Unknown payloads parse to `None`
/// and the update is dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// "Choose a currency." button on the welcome message.
    OpenCurrencyMenu,
    /// "Choose another currency." button on a quote reply.
    ReturnToCurrencyMenu,
    /// A currency button on the menu.
    Quote(Ticker),
}

impl CallbackAction {
    /// Parses a raw callback payload.
    pub fn parse(payload: &str) -> Option<CallbackAction> {
        match payload {
            OPEN_CURRENCY_MENU => Some(CallbackAction::OpenCurrencyMenu),
            RETURN_TO_CURRENCY_MENU => Some(CallbackAction::ReturnToCurrencyMenu),
            other => Ticker::from_code(other).map(CallbackAction::Quote),
        }
    }

    /// Payload string carried by the inline button.
    pub fn payload(&self) -> &'static str {
        match self {
            CallbackAction::OpenCurrencyMenu => OPEN_CURRENCY_MENU,
            CallbackAction::ReturnToCurrencyMenu => RETURN_TO_CURRENCY_MENU,
            CallbackAction::Quote(ticker) => ticker.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_code_round_trip() {
        for ticker in Ticker::ALL {
            assert_eq!(Ticker::from_code(ticker.code()), Some(ticker));
        }
    }

    #[test]
    fn test_ticker_from_code_is_case_sensitive() {
        // Callback payloads are produced by the bot itself, so only the exact
        // code is accepted.
        assert_eq!(Ticker::from_code("btc"), None);
        assert_eq!(Ticker::from_code("XRP"), None);
        assert_eq!(Ticker::from_code(""), None);
    }

    #[test]
    fn test_command_parse_ignores_case() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/START"), Some(Command::Start));
        assert_eq!(Command::parse("/Show_Currencies"), Some(Command::ShowCurrencies));
    }

    #[test]
    fn test_command_parse_rejects_non_commands() {
        assert_eq!(Command::parse("start"), None);
        assert_eq!(Command::parse("/starting"), None);
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_command_menu_name_has_no_slash() {
        assert_eq!(Command::Start.menu_name(), "start");
        assert_eq!(Command::ShowCurrencies.menu_name(), "show_currencies");
    }

    #[test]
    fn test_callback_action_parse_known_payloads() {
        assert_eq!(
            CallbackAction::parse("open_currency_menu"),
            Some(CallbackAction::OpenCurrencyMenu)
        );
        assert_eq!(
            CallbackAction::parse("return_to_currency_menu"),
            Some(CallbackAction::ReturnToCurrencyMenu)
        );
        assert_eq!(
            CallbackAction::parse("BTC"),
            Some(CallbackAction::Quote(Ticker::Btc))
        );
    }

    #[test]
    fn test_callback_action_parse_unknown_payload() {
        assert_eq!(CallbackAction::parse("XRP"), None);
        assert_eq!(CallbackAction::parse(""), None);
    }

    #[test]
    fn test_callback_action_payload_round_trip() {
        for ticker in Ticker::ALL {
            let action = CallbackAction::Quote(ticker);
            assert_eq!(CallbackAction::parse(action.payload()), Some(action));
        }
        assert_eq!(
            CallbackAction::parse(CallbackAction::OpenCurrencyMenu.payload()),
            Some(CallbackAction::OpenCurrencyMenu)
        );
    }
}
