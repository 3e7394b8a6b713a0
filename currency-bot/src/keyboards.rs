//! Inline keyboards for the menu flow.

use cbot_core::{CallbackAction, Ticker};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

const CURRENCIES_PER_ROW: usize = 3;

/// Single "Choose a currency." button attached to the welcome message.
pub fn start_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(
        "Choose a currency.",
        CallbackAction::OpenCurrencyMenu.payload(),
    )]])
}

/// Currency menu: one button per supported ticker, two rows of three. Button
/// labels are display names; payloads are the ticker codes.
pub fn currency_menu_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = Ticker::ALL
        .chunks(CURRENCIES_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|ticker| InlineKeyboardButton::callback(ticker.display_name(), ticker.code()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Single "Choose another currency." button attached to a quote reply.
pub fn change_currency_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(
        "Choose another currency.",
        CallbackAction::ReturnToCurrencyMenu.payload(),
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn payload(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("expected callback button, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_menu_is_two_rows_of_three() {
        let keyboard = currency_menu_keyboard();
        let rows = &keyboard.inline_keyboard;

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_currency_menu_has_one_button_per_ticker() {
        let keyboard = currency_menu_keyboard();
        let payloads: Vec<&str> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(payload)
            .collect();

        let expected: Vec<&str> = Ticker::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(payloads, expected);
    }

    #[test]
    fn test_currency_menu_labels_are_display_names() {
        let keyboard = currency_menu_keyboard();
        let labels: Vec<&str> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(|b| b.text.as_str())
            .collect();

        assert_eq!(
            labels,
            vec!["Bitcoin", "Ethereum", "Toncoin", "BNB", "Polkadot", "Solana"]
        );
    }

    #[test]
    fn test_start_keyboard_opens_menu() {
        let keyboard = start_keyboard();
        let rows = &keyboard.inline_keyboard;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(payload(&rows[0][0]), "open_currency_menu");
    }

    #[test]
    fn test_change_currency_keyboard_returns_to_menu() {
        let keyboard = change_currency_keyboard();
        let rows = &keyboard.inline_keyboard;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(payload(&rows[0][0]), "return_to_currency_menu");
    }
}
