//! Formatting helpers for listing cards.

use crate::constants::currency_symbol;

/// `2450` → `2,450`
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price with the currency symbol, falling back to the code as a suffix.
pub fn format_price(amount: u32, currency: &str) -> String {
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{}", format_thousands(amount)),
        None => format!("{} {currency}", format_thousands(amount)),
    }
}

pub fn format_rating(rating: f32) -> String {
    format!("{rating:.2}")
}
