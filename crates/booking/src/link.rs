//! WhatsApp deep links and phone-number normalization.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::BookingError;

const WA_BASE_URL: &str = "https://wa.me";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets percent-encoded.
/// This matches the encoding historically applied to these messages, so a
/// space becomes `%20`, never `+`.
const MESSAGE_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strip the leading `+` and every other non-digit from a phone number.
pub fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Build a `wa.me` deep link that opens a chat with `recipient` pre-filled
/// with `message`.
///
/// Fails with [`BookingError::InvalidRecipientNumber`] when no digits remain
/// after normalization.
pub fn build_messaging_deep_link(recipient: &str, message: &str) -> Result<String, BookingError> {
    let digits = digits_only(recipient);
    if digits.is_empty() {
        return Err(BookingError::InvalidRecipientNumber);
    }
    let encoded = utf8_percent_encode(message, MESSAGE_COMPONENT);
    Ok(format!("{WA_BASE_URL}/{digits}?text={encoded}"))
}

/// Loose E.164-style validity check: optional `+`, leading non-zero digit,
/// up to 15 digits, whitespace ignored.
pub fn is_valid_phone_number(number: &str) -> bool {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    let rest = compact.strip_prefix('+').unwrap_or(&compact);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }
    let tail: Vec<char> = chars.collect();
    (1..=14).contains(&tail.len()) && tail.iter().all(|c| c.is_ascii_digit())
}
