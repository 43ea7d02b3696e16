//! Accent-insensitive name normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters that carry their mark in the base code point and so survive
/// canonical decomposition.
fn transliterate(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'ı' => "i",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ß' => "ss",
        _ => return None,
    })
}

/// Removes diacritical marks from `text`, so "José" becomes "Jose".
///
/// Absent input maps to an empty string. Case is preserved; see [`fold`] for
/// the form used in comparisons.
///
/// # Examples
///
/// ```
/// use databaseball_core::normalize::normalize;
///
/// assert_eq!(normalize(Some("Agustín")), "Agustin");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut normalized = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match transliterate(c) {
            Some(replacement) => normalized.push_str(replacement),
            None => normalized.push(c),
        }
    }
    normalized
}

/// Normalized and lower-cased `text`.
pub fn fold(text: Option<&str>) -> String {
    normalize(text).to_lowercase()
}
