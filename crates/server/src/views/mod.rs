//! HTML views rendered with maud. Views only shape already-normalized
//! records; they never fetch.

pub mod components;
pub mod icons;
pub mod layout;
pub mod not_found;
pub mod reveal;
pub mod richtext;

use chrono::{Datelike, NaiveDate};

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// `2024-03-15` → `mars 2024`.
pub fn month_year(date: NaiveDate) -> String {
    format!("{} {}", MONTHS_FR[date.month0() as usize], date.year())
}

/// Cut `text` to at most `max` characters on a word boundary, adding `…`.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end_matches([',', ';', ':', '.', ' ']))
}
