use chrono::{NaiveDate, Weekday};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences. The tracker ships a single fixed
/// pt-BR / BRL locale; the struct keeps the knobs in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub first_weekday: Weekday,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            currency_symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            first_weekday: Weekday::Mon,
        }
    }
}

/// The fixed locale every amount and date label is rendered with.
pub static LOCALE: Lazy<LocaleConfig> = Lazy::new(LocaleConfig::default);

/// Formats a monetary amount as localized currency text, e.g. `R$ 1.234,56`.
pub fn format_currency(amount: f64) -> String {
    let body = format_number(&LOCALE, amount.abs(), 2);
    if amount < 0.0 {
        format!("-{} {}", LOCALE.currency_symbol, body)
    } else {
        format!("{} {}", LOCALE.currency_symbol, body)
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    match body.find(locale.decimal_separator) {
        Some(pos) => {
            let grouped = group_digits(&body[..pos], locale.grouping_separator);
            format!("{}{}", grouped, &body[pos..])
        }
        None => group_digits(&body, locale.grouping_separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if ch.is_ascii_digit() {
            if count != 0 && count % 3 == 0 {
                grouped.insert(0, separator);
            }
            count += 1;
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Short day label used by the 7-day trend, e.g. `04/08`.
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Compact date used by statement rows, e.g. `04/08/26`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}
