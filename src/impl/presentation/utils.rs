use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::config::DisplayConfig;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format a statement balance with currency symbol, correct number of
/// decimal places and thousands separators, e.g. "$1,008.32" or "-$215.00".
///
/// Uses en locale ('.' as decimal mark) regardless of currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            minor_units % scale,
            width = decimal_places as usize,
        )
    }
}

pub(crate) fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Renders in UTC with the configured format, or the configured sentinel when
/// absent. A format chrono cannot render falls back to RFC 3339.
pub(crate) fn format_timestamp(timestamp: Option<DateTime<Utc>>, config: &DisplayConfig) -> String {
    let Some(timestamp) = timestamp else {
        return config.missing_timestamp.clone();
    };
    let mut out = String::new();
    match write!(out, "{}", timestamp.format(&config.timestamp_format)) {
        Ok(()) => out,
        Err(_) => timestamp.to_rfc3339(),
    }
}
