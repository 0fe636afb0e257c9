use chrono::format::{Item, StrftimeItems};
use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, InvalidTimestampFormat, ReadError};

/// Display settings for the presentation layer. Every field is optional in
/// the RON source and falls back to its default.
///
/// ```ron
/// (
///     missing_timestamp: "-",
///     timestamp_format: "%b %d, %Y %H:%M",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Shown in place of an absent timestamp.
    pub missing_timestamp: String,
    /// Label used when a raw status cannot be classified.
    pub unknown_label: String,
    /// chrono format string for timestamps (rendered in UTC).
    pub timestamp_format: String,
    pub tooltip_width: usize,
    pub empty_tooltip: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            missing_timestamp: "N/A".to_string(),
            unknown_label: "Unknown".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M UTC".to_string(),
            tooltip_width: 74,
            empty_tooltip: "No status information available".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        let config: Self =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("DisplayConfig", &e))?;
        if StrftimeItems::new(&config.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(InvalidTimestampFormat::new(&config.timestamp_format));
        }
        Ok(config)
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron_str(&contents)
    }
}
