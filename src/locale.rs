//! Display language selection and locale-aware number formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the screen can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Returned when a locale identifier is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale '{0}' (expected one of: ru, en)")]
pub struct UnknownLocale(pub String);

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Separator inserted between groups of three digits.
    #[must_use]
    pub const fn thousands_separator(self) -> char {
        match self {
            Self::Ru => '\u{a0}',
            Self::En => ',',
        }
    }

    /// Format `value` with grouped thousands, e.g. `15 432` or `15,432`.
    #[must_use]
    pub fn group_thousands(self, value: u32) -> String {
        let digits = value.to_string();
        let separator = self.thousands_separator();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}
