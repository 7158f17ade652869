//! Timestamps shown next to headers and footers

use std::fmt::Write;

use chrono::{Local, NaiveDateTime};

use xshot_core::DEFAULT_TIME_FORMAT;

/// Where the renderer gets "now" from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local wall-clock time at render
    #[default]
    System,
    /// Always the same instant, for reproducible output
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Formats the current time with a strftime `pattern`
    ///
    /// A pattern chrono can't render falls back to [`DEFAULT_TIME_FORMAT`].
    pub fn format(&self, pattern: &str) -> String {
        let now = self.now();
        let mut out = String::new();
        if write!(out, "{}", now.format(pattern)).is_ok() {
            return out;
        }

        log::warn!("Invalid time format {:?}, using {:?}", pattern, DEFAULT_TIME_FORMAT);
        now.format(DEFAULT_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> Clock {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        Clock::Fixed(at)
    }

    #[test]
    fn test_default_format() {
        assert_eq!(fixed().format(DEFAULT_TIME_FORMAT), "Sat 09.Mar.2024 14:05");
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(fixed().format("%Y-%m-%d"), "2024-03-09");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(fixed().format("%Q broken"), "Sat 09.Mar.2024 14:05");
    }

    #[test]
    fn test_system_clock_is_not_empty() {
        assert!(!Clock::System.format("%H:%M").is_empty());
    }
}
