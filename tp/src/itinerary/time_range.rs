//! Free-form time window parsing

use serde::Serialize;

/// Start shown when the window cannot be split
pub const DEFAULT_START: &str = "10:00 AM";

/// End shown when the window cannot be split
pub const DEFAULT_END: &str = "4:00 PM";

const SEPARATOR: char = '-';

/// Where a [`TimeRange`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSource {
    /// Split out of the visitor's input
    Parsed,
    /// Input was unusable, defaults substituted
    Fallback,
}

/// A display-only start/end pair. Neither side is interpreted as a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    pub source: WindowSource,
}

impl TimeRange {
    /// Split `available_time` on `-`.
    ///
    /// Exactly two parts are trimmed and taken verbatim, even when empty or
    /// nonsensical. Any other part count discards the input entirely and
    /// yields `10:00 AM` / `4:00 PM`.
    pub fn parse(available_time: &str) -> Self {
        let mut parts = available_time.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => Self {
                start: start.trim().to_string(),
                end: end.trim().to_string(),
                source: WindowSource::Parsed,
            },
            _ => Self::fallback(),
        }
    }

    /// The default window
    pub fn fallback() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
            source: WindowSource::Fallback,
        }
    }

    /// True when the input was discarded in favour of the defaults
    pub fn used_default(&self) -> bool {
        self.source == WindowSource::Fallback
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
