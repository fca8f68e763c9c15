use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimecodeError;

// @module: Timecode interval type with millisecond precision

/// Separator between the start and end instants on an SRT timecode line
pub const TIMECODE_SEPARATOR: &str = " --> ";

// @const: SRT instant regex (HH:MM:SS,mmm)
static INSTANT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// A display interval attached to one subtitle cue.
///
/// Both instants are milliseconds since the start of the subtitle stream.
/// Invariant: `start_ms < end_ms` at all times; every mutation preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    start_ms: u64,
    end_ms: u64,
}

impl Timecode {
    // @creates: Validated timecode interval
    pub fn new(start_ms: u64, end_ms: u64) -> Result<Self, TimecodeError> {
        if start_ms >= end_ms {
            return Err(TimecodeError::Inverted { start_ms, end_ms });
        }
        Ok(Timecode { start_ms, end_ms })
    }

    /// Start instant in milliseconds
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// End instant in milliseconds
    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    /// Display length of the interval in milliseconds; always positive
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    /// Distance in milliseconds between the nearer edges of two intervals.
    ///
    /// Returns 0 when the intervals overlap or touch. Symmetric: says nothing
    /// about which interval is earlier.
    pub fn gap_ms(&self, other: &Timecode) -> u64 {
        if self.end_ms <= other.start_ms {
            other.start_ms - self.end_ms
        } else if other.end_ms <= self.start_ms {
            self.start_ms - other.end_ms
        } else {
            0
        }
    }

    /// Shift both instants by the same signed delta, preserving the interval
    /// length. A negative shift saturates the start at 0.
    pub fn add_offset(&mut self, delta_ms: i64) {
        let duration = self.duration_ms();
        if delta_ms >= 0 {
            self.start_ms = self.start_ms.saturating_add(delta_ms as u64);
        } else {
            self.start_ms = self.start_ms.saturating_sub(delta_ms.unsigned_abs());
        }
        self.end_ms = self.start_ms + duration;
    }

    /// Extend only the end instant, lengthening the display time without
    /// moving the appearance. A negative delta never drives the end below
    /// `start + 1`.
    pub fn add_duration(&mut self, delta_ms: i64) {
        if delta_ms >= 0 {
            self.end_ms = self.end_ms.saturating_add(delta_ms as u64);
        } else {
            let shrunk = self.end_ms.saturating_sub(delta_ms.unsigned_abs());
            self.end_ms = shrunk.max(self.start_ms + 1);
        }
    }

    // @mutates: End instant; caller must keep new_end_ms > start_ms
    pub(crate) fn set_end_ms(&mut self, new_end_ms: u64) {
        debug_assert!(new_end_ms > self.start_ms);
        self.end_ms = new_end_ms;
    }

    /// Parse a single `HH:MM:SS,mmm` instant to milliseconds
    pub fn parse_instant(instant: &str) -> Result<u64, TimecodeError> {
        let caps = INSTANT_REGEX
            .captures(instant)
            .ok_or_else(|| TimecodeError::InvalidInstant(instant.to_string()))?;

        // Fixed-width digit groups, parse cannot fail
        let hours: u64 = caps[1].parse().unwrap();
        let minutes: u64 = caps[2].parse().unwrap();
        let seconds: u64 = caps[3].parse().unwrap();
        let millis: u64 = caps[4].parse().unwrap();

        if minutes >= 60 || seconds >= 60 {
            return Err(TimecodeError::ComponentRange(instant.to_string()));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Format an instant in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_instant(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(TIMECODE_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(TimecodeError::Separator(s.to_string()));
        }

        let start_ms = Self::parse_instant(parts[0].trim())?;
        let end_ms = Self::parse_instant(parts[1].trim())?;

        Self::new(start_ms, end_ms)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            Self::format_instant(self.start_ms),
            TIMECODE_SEPARATOR,
            Self::format_instant(self.end_ms)
        )
    }
}
