//! Elapsed-time formatting.
//!
//! Turns a time delta into display text using a token pattern such as
//! `"{days} days {hours}:{minutes}:{seconds}"`.

mod error;

pub use error::ElapsedError;

use chrono::{DateTime, TimeDelta, Utc};

/// Pattern used for issue age and last-comment lines.
pub const DEFAULT_PATTERN: &str = "{days} days {hours}:{minutes}:{seconds}";

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Returns `now - then`, or zero if `then` is in the future.
#[must_use]
pub fn elapsed_since(then: DateTime<Utc>, now: DateTime<Utc>) -> TimeDelta {
    (now - then).max(TimeDelta::zero())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "days" => Some(Self::Days),
            "hours" => Some(Self::Hours),
            "minutes" => Some(Self::Minutes),
            "seconds" => Some(Self::Seconds),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed elapsed-time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedFormat {
    segments: Vec<Segment>,
}

impl Default for ElapsedFormat {
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Field(Field::Days),
                Segment::Literal(" days ".to_string()),
                Segment::Field(Field::Hours),
                Segment::Literal(":".to_string()),
                Segment::Field(Field::Minutes),
                Segment::Literal(":".to_string()),
                Segment::Field(Field::Seconds),
            ],
        }
    }
}

impl ElapsedFormat {
    /// Parses a pattern made of literal text and `{field}` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ElapsedError`] for unknown or unterminated tokens.
    pub fn parse(pattern: &str) -> Result<Self, ElapsedError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(start) = rest.find('{') {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| ElapsedError::Unterminated {
                pattern: pattern.to_string(),
            })?;

            let name = &after[..end];
            let field = Field::from_name(name).ok_or_else(|| ElapsedError::UnknownField {
                name: name.to_string(),
                pattern: pattern.to_string(),
            })?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Field(field));
            rest = &after[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Formats a delta. Negative deltas are formatted as zero.
    #[must_use]
    pub fn format(&self, delta: TimeDelta) -> String {
        let total = delta.num_seconds().max(0);
        let days = total / SECONDS_PER_DAY;
        let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let seconds = total % SECONDS_PER_MINUTE;

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Days) => out.push_str(&days.to_string()),
                Segment::Field(Field::Hours) => out.push_str(&hours.to_string()),
                Segment::Field(Field::Minutes) => out.push_str(&minutes.to_string()),
                Segment::Field(Field::Seconds) => out.push_str(&seconds.to_string()),
            }
        }
        out
    }
}
