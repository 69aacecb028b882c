use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Duration, PrimitiveDateTime};

use crate::ValidationError;

/// Naive bar timestamp in `DD-MM-YYYY HH:MM` form.
///
/// The source carries no timezone, so the instant is kept as a
/// `PrimitiveDateTime` and never converted. The original text form is
/// retained verbatim for display.
///
/// A malformed timestamp is a hard parse error. The row that carried it is
/// dropped by the normalizer like any other malformed row; there is no
/// current-time substitution.
#[derive(Debug, Clone)]
pub struct BarTimestamp {
    instant: PrimitiveDateTime,
    text: String,
}

impl BarTimestamp {
    /// Parse a timestamp in exactly `DD-MM-YYYY HH:MM` form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let format = format_description!("[day]-[month]-[year] [hour]:[minute]");
        let trimmed = input.trim();

        let instant = PrimitiveDateTime::parse(trimmed, &format).map_err(|_| {
            ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            }
        })?;

        Ok(Self {
            instant,
            text: trimmed.to_owned(),
        })
    }

    pub const fn instant(&self) -> PrimitiveDateTime {
        self.instant
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The instant `minutes` minutes before this timestamp.
    pub fn minutes_before(&self, minutes: i64) -> PrimitiveDateTime {
        self.instant - Duration::minutes(minutes)
    }
}

impl PartialEq for BarTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for BarTimestamp {}

impl PartialOrd for BarTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BarTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Display for BarTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for BarTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for BarTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
