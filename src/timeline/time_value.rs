//! Point-in-time / duration value parsed from `hh:mm:ss` text.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::constants::time::{BASE, MAX_FIELD_DIGITS, MAX_FIELD_VALUE, MAX_FIELDS};
use crate::error::{Error, Result};

/// A non-negative whole number of seconds together with its textual form.
///
/// Values parsed from text keep the text they were parsed from (`3:45`
/// stays `3:45`); values derived from a number of seconds always use the
/// fixed `hh:mm:ss` form. Equality and hashing use the text, ordering and
/// arithmetic use the seconds, so `1:00` and `0:60` compare as neither less
/// nor greater yet are not `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeValue {
    text: String,
    seconds: u64,
}

impl TimeValue {
    /// Parse `[[h]h:][[m]m:][s]s` text.
    ///
    /// Accepts one to three `:`-separated groups of one or two ASCII
    /// digits, each between 0 and 60 inclusive.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::WrongTimestampFormat {
            text: text.to_string(),
        };

        let fields: Vec<&str> = text.split(':').collect();
        if fields.len() > MAX_FIELDS {
            return Err(invalid());
        }

        let mut seconds = 0u64;
        for field in fields {
            if field.is_empty()
                || field.len() > MAX_FIELD_DIGITS
                || !field.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            let value: u64 = field.parse().map_err(|_| invalid())?;
            if value > MAX_FIELD_VALUE {
                return Err(invalid());
            }
            seconds = seconds * BASE + value;
        }

        Ok(Self {
            text: text.to_string(),
            seconds,
        })
    }

    /// Build a value from a number of seconds, formatted as `hh:mm:ss`.
    ///
    /// Hours are not wrapped, so durations over a day keep their value.
    pub fn from_duration(seconds: u64) -> Self {
        let hours = seconds / (BASE * BASE);
        let minutes = (seconds / BASE) % BASE;
        let secs = seconds % BASE;
        Self {
            text: format!("{hours:02}:{minutes:02}:{secs:02}"),
            seconds,
        }
    }

    /// Total number of seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Textual form of this value.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `self + other`, or `None` on overflow.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.seconds
            .checked_add(other.seconds)
            .map(Self::from_duration)
    }

    /// `self - other`, or `None` if `other` is later than `self`.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.seconds
            .checked_sub(other.seconds)
            .map(Self::from_duration)
    }

    /// Short display form with zero leading fields dropped.
    ///
    /// `00:03:45` becomes `3:45`, `01:00:00` becomes `1:00:00`, zero is `0`.
    pub fn compact(&self) -> String {
        let fixed = Self::from_duration(self.seconds);
        let trimmed = fixed.text.trim_start_matches(['0', ':']);
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialOrd for TimeValue {
    /// Orders by seconds only.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.seconds.cmp(&other.seconds))
    }
}

impl Add for &TimeValue {
    type Output = TimeValue;

    /// Saturates at `u64::MAX` seconds.
    fn add(self, rhs: Self) -> TimeValue {
        TimeValue::from_duration(self.seconds.saturating_add(rhs.seconds))
    }
}

impl Add for TimeValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &TimeValue {
    type Output = TimeValue;

    /// Saturates at zero.
    fn sub(self, rhs: Self) -> TimeValue {
        TimeValue::from_duration(self.seconds.saturating_sub(rhs.seconds))
    }
}

impl Sub for TimeValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}
