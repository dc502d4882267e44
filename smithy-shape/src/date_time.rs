/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamp value for model shapes.
//!
//! Unlike [`std::time::Instant`], this timestamp is not opaque. The time inside
//! of it can be read and modified, and it holds the parsing and formatting
//! logic for the timestamp encodings that field descriptors can declare.

use num_integer::div_mod_floor;
use std::fmt;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Instant in time.
///
/// Represented as seconds and sub-second nanos since the Unix epoch
/// (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire encodings for timestamp fields.
///
/// A field descriptor selects the encoding through its `timestamp_format`
/// trait; the marshaller falls back to `EpochSeconds` for payload members and
/// `DateTime` for path and query members when no trait is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 / ISO 8601 string, e.g. `2023-08-01T12:00:00Z`.
    DateTime,
    /// Fractional seconds since the Unix epoch, e.g. `1690891200`.
    EpochSeconds,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is a full second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= 1_000_000_000 {
            panic!("{} is > 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from fractional seconds since the Unix epoch.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let mut subsecond_nanos = ((epoch_seconds - seconds) * 1_000_000_000_f64).round() as u32;
        if subsecond_nanos >= 1_000_000_000 {
            subsecond_nanos = 999_999_999;
        }
        DateTime::from_secs_and_nanos(seconds as i64, subsecond_nanos)
    }

    /// Returns the whole seconds since the Unix epoch.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos of this `DateTime`.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns this value as fractional seconds since the Unix epoch.
    ///
    /// _Note: this conversion can lose precision due to the nature of floating
    /// point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// Returns the number of nanoseconds since the Unix epoch.
    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.subsecond_nanos as i128
    }

    /// Formats this timestamp in the given wire encoding.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => {
                let odt = OffsetDateTime::from_unix_timestamp_nanos(self.as_nanos())
                    .map_err(|err| DateTimeFormatError::new(err.to_string()))?;
                odt.format(&Rfc3339)
                    .map_err(|err| DateTimeFormatError::new(err.to_string()))
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    Ok(self.seconds.to_string())
                } else {
                    Ok(format!("{}", self.as_secs_f64()))
                }
            }
        }
    }

    /// Parses a timestamp from the given wire encoding.
    pub fn from_str(value: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => {
                let odt = OffsetDateTime::parse(value, &Rfc3339)
                    .map_err(|err| DateTimeParseError::new(err.to_string()))?;
                Ok(DateTime::from_secs_and_nanos(
                    odt.unix_timestamp(),
                    odt.nanosecond(),
                ))
            }
            Format::EpochSeconds => {
                let epoch_seconds: f64 = value
                    .parse()
                    .map_err(|_| DateTimeParseError::new(format!("invalid number: {}", value)))?;
                Ok(DateTime::from_secs_f64(epoch_seconds))
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(formatted) => write!(f, "{}", formatted),
            Err(_) => write!(f, "{}s {}ns", self.seconds, self.subsecond_nanos),
        }
    }
}

/// Failure to render a [`DateTime`] in a requested [`Format`].
#[derive(Debug, Error)]
#[error("failed to format timestamp: {message}")]
pub struct DateTimeFormatError {
    message: String,
}

impl DateTimeFormatError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure to parse a [`DateTime`] from its wire form.
#[derive(Debug, Error)]
#[error("failed to parse timestamp: {message}")]
pub struct DateTimeParseError {
    message: String,
}

impl DateTimeParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};

    #[test]
    fn iso_8601_round_trip() {
        let date_time = DateTime::from_secs(1_690_891_200);
        let formatted = date_time.fmt(Format::DateTime).unwrap();
        assert_eq!(formatted, "2023-08-01T12:00:00Z");
        assert_eq!(DateTime::from_str(&formatted, Format::DateTime).unwrap(), date_time);
    }

    #[test]
    fn epoch_seconds_round_trip() {
        let date_time = DateTime::from_millis(1_690_891_200_500);
        let formatted = date_time.fmt(Format::EpochSeconds).unwrap();
        assert_eq!(formatted, "1690891200.5");
        assert_eq!(
            DateTime::from_str(&formatted, Format::EpochSeconds).unwrap(),
            date_time
        );
    }

    #[test]
    fn whole_epoch_seconds_format_without_fraction() {
        let date_time = DateTime::from_secs(1_690_891_200);
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1690891200");
    }

    #[test]
    fn from_millis_handles_negative_values() {
        let date_time = DateTime::from_millis(-500);
        assert_eq!(date_time.secs(), -1);
        assert_eq!(date_time.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(DateTime::from_str("not a date", Format::DateTime).is_err());
        assert!(DateTime::from_str("not a number", Format::EpochSeconds).is_err());
    }
}
