//! Typed conversions to and from setting text
//!
//! Values are stored as text only. [`ToSetting`] renders a typed value in
//! its canonical form and [`FromSetting`] reads it back, returning `None`
//! when the text does not parse as the requested type.

use std::fmt::Write;

use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

use crate::words::BoolWords;

/// Conversion context supplied by a [`Document`](crate::Document)
#[derive(Debug, Clone, Copy)]
pub struct ValueFormat<'a> {
    bool_words: &'a BoolWords,
    datetime_format: &'a str,
}

impl<'a> ValueFormat<'a> {
    /// `datetime_format` must already have been checked with a trial format.
    pub(crate) fn new(bool_words: &'a BoolWords, datetime_format: &'a str) -> Self {
        Self {
            bool_words,
            datetime_format,
        }
    }

    /// Boolean-word table used for `bool` values
    pub fn bool_words(&self) -> &'a BoolWords {
        self.bool_words
    }

    /// strftime pattern used for datetime values
    pub fn datetime_format(&self) -> &'a str {
        self.datetime_format
    }
}

/// A value that can be written into a setting
pub trait ToSetting {
    /// Render the value as setting text
    fn to_setting(&self, format: &ValueFormat<'_>) -> String;
}

/// A value that can be read from a setting
pub trait FromSetting: Sized {
    /// Parse setting text, returning `None` on a miss
    fn from_setting(text: &str, format: &ValueFormat<'_>) -> Option<Self>;
}

impl<T: ToSetting + ?Sized> ToSetting for &T {
    fn to_setting(&self, format: &ValueFormat<'_>) -> String {
        (**self).to_setting(format)
    }
}

impl ToSetting for str {
    fn to_setting(&self, _format: &ValueFormat<'_>) -> String {
        self.to_string()
    }
}

impl ToSetting for String {
    fn to_setting(&self, _format: &ValueFormat<'_>) -> String {
        self.clone()
    }
}

impl FromSetting for String {
    fn from_setting(text: &str, _format: &ValueFormat<'_>) -> Option<Self> {
        Some(text.to_string())
    }
}

macro_rules! numeric_setting {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSetting for $ty {
                fn to_setting(&self, _format: &ValueFormat<'_>) -> String {
                    self.to_string()
                }
            }

            impl FromSetting for $ty {
                fn from_setting(text: &str, _format: &ValueFormat<'_>) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
    };
}

numeric_setting!(i32, i64, u32, u64, f32, f64);

impl ToSetting for bool {
    fn to_setting(&self, format: &ValueFormat<'_>) -> String {
        format.bool_words.encode(*self).to_string()
    }
}

impl FromSetting for bool {
    fn from_setting(text: &str, format: &ValueFormat<'_>) -> Option<Self> {
        format.bool_words.try_decode(text)
    }
}

impl ToSetting for NaiveDateTime {
    fn to_setting(&self, format: &ValueFormat<'_>) -> String {
        let mut text = String::new();
        // Patterns reaching a ValueFormat have passed a trial format.
        let _ = write!(text, "{}", self.format(format.datetime_format));
        text
    }
}

impl FromSetting for NaiveDateTime {
    fn from_setting(text: &str, format: &ValueFormat<'_>) -> Option<Self> {
        parse_datetime(text, format.datetime_format)
    }
}

fn parse_datetime(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(datetime) => Some(datetime),
        // Date-only patterns read as midnight
        Err(_) if !has_time_fields(pattern) => NaiveDate::parse_from_str(text, pattern)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        Err(_) => None,
    }
}

fn has_time_fields(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour
                    | Numeric::Hour12
                    | Numeric::Minute
                    | Numeric::Second
                    | Numeric::Nanosecond
                    | Numeric::Timestamp,
                _
            ) | Item::Fixed(
                Fixed::LowerAmPm
                    | Fixed::UpperAmPm
                    | Fixed::Nanosecond
                    | Fixed::Nanosecond3
                    | Fixed::Nanosecond6
                    | Fixed::Nanosecond9
            )
        )
    })
}

/// Check that `pattern` formats a datetime into text it can parse again
pub(crate) fn is_valid_datetime_format(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2001, 2, 3).and_then(|d| d.and_hms_opt(4, 5, 6))
    else {
        return false;
    };
    let mut text = String::new();
    write!(text, "{}", sample.format(pattern)).is_ok() && parse_datetime(&text, pattern).is_some()
}
