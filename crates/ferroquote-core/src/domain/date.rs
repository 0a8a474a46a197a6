use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a calendar date written as `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Unix timestamp of 00:00 UTC on `date`.
pub fn midnight_utc_timestamp(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

/// Calendar date of `timestamp` in an exchange whose clock runs `gmtoffset`
/// seconds from UTC.
pub fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<Date> {
    OffsetDateTime::from_unix_timestamp(timestamp.saturating_add(gmtoffset))
        .ok()
        .map(OffsetDateTime::date)
}

/// Serde adapter storing a [`Date`] as `YYYY-MM-DD`.
pub mod iso {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_date(&value).map_err(D::Error::custom)
    }
}
