use std::fmt;

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// A point in time with millisecond precision (unix epoch based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self::from(OffsetDateTime::now_utc())
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_offset_date_time(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self
            .to_offset_date_time()
            .and_then(|dt| dt.format(DISPLAY_FORMAT).ok())
        {
            Some(s) => f.write_str(&s),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip_through_offset_date_time() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from(t1.to_offset_date_time().unwrap());
        assert_eq!(t1, t2);
    }

    #[test]
    fn display_in_utc() {
        let ts = Timestamp::from_millis(1_000_123);
        assert_eq!(ts.to_string(), "1970-01-01 00:16:40 UTC");
    }

    #[test]
    fn order_by_millis() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
    }
}
