use core::fmt;

use time::OffsetDateTime;

/// Wall clock time of the station, used to date the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    datetime: OffsetDateTime,
}

impl LocalTime {
    /// `offset_secs` is added to UTC; None when the result is not a valid date.
    pub fn from_unix(utc_secs: i64, offset_secs: i32) -> Option<Self> {
        let local = utc_secs.checked_add(offset_secs as i64)?;
        let datetime = OffsetDateTime::from_unix_timestamp(local).ok()?;
        Some(Self { datetime })
    }

    /// Month from 1 (January) to 12
    pub fn month(&self) -> u8 {
        u8::from(self.datetime.month())
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = &self.datetime;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            dt.year(),
            self.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    // 2023-11-14 22:13:20 UTC
    const T: i64 = 1_700_000_000;

    #[test]
    fn formats_local_time() {
        let utc = LocalTime::from_unix(T, 0).unwrap();
        assert_eq!(utc.to_string(), "2023-11-14 22:13:20");

        let cet = LocalTime::from_unix(T, 3600 + 3600).unwrap();
        assert_eq!(cet.to_string(), "2023-11-15 00:13:20");
        assert_eq!(cet.month(), 11);
    }

    #[test]
    fn offset_can_cross_a_month() {
        // 2024-01-01 00:30:00 UTC
        let t = 1_704_069_000;
        assert_eq!(LocalTime::from_unix(t, -3600).unwrap().month(), 12);
        assert_eq!(LocalTime::from_unix(t, 0).unwrap().month(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(LocalTime::from_unix(i64::MAX, 1), None);
        assert_eq!(LocalTime::from_unix(i64::MAX - 10, 0), None);
    }
}
