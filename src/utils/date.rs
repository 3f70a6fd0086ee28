use chrono::{Duration, NaiveDate};
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%d";

// whole days from `from` to `to`, negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

// moves a date by whole days, failing instead of overflowing the calendar
pub fn add_days(from: NaiveDate, days: i64) -> LibraryResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| from.checked_add_signed(delta))
        .ok_or_else(|| LibraryError::date_out_of_range(from, days))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FMT)
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.map(|d| d.format(DATE_FMT).to_string()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(s) => NaiveDate::parse_from_str(&s, DATE_FMT).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use crate::core::library::LibraryError;
    use crate::utils::date::{add_days, days_between, parse_date, serializer, opt_serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "serializer")]
        on: NaiveDate,
        #[serde(with = "opt_serializer", default)]
        until: Option<NaiveDate>,
    }

    #[test]
    fn test_should_count_days_between() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let to = NaiveDate::from_ymd_opt(2024, 1, 17).expect("valid date");
        assert_eq!(16, days_between(from, to));
        assert_eq!(-16, days_between(to, from));
    }

    #[test]
    fn test_should_add_days_within_calendar() {
        let from = NaiveDate::from_ymd_opt(2024, 2, 27).expect("valid date");
        assert_eq!(Ok(NaiveDate::from_ymd_opt(2024, 3, 12).expect("valid date")), add_days(from, 14));
        assert_eq!(Ok(NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date")), add_days(from, -7));
        assert_eq!(Err(LibraryError::date_out_of_range(from, 1_000_000_000)), add_days(from, 1_000_000_000));
        assert_eq!(Err(LibraryError::date_out_of_range(from, i64::MAX)), add_days(from, i64::MAX));
    }

    #[test]
    fn test_should_parse_date() {
        assert_eq!(NaiveDate::from_ymd_opt(2017, 12, 27), parse_date(" 2017-12-27 ").ok());
        assert!(parse_date("27/12/2017").is_err());
    }

    #[test]
    fn test_should_serialize_dates() {
        let dated = Dated {
            on: NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
            until: None,
        };
        let json = serde_json::to_string(&dated).expect("should serialize");
        assert_eq!("{\"on\":\"2024-03-05\",\"until\":null}", json);
        let back: Dated = serde_json::from_str("{\"on\":\"2024-03-05\"}").expect("should deserialize");
        assert_eq!(dated, back);
    }
}
