use crate::EnricherError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Represents the precision of a time value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    BillionYears = 0,
    HundredMillionYears = 1,
    TenMillionYears = 2,
    MillionYears = 3,
    HundredMillennia = 4,
    TenMillennia = 5,
    Millennia = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl TryFrom<u8> for TimePrecision {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimePrecision::BillionYears),
            1 => Ok(TimePrecision::HundredMillionYears),
            2 => Ok(TimePrecision::TenMillionYears),
            3 => Ok(TimePrecision::MillionYears),
            4 => Ok(TimePrecision::HundredMillennia),
            5 => Ok(TimePrecision::TenMillennia),
            6 => Ok(TimePrecision::Millennia),
            7 => Ok(TimePrecision::Century),
            8 => Ok(TimePrecision::Decade),
            9 => Ok(TimePrecision::Year),
            10 => Ok(TimePrecision::Month),
            11 => Ok(TimePrecision::Day),
            12 => Ok(TimePrecision::Hour),
            13 => Ok(TimePrecision::Minute),
            14 => Ok(TimePrecision::Second),
            _ => Err("Invalid TimePrecision value"),
        }
    }
}

impl From<TimePrecision> for u8 {
    fn from(precision: TimePrecision) -> Self {
        precision as u8
    }
}

impl TryFrom<u64> for TimePrecision {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let value = u8::try_from(value).map_err(|_| "Value too large for TimePrecision")?;
        value.try_into()
    }
}

/// A `time` datavalue, eg `{"time": "+1997-05-00T00:00:00Z", "precision": 10, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeValue {
    time: String,
    precision: TimePrecision,
}

impl TimeValue {
    pub fn new<S: Into<String>>(time: S, precision: TimePrecision) -> Self {
        Self {
            time: time.into(),
            precision,
        }
    }

    /// Creates a new `TimeValue` from the `value` object of a `time` datavalue.
    /// A missing precision is read as day precision.
    pub fn from_json(j: &Value) -> Result<Self, EnricherError> {
        let time = j["time"]
            .as_str()
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "time".into(),
                j: j.to_owned(),
            })?;
        let precision = match j.get("precision") {
            None | Some(Value::Null) => TimePrecision::Day,
            Some(p) => p
                .as_u64()
                .and_then(|p| TimePrecision::try_from(p).ok())
                .ok_or_else(|| EnricherError::MissingOrInvalidField {
                    field: "precision".into(),
                    j: j.to_owned(),
                })?,
        };
        Ok(Self::new(time, precision))
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub const fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// Normalizes the value to `YYYY-MM-DDTHH:MM:SS`, zero-filling whatever the
    /// precision leaves unknown. At year and month precision the unknown month
    /// or day may be `00`, but every component must still be in range.
    ///
    /// # Errors
    /// Returns `EnricherError::InvalidDate` if the timestamp cannot be parsed.
    pub fn to_timestamp(&self) -> Result<String, EnricherError> {
        let invalid = || EnricherError::InvalidDate {
            time: self.time.to_owned(),
            precision: self.precision.into(),
        };
        let s = self.time.strip_prefix('+').unwrap_or(&self.time);
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s.split_once('T').ok_or_else(invalid)?;
        let mut parts = date.splitn(3, '-');
        let year: i32 = parts.next().and_then(|y| y.parse().ok()).ok_or_else(invalid)?;
        let month: u32 = parts.next().and_then(|m| m.parse().ok()).ok_or_else(invalid)?;
        let day: u32 = parts.next().and_then(|d| d.parse().ok()).ok_or_else(invalid)?;
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").map_err(|_| invalid())?;
        if month > 12 || day > 31 {
            return Err(invalid());
        }

        let dt = match self.precision {
            TimePrecision::Year => {
                NaiveDate::from_ymd_opt(year, 1, 1).map(|d| d.and_time(NaiveTime::MIN))
            }
            TimePrecision::Month => {
                NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.and_time(NaiveTime::MIN))
            }
            _ => NaiveDate::from_ymd_opt(year, month, day).map(|d| NaiveDateTime::new(d, time)),
        }
        .ok_or_else(invalid)?;
        Ok(dt.format(OUTPUT_FORMAT).to_string())
    }
}

/// Normalizes a time value, logging and discarding any parse failure.
pub fn parse_date(value: &TimeValue) -> Option<String> {
    match value.to_timestamp() {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!("Failed to parse date: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_year_precision() {
        let tv = TimeValue::new("+1997-01-01T00:00:00Z", TimePrecision::Year);
        assert_eq!(parse_date(&tv).unwrap(), "1997-01-01T00:00:00");
    }

    #[test]
    fn test_year_precision_zero_month_and_day() {
        let tv = TimeValue::new("+1997-00-00T00:00:00Z", TimePrecision::Year);
        assert_eq!(parse_date(&tv).unwrap(), "1997-01-01T00:00:00");
    }

    #[test]
    fn test_month_precision() {
        let tv = TimeValue::new("+1997-05-01T00:00:00Z", TimePrecision::Month);
        assert_eq!(parse_date(&tv).unwrap(), "1997-05-01T00:00:00");
        let tv = TimeValue::new("+1997-05-00T00:00:00Z", TimePrecision::Month);
        assert_eq!(parse_date(&tv).unwrap(), "1997-05-01T00:00:00");
    }

    #[test]
    fn test_day_precision() {
        let tv = TimeValue::new("+1998-11-19T00:00:00Z", TimePrecision::Day);
        assert_eq!(parse_date(&tv).unwrap(), "1998-11-19T00:00:00");
    }

    #[test]
    fn test_second_precision_keeps_time() {
        let tv = TimeValue::new("+2004-11-16T13:45:07Z", TimePrecision::Second);
        assert_eq!(parse_date(&tv).unwrap(), "2004-11-16T13:45:07");
    }

    #[test]
    fn test_decade_precision_is_absent() {
        let tv = TimeValue::new("+1990-00-00T00:00:00Z", TimePrecision::Decade);
        assert_eq!(parse_date(&tv), None);
    }

    #[test]
    fn test_malformed() {
        for time in ["", "1997", "+1997-13-01T00:00:00Z", "+1997-02-30T00:00:00Z", "soon"] {
            let tv = TimeValue::new(time, TimePrecision::Day);
            assert_eq!(parse_date(&tv), None, "{time}");
        }
        for (time, precision) in [
            ("+1997-13-01T00:00:00Z", TimePrecision::Month),
            ("+1997-00-00Tgarbage", TimePrecision::Year),
            ("+1997-13-45T99:99:99Z", TimePrecision::Year),
            ("+1997-00-45T00:00:00Z", TimePrecision::Year),
            ("+1997-05-77Tnonsense", TimePrecision::Month),
            ("+1997-05-77T00:00:00Z", TimePrecision::Month),
            ("+1997-05-01T25:00:00Z", TimePrecision::Month),
            ("+1997-00-00", TimePrecision::Year),
        ] {
            let tv = TimeValue::new(time, precision);
            assert_eq!(parse_date(&tv), None, "{time}");
        }
    }

    #[test]
    fn test_coarse_precision_ignores_valid_time_of_day() {
        let tv = TimeValue::new("+1997-05-31T12:30:00Z", TimePrecision::Month);
        assert_eq!(parse_date(&tv).unwrap(), "1997-05-01T00:00:00");
        let tv = TimeValue::new("+1997-12-31T23:59:59Z", TimePrecision::Year);
        assert_eq!(parse_date(&tv).unwrap(), "1997-01-01T00:00:00");
    }

    #[test]
    fn test_to_timestamp_error() {
        let tv = TimeValue::new("garbage", TimePrecision::Year);
        let err = tv.to_timestamp().unwrap_err();
        assert_eq!(err.to_string(), "Invalid date garbage (precision 9)");
    }

    #[test]
    fn test_from_json() {
        let j = json!({
            "time": "+1998-11-19T00:00:00Z",
            "timezone": 0,
            "before": 0,
            "after": 0,
            "precision": 11,
            "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
        });
        let tv = TimeValue::from_json(&j).unwrap();
        assert_eq!(tv.time(), "+1998-11-19T00:00:00Z");
        assert_eq!(tv.precision(), TimePrecision::Day);
    }

    #[test]
    fn test_from_json_default_precision() {
        let tv = TimeValue::from_json(&json!({"time": "+1998-11-19T00:00:00Z"})).unwrap();
        assert_eq!(tv.precision(), TimePrecision::Day);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(TimeValue::from_json(&json!({"precision": 11})).is_err());
        assert!(TimeValue::from_json(&json!({"time": "+1998-11-19T00:00:00Z", "precision": 99})).is_err());
        assert!(TimeValue::from_json(&json!({"time": "+1998-11-19T00:00:00Z", "precision": "day"})).is_err());
    }

    #[test]
    fn test_time_precision_try_from() {
        assert_eq!(TimePrecision::try_from(9u8), Ok(TimePrecision::Year));
        assert_eq!(TimePrecision::try_from(14u64), Ok(TimePrecision::Second));
        assert!(TimePrecision::try_from(15u8).is_err());
        assert!(TimePrecision::try_from(300u64).is_err());
        assert_eq!(u8::from(TimePrecision::Month), 10);
    }
}
