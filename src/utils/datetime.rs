//! 日期时间解析
//!
//! 数据库中以 UTC 微秒级时间戳存储，API 层使用 RFC 3339。

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::{CrmError, Result};

/// 无时区的日期时间格式，按 UTC 处理
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 解析日期时间字符串
///
/// 支持：
/// - RFC 3339（`2024-01-01T08:30:00+08:00`）
/// - 无时区日期时间（`2024-01-01 08:30:00`、`2024-01-01T08:30:00`）
/// - 纯日期（`2024-01-01`，取当天 00:00:00 UTC）
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CrmError::date_parse("empty date string"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CrmError::date_parse(format!("invalid date: {value}")))
}

/// 微秒时间戳转 UTC 时间，越界时回退到 Unix 纪元
pub fn from_timestamp_micros(micros: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_micros(micros).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_datetime("2024-01-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_datetime("2024-01-01T08:00:00+08:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let expected = Utc.with_ymd_and_hms(2024, 10, 14, 19, 35, 41).unwrap();
        assert_eq!(parse_datetime("2024-10-14 19:35:41").unwrap(), expected);
        assert_eq!(parse_datetime("2024-10-14T19:35:41").unwrap(), expected);
        assert_eq!(parse_datetime("2024-10-14 19:35:41.000000").unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_datetime("").unwrap_err().code(), "E009");
        assert_eq!(parse_datetime("yesterday").unwrap_err().code(), "E009");
        assert!(parse_datetime("2024-13-01").is_err());
    }

    #[test]
    fn test_fractional_seconds_survive_storage() {
        let dt = parse_datetime("2024-01-01T00:00:00.750Z").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 750);
        assert_eq!(from_timestamp_micros(dt.timestamp_micros()), dt);

        let dt = parse_datetime("2024-10-14 19:35:41.123456").unwrap();
        assert_eq!(from_timestamp_micros(dt.timestamp_micros()), dt);
    }
}
