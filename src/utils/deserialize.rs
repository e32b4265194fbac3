//! 请求体反序列化辅助函数

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::datetime::parse_datetime;

/// 反序列化日期时间（接受 RFC 3339、无时区日期时间或纯日期）
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

/// 部分更新中的必填日期：缺失 => `None`，`null` 报错
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_datetime(deserializer).map(Some)
}

/// 部分更新中的必填字段
///
/// 配合 `#[serde(default)]` 使用：缺失 => `None`（不修改），`null` 报错
pub fn deserialize_required<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(serde::de::Error::custom("required field cannot be null")),
    }
}

/// 区分“字段缺失”与“显式置空”
///
/// 配合 `#[serde(default)]` 使用：
/// - 缺失 => `None`（不修改）
/// - `null` => `Some(None)`（清空）
/// - 有值 => `Some(Some(v))`
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_datetime")]
        at: DateTime<Utc>,
        #[serde(default, deserialize_with = "deserialize_optional_datetime")]
        until: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "deserialize_nullable")]
        note: Option<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_required")]
        count: Option<i32>,
    }

    #[test]
    fn test_missing_vs_null() {
        let p: Sample = serde_json::from_str(r#"{"at":"2024-01-01"}"#).unwrap();
        assert_eq!(p.at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(p.until.is_none());
        assert!(p.note.is_none());

        let p: Sample = serde_json::from_str(r#"{"at":"2024-01-01","note":null}"#).unwrap();
        assert_eq!(p.note, Some(None));

        let p: Sample =
            serde_json::from_str(r#"{"at":"2024-01-01","note":"vip","until":"2024-02-01"}"#)
                .unwrap();
        assert_eq!(p.note, Some(Some("vip".to_string())));
        assert!(p.until.is_some());
    }

    #[test]
    fn test_required_fields_reject_null() {
        let p: Sample = serde_json::from_str(r#"{"at":"2024-01-01","count":3}"#).unwrap();
        assert_eq!(p.count, Some(3));
        assert!(p.until.is_none());

        let err =
            serde_json::from_str::<Sample>(r#"{"at":"2024-01-01","count":null}"#).unwrap_err();
        assert!(err.to_string().contains("cannot be null"));
        assert!(serde_json::from_str::<Sample>(r#"{"at":"2024-01-01","until":null}"#).is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"at":"not a date"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{}"#).is_err());
    }
}
