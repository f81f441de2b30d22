//! 时间戳解析。
//!
//! SoundCloud 的不同接口使用不同的时间戳表示：动态流 (`/stream`) 返回字符串形式的日期，
//! 播放历史 (`/me/play-history`) 返回浮点数形式的 Unix 秒。解码器通过 [`TimestampFormat`]
//! 参数化，而不是写死某一种格式。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FeedError, Result};

/// 旧版 API 使用的日期格式，例如 `2020/11/10 12:00:00 +0000`。
const LEGACY_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

/// 线上时间戳的格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// RFC 3339 / ISO 8601 字符串，例如 `2020-11-10T12:00:00Z`。
    ///
    /// 同一接口上两种字符串形式都出现过，因此解析失败时会回退到旧版格式。
    #[default]
    Iso8601,
    /// 旧版 API 的字符串格式，例如 `2020/11/10 12:00:00 +0000`。
    Legacy,
    /// Unix 秒，允许带小数部分。
    EpochSeconds,
    /// Unix 毫秒。
    EpochMillis,
}

impl TimestampFormat {
    /// 按照当前格式解析字段 `field` 的值。
    ///
    /// # 参数
    /// * `field` - 字段名，仅用于错误信息。
    /// * `value` - 原始 JSON 值。
    ///
    /// # 返回
    /// 成功时返回 UTC 时间；值的类型或内容不符合格式时返回 [`FeedError::InvalidTimestamp`]。
    pub fn parse(self, field: &'static str, value: &Value) -> Result<DateTime<Utc>> {
        let parsed = match self {
            Self::Iso8601 => value.as_str().and_then(|s| {
                DateTime::parse_from_rfc3339(s)
                    .or_else(|_| DateTime::parse_from_str(s, LEGACY_FORMAT))
                    .ok()
            }),
            Self::Legacy => value
                .as_str()
                .and_then(|s| DateTime::parse_from_str(s, LEGACY_FORMAT).ok()),
            Self::EpochSeconds => {
                return value
                    .as_f64()
                    .and_then(from_epoch_seconds)
                    .ok_or_else(|| self.invalid(field, value));
            }
            Self::EpochMillis => {
                let millis = match value.as_i64() {
                    Some(ms) => Some(ms),
                    None => value
                        .as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| f.round() as i64),
                };
                return millis
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .ok_or_else(|| self.invalid(field, value));
            }
        };

        parsed
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| self.invalid(field, value))
    }

    fn invalid(self, field: &'static str, value: &Value) -> FeedError {
        FeedError::InvalidTimestamp {
            field,
            value: value.to_string(),
            format: self,
        }
    }
}

/// 将带小数的 Unix 秒转换为 UTC 时间，保留到纳秒。
fn from_epoch_seconds(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1_000_000_000.0).round() as u32;
    // 舍入可能进位到整秒
    let (secs, nanos) = if nanos >= 1_000_000_000 {
        (secs as i64 + 1, 0)
    } else {
        (secs as i64, nanos)
    };
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parse_iso8601() {
        let dt = TimestampFormat::Iso8601
            .parse("created_at", &json!("2020-11-10T12:30:00Z"))
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 11, 10, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_iso8601_with_offset() {
        let dt = TimestampFormat::Iso8601
            .parse("created_at", &json!("2020-11-10T14:30:00+02:00"))
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 11, 10, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_iso8601_falls_back_to_legacy() {
        let dt = TimestampFormat::Iso8601
            .parse("created_at", &json!("2020/11/10 12:30:00 +0000"))
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 11, 10, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_legacy_rejects_iso8601() {
        let err = TimestampFormat::Legacy
            .parse("created_at", &json!("2020-11-10T12:30:00Z"))
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::InvalidTimestamp {
                field: "created_at",
                format: TimestampFormat::Legacy,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_epoch_seconds_float() {
        let dt = TimestampFormat::EpochSeconds
            .parse("played_at", &json!(1700000000.0))
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
    }

    #[test]
    fn test_parse_epoch_seconds_keeps_fraction() {
        let dt = TimestampFormat::EpochSeconds
            .parse("played_at", &json!(1700000000.25))
            .unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = TimestampFormat::EpochMillis
            .parse("played_at", &json!(1700000000123_i64))
            .unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_epoch_rejects_string() {
        let err = TimestampFormat::EpochSeconds
            .parse("played_at", &json!("1700000000"))
            .unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.field_name(), Some("played_at"));
    }

    #[test]
    fn test_string_formats_reject_numbers() {
        assert!(
            TimestampFormat::Iso8601
                .parse("created_at", &json!(1700000000))
                .is_err()
        );
    }
}
