//! 从 JSON 对象中按字段名取值的辅助函数。
//!
//! 字段会从对象中移除后再反序列化，避免复制原始数据，并保证错误信息带上字段名。

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FeedError, Result};

pub(crate) type Record = Map<String, Value>;

/// 将值转换为 JSON 对象，否则返回 `NotAnObject(what)`。
pub(crate) fn into_record(raw: Value, what: &'static str) -> Result<Record> {
    match raw {
        Value::Object(record) => Ok(record),
        _ => Err(FeedError::NotAnObject(what)),
    }
}

/// 取出必需字段的原始值。缺失或为 `null` 时返回 `MissingField`。
pub(crate) fn take_value(record: &mut Record, field: &'static str) -> Result<Value> {
    match record.remove(field) {
        None | Some(Value::Null) => Err(FeedError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

/// 取出并反序列化必需字段。
pub(crate) fn take_required<T: DeserializeOwned>(
    record: &mut Record,
    field: &'static str,
) -> Result<T> {
    let value = take_value(record, field)?;
    serde_json::from_value(value).map_err(|e| FeedError::field(field, e))
}

/// 取出并反序列化可选字段。缺失或为 `null` 时返回 `None`。
pub(crate) fn take_optional<T: DeserializeOwned>(
    record: &mut Record,
    field: &'static str,
) -> Result<Option<T>> {
    match record.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| FeedError::field(field, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        into_record(value, "test").unwrap()
    }

    #[test]
    fn test_take_required_removes_field() {
        let mut rec = record(json!({ "uuid": "abc", "other": 1 }));
        let uuid: String = take_required(&mut rec, "uuid").unwrap();
        assert_eq!(uuid, "abc");
        assert!(!rec.contains_key("uuid"));
        assert!(rec.contains_key("other"));
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let mut rec = record(json!({ "track": null }));
        let err = take_required::<u64>(&mut rec, "track").unwrap_err();
        assert!(matches!(err, FeedError::MissingField("track")));
    }

    #[test]
    fn test_wrong_shape_is_field_error() {
        let mut rec = record(json!({ "caption": 12 }));
        let err = take_optional::<String>(&mut rec, "caption").unwrap_err();
        assert!(matches!(err, FeedError::Field { field: "caption", .. }));
    }

    #[test]
    fn test_optional_absent_and_null() {
        let mut rec = record(json!({ "caption": null }));
        assert_eq!(take_optional::<String>(&mut rec, "caption").unwrap(), None);
        assert_eq!(take_optional::<String>(&mut rec, "missing").unwrap(), None);
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = into_record(json!([1, 2]), "post").unwrap_err();
        assert!(matches!(err, FeedError::NotAnObject("post")));
    }
}
