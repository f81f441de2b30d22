//! 定义了整个 `soundcloud-feed` 库的错误类型 `FeedError`。

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::model::timestamp::TimestampFormat;

/// `soundcloud-feed` 库的通用错误枚举。
///
/// 解码失败分为两类：
/// - 结构错误：字段缺失或形状不对，说明"已知的结构，但数据损坏"；
/// - [`FeedError::UnrecognizedKind`]：`type` 字段不是已知的四个值之一，说明 API 结构发生了变化。
///
/// 调用方可以通过 [`FeedError::is_structural`] 和 [`FeedError::is_unrecognized_kind`] 区分两者。
#[derive(Error, Debug)]
pub enum FeedError {
    /// 字段存在，但无法解码为预期的类型
    #[error("字段 `{field}` 解码失败: {source}")]
    Field {
        /// 出错的字段名
        field: &'static str,
        /// 底层 `serde_json` 错误
        #[source]
        source: serde_json::Error,
    },

    /// 必需字段缺失或为 `null`
    #[error("缺少必需字段 `{0}`")]
    MissingField(&'static str),

    /// 记录本身不是一个 JSON 对象
    #[error("`{0}` 不是一个 JSON 对象")]
    NotAnObject(&'static str),

    /// 时间戳与解码器配置的格式不匹配
    #[error("字段 `{field}` 的时间戳 `{value}` 不符合 {format:?} 格式")]
    InvalidTimestamp {
        /// 出错的字段名
        field: &'static str,
        /// 原始值的文本形式
        value: String,
        /// 期望的格式
        format: TimestampFormat,
    },

    /// 未知的帖子类型
    #[error("未知的帖子类型: '{0}'")]
    UnrecognizedKind(String),

    /// 动态流输入文本不是合法的 JSON (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 配置文件的内容无法读写为 [`DecoderConfig`](crate::DecoderConfig)
    #[error("配置文件 {path:?} 解析失败: {source}")]
    Config {
        /// 配置文件路径
        path: PathBuf,
        /// 底层 `serde_json` 错误
        #[source]
        source: serde_json::Error,
    },

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),
}

impl FeedError {
    /// 创建一个带有字段名的 `Field` 错误。
    #[must_use]
    pub fn field(field: &'static str, source: serde_json::Error) -> Self {
        Self::Field { field, source }
    }

    /// 是否为未知帖子类型错误。
    #[must_use]
    pub fn is_unrecognized_kind(&self) -> bool {
        matches!(self, Self::UnrecognizedKind(_))
    }

    /// 是否为结构性的解码错误（字段缺失、类型不符、时间戳无效等）。
    ///
    /// 只针对动态流数据本身；配置文件损坏 ([`FeedError::Config`]) 和 I/O 错误不算在内。
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Field { .. }
                | Self::MissingField(_)
                | Self::NotAnObject(_)
                | Self::InvalidTimestamp { .. }
                | Self::JsonParse(_)
        )
    }

    /// 结构错误涉及的字段名（如果有）。
    #[must_use]
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. }
            | Self::MissingField(field)
            | Self::NotAnObject(field)
            | Self::InvalidTimestamp { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// `FeedError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, FeedError>;
