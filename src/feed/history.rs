//! 播放历史条目。
//!
//! 线上形状为 `{"played_at": 1700000000.0, "track": {...}}`，
//! 其中 `played_at` 是浮点数形式的 Unix 秒。

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::trace;

use crate::{
    error::Result,
    feed::{
        fields::{into_record, take_required, take_value},
        page::Page,
    },
    model::{
        Identifiable,
        timestamp::TimestampFormat,
        track::{Track, TrackId},
    },
};

/// 一条播放历史记录。标识即为所播放歌曲的标识。
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    date: DateTime<Utc>,
    track: Track,
}

impl HistoryItem {
    /// 播放时间。
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// 播放的歌曲。
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// 取出播放的歌曲。
    #[must_use]
    pub fn into_track(self) -> Track {
        self.track
    }
}

impl Identifiable for HistoryItem {
    type Id = TrackId;

    fn id(&self) -> TrackId {
        self.track.id
    }
}

/// 将播放历史记录解码为 [`HistoryItem`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryDecoder {
    timestamp_format: TimestampFormat,
}

impl Default for HistoryDecoder {
    fn default() -> Self {
        Self::new(TimestampFormat::EpochSeconds)
    }
}

impl HistoryDecoder {
    /// 创建一个使用指定时间戳格式解析 `played_at` 的解码器。
    #[must_use]
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    /// 解析 `played_at` 使用的格式。
    #[must_use]
    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format
    }

    /// 解码单条记录。
    pub fn decode(&self, raw: Value) -> Result<HistoryItem> {
        let mut record = into_record(raw, "history item")?;

        let played_at = take_value(&mut record, "played_at")?;
        let date = self.timestamp_format.parse("played_at", &played_at)?;
        let track: Track = take_required(&mut record, "track")?;

        trace!("[History] 已解码播放记录 {}", track.id);

        Ok(HistoryItem { date, track })
    }

    /// 从 JSON 文本解码单条记录。
    pub fn decode_str(&self, json: &str) -> Result<HistoryItem> {
        self.decode(serde_json::from_str(json)?)
    }

    /// 从 JSON 字节解码单条记录。
    pub fn decode_slice(&self, json: &[u8]) -> Result<HistoryItem> {
        self.decode(serde_json::from_slice(json)?)
    }

    /// 解码一页播放历史，失败的记录会被跳过。
    pub fn decode_page(&self, raw: Value) -> Result<Page<HistoryItem>> {
        Page::decode_with(raw, "[History]", |record| self.decode(record))
    }

    /// 从 JSON 文本解码一页播放历史。
    pub fn decode_page_str(&self, json: &str) -> Result<Page<HistoryItem>> {
        self.decode_page(serde_json::from_str(json)?)
    }
}
