//! SoundCloud 歌曲模型。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Identifiable, user::User};

/// 歌曲的数字 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 代表一首完整加载的歌曲。
///
/// 未知字段会被忽略，只保留动态流展示需要的部分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// 歌曲 ID。
    pub id: TrackId,
    /// 歌曲标题。
    pub title: String,
    /// 可播放时长，单位为毫秒 (ms)。
    pub duration: u64,
    /// 完整时长，单位为毫秒 (ms)。试听片段的 `duration` 会比它短。
    #[serde(default)]
    pub full_duration: Option<u64>,
    /// 歌曲页面链接。
    #[serde(default)]
    pub permalink_url: Option<String>,
    /// 封面链接。
    #[serde(default)]
    pub artwork_url: Option<String>,
    /// 流派。
    #[serde(default)]
    pub genre: Option<String>,
    /// 播放次数。
    #[serde(default)]
    pub playback_count: Option<u64>,
    /// 是否可以播放。
    #[serde(default)]
    pub streamable: Option<bool>,
    /// 上传者。
    #[serde(default)]
    pub user: Option<User>,
}

impl Track {
    /// 是否只能播放试听片段。
    #[must_use]
    pub fn is_snippet(&self) -> bool {
        self.full_duration.is_some_and(|full| full > self.duration)
    }
}

impl Identifiable for Track {
    type Id = TrackId;

    fn id(&self) -> TrackId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_track_ignores_unknown_fields() {
        let track: Track = serde_json::from_value(json!({
            "id": 123,
            "kind": "track",
            "title": "Nuage",
            "duration": 180000,
            "waveform_url": "https://wave.sndcdn.com/abc.json",
            "user": { "id": 7, "username": "artist" }
        }))
        .unwrap();

        assert_eq!(track.id(), TrackId(123));
        assert_eq!(track.title, "Nuage");
        assert_eq!(track.user.as_ref().map(|u| u.username.as_str()), Some("artist"));
        assert!(!track.is_snippet());
    }

    #[test]
    fn test_snippet_detection() {
        let track: Track = serde_json::from_value(json!({
            "id": 1,
            "title": "Preview",
            "duration": 30000,
            "full_duration": 240000
        }))
        .unwrap();
        assert!(track.is_snippet());
    }

    #[test]
    fn test_track_stub_is_not_a_track() {
        let result = serde_json::from_value::<Track>(json!({ "id": 1, "kind": "track" }));
        assert!(result.is_err());
    }
}
