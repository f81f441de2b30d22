//! SoundCloud 歌单模型，以及歌单中可能只部分加载的歌曲列表。

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::model::{
    Identifiable,
    track::{Track, TrackId},
    user::User,
};

/// 歌单的数字 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub u64);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 歌单中的歌曲列表。
///
/// API 经常不在歌单里内联完整的歌曲，而是只返回数量或仅含 `id` 的占位对象。
/// 这种情况用 [`TrackCollection::Unresolved`] 表示，并在 [`TrackCollection::tracks`]
/// 中视为空列表，调用方无需特殊处理。
#[derive(Debug, Clone, PartialEq)]
pub enum TrackCollection {
    /// 完整加载的歌曲列表，顺序与 API 返回的一致。
    Resolved(Vec<Track>),
    /// 尚未加载的歌曲列表。
    Unresolved {
        /// 歌单中的歌曲数量（如果 API 提供了）。
        count: Option<u32>,
    },
}

impl TrackCollection {
    /// 已加载的歌曲；未加载时返回空切片。
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        match self {
            Self::Resolved(tracks) => tracks,
            Self::Unresolved { .. } => &[],
        }
    }

    /// 歌曲列表是否已完整加载。
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// 歌曲数量：已加载时为实际数量，否则为 API 提供的数量。
    #[must_use]
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Self::Resolved(tracks) => Some(tracks.len()),
            Self::Unresolved { count } => count.map(|c| c as usize),
        }
    }
}

impl Default for TrackCollection {
    fn default() -> Self {
        Self::Unresolved { count: None }
    }
}

/// 代表一个用户创建的歌单（或专辑）。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPlaylist")]
pub struct Playlist {
    /// 歌单 ID。
    pub id: PlaylistId,
    /// 歌单标题。
    pub title: String,
    /// 总时长，单位为毫秒 (ms)。
    pub duration: Option<u64>,
    /// 歌单页面链接。
    pub permalink_url: Option<String>,
    /// 封面链接。
    pub artwork_url: Option<String>,
    /// 创建者。
    pub user: Option<User>,
    /// 歌曲列表。
    pub tracks: TrackCollection,
}

impl Identifiable for Playlist {
    type Id = PlaylistId;

    fn id(&self) -> PlaylistId {
        self.id
    }
}

/// 歌单在线上的原始形状。
#[derive(Deserialize)]
struct RawPlaylist {
    id: PlaylistId,
    title: String,
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    permalink_url: Option<String>,
    #[serde(default)]
    artwork_url: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    track_count: Option<u32>,
    #[serde(default)]
    tracks: Option<Vec<TrackEntry>>,
}

/// 完整歌曲才有的字段。带有其中任意一个的元素都必须能解码为 [`Track`]。
const FULL_TRACK_FIELDS: [&str; 2] = ["title", "duration"];

/// `tracks` 数组中的元素：完整的歌曲，或只有 `id` 的占位对象。
enum TrackEntry {
    Full(Track),
    Stub,
}

/// 占位对象，通常只有 `id`、`kind` 和 `policy`。
#[derive(Deserialize)]
struct TrackStub {
    #[serde(rename = "id")]
    _id: TrackId,
}

impl<'de> Deserialize<'de> for TrackEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let is_full = value
            .as_object()
            .is_some_and(|object| FULL_TRACK_FIELDS.iter().any(|f| object.contains_key(*f)));

        // 损坏的完整歌曲不能被当作占位对象吞掉
        if is_full {
            Track::deserialize(value)
                .map(TrackEntry::Full)
                .map_err(de::Error::custom)
        } else {
            TrackStub::deserialize(value)
                .map(|_| TrackEntry::Stub)
                .map_err(de::Error::custom)
        }
    }
}

impl From<RawPlaylist> for Playlist {
    fn from(raw: RawPlaylist) -> Self {
        let tracks = match raw.tracks {
            None => TrackCollection::Unresolved {
                count: raw.track_count,
            },
            Some(entries) => {
                let total = entries.len();
                let full: Vec<Track> = entries
                    .into_iter()
                    .filter_map(|entry| match entry {
                        TrackEntry::Full(track) => Some(track),
                        TrackEntry::Stub => None,
                    })
                    .collect();

                // 只要有一个占位对象，整个列表就视为未加载
                if full.len() == total {
                    TrackCollection::Resolved(full)
                } else {
                    TrackCollection::Unresolved {
                        count: raw.track_count.or(u32::try_from(total).ok()),
                    }
                }
            }
        };

        Self {
            id: raw.id,
            title: raw.title,
            duration: raw.duration,
            permalink_url: raw.permalink_url,
            artwork_url: raw.artwork_url,
            user: raw.user,
            tracks,
        }
    }
}
