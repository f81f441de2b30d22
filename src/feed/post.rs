//! 动态流中的帖子实体及其派生视图。

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    feed::decoder::PostType,
    model::{Identifiable, playlist::Playlist, track::Track, user::User},
};

/// 帖子的标识，直接使用线上的 `uuid` 字符串。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(String);

impl PostId {
    /// 以字符串形式返回标识。
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 帖子包装的内容。四个变体互斥，且覆盖了所有已知的帖子类型。
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// 用户发布的歌曲。
    Track(Track),
    /// 用户转发的歌曲。
    TrackRepost(Track),
    /// 用户发布的歌单。
    Playlist(Playlist),
    /// 用户转发的歌单。
    PlaylistRepost(Playlist),
}

/// 忽略"是否为转发"之后的帖子内容，供只关心展示什么的调用方使用。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    /// 歌曲。
    Track(&'a Track),
    /// 歌单。
    Playlist(&'a Playlist),
}

/// [`Item`] 的所有权版本。
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedItem {
    /// 歌曲。
    Track(Track),
    /// 歌单。
    Playlist(Playlist),
}

impl Kind {
    /// 与该变体对应的线上类型。
    #[must_use]
    pub fn post_type(&self) -> PostType {
        match self {
            Self::Track(_) => PostType::Track,
            Self::TrackRepost(_) => PostType::TrackRepost,
            Self::Playlist(_) => PostType::Playlist,
            Self::PlaylistRepost(_) => PostType::PlaylistRepost,
        }
    }

    /// 借用形式的内容。
    #[must_use]
    pub fn item(&self) -> Item<'_> {
        match self {
            Self::Track(track) | Self::TrackRepost(track) => Item::Track(track),
            Self::Playlist(playlist) | Self::PlaylistRepost(playlist) => Item::Playlist(playlist),
        }
    }

    /// 消耗自身，返回所有权形式的内容。
    #[must_use]
    pub fn into_item(self) -> OwnedItem {
        match self {
            Self::Track(track) | Self::TrackRepost(track) => OwnedItem::Track(track),
            Self::Playlist(playlist) | Self::PlaylistRepost(playlist) => {
                OwnedItem::Playlist(playlist)
            }
        }
    }
}

/// 动态流中的一条帖子。
///
/// 只能通过 [`PostDecoder`](crate::feed::decoder::PostDecoder) 解码得到，构造后不可修改。
/// 所有派生视图都只依赖已解码的 [`Kind`]，不会保留或重新读取原始 JSON。
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    id: PostId,
    date: DateTime<Utc>,
    caption: Option<String>,
    kind: Kind,
    user: User,
}

impl Post {
    pub(crate) fn new(
        id: PostId,
        date: DateTime<Utc>,
        caption: Option<String>,
        kind: Kind,
        user: User,
    ) -> Self {
        Self {
            id,
            date,
            caption,
            kind,
            user,
        }
    }

    /// 帖子的创建时间。
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// 发帖人附加的文字说明。
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// 帖子包装的内容。
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// 发布或转发该内容的用户。
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// 与 `kind` 对应的线上类型。
    #[must_use]
    pub fn post_type(&self) -> PostType {
        self.kind.post_type()
    }

    /// 是否为转发。
    #[must_use]
    pub fn is_repost(&self) -> bool {
        matches!(self.kind, Kind::TrackRepost(_) | Kind::PlaylistRepost(_))
    }

    /// 主要内容是否为歌曲（而非歌单）。
    #[must_use]
    pub fn is_track(&self) -> bool {
        matches!(self.kind, Kind::Track(_) | Kind::TrackRepost(_))
    }

    /// 帖子涉及的所有歌曲。
    ///
    /// 歌曲帖子返回单个元素；歌单帖子返回已加载的歌曲，未加载时返回空列表。
    #[must_use]
    pub fn tracks(&self) -> Vec<&Track> {
        match &self.kind {
            Kind::Track(track) | Kind::TrackRepost(track) => vec![track],
            Kind::Playlist(playlist) | Kind::PlaylistRepost(playlist) => {
                playlist.tracks.tracks().iter().collect()
            }
        }
    }

    /// 忽略转发区别之后的内容。
    #[must_use]
    pub fn item(&self) -> Item<'_> {
        self.kind.item()
    }

    /// 拆解帖子，取出所有权形式的内容。
    #[must_use]
    pub fn into_kind(self) -> Kind {
        self.kind
    }
}

impl Identifiable for Post {
    type Id = PostId;

    fn id(&self) -> PostId {
        self.id.clone()
    }
}
