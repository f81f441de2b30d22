//! 帖子解码器。
//!
//! 线上的帖子是一个扁平的 JSON 对象，由 `type` 字段决定 `track` 和 `playlist`
//! 两个字段中的哪一个有效。解码流程：
//!
//! 1. 无条件解码所有变体共有的字段 (`uuid`, `created_at`, `caption`, `user`)；
//! 2. 读取 `type`，与四个已知值逐字（区分大小写）比较；
//! 3. 只解码该变体需要的子对象；
//! 4. 构造不可变的 [`Post`]。
//!
//! 未知的 `type` 返回 [`FeedError::UnrecognizedKind`]，绝不回退到某个默认变体。

use std::str::FromStr;

use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::trace;

use crate::{
    error::{FeedError, Result},
    feed::{
        fields::{into_record, take_optional, take_required, take_value},
        page::Page,
        post::{Kind, Post, PostId},
    },
    model::{timestamp::TimestampFormat, user::User},
};

/// 帖子的线上类型，即 `type` 字段的取值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PostType {
    /// `track`
    Track,
    /// `track-repost`
    TrackRepost,
    /// `playlist`
    Playlist,
    /// `playlist-repost`
    PlaylistRepost,
}

impl PostType {
    /// 该类型需要解码的子对象字段名。
    #[must_use]
    pub fn payload_field(self) -> &'static str {
        match self {
            Self::Track | Self::TrackRepost => "track",
            Self::Playlist | Self::PlaylistRepost => "playlist",
        }
    }
}

/// 将 SoundCloud 动态流记录解码为 [`Post`]。
///
/// 解码器本身不持有任何可变状态，可以在多个线程间共享。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostDecoder {
    timestamp_format: TimestampFormat,
}

impl PostDecoder {
    /// 创建一个使用指定时间戳格式解析 `created_at` 的解码器。
    #[must_use]
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    /// 解析 `created_at` 使用的格式。
    #[must_use]
    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format
    }

    /// 解码单条记录。
    ///
    /// # 参数
    /// * `raw` - 一条帖子记录，解码后即被丢弃。
    ///
    /// # 返回
    /// 成功时返回完整的 `Post`；否则返回结构错误或 [`FeedError::UnrecognizedKind`]，
    /// 不会产生任何部分构造的结果。
    pub fn decode(&self, raw: Value) -> Result<Post> {
        let mut record = into_record(raw, "post")?;

        let id: String = take_required(&mut record, "uuid")?;
        let created_at = take_value(&mut record, "created_at")?;
        let date = self.timestamp_format.parse("created_at", &created_at)?;
        let caption: Option<String> = take_optional(&mut record, "caption")?;
        let user: User = take_required(&mut record, "user")?;

        let type_name: String = take_required(&mut record, "type")?;
        let post_type =
            PostType::from_str(&type_name).map_err(|_| FeedError::UnrecognizedKind(type_name))?;

        let field = post_type.payload_field();
        let kind = match post_type {
            PostType::Track => Kind::Track(take_required(&mut record, field)?),
            PostType::TrackRepost => Kind::TrackRepost(take_required(&mut record, field)?),
            PostType::Playlist => Kind::Playlist(take_required(&mut record, field)?),
            PostType::PlaylistRepost => Kind::PlaylistRepost(take_required(&mut record, field)?),
        };

        trace!("[Feed] 已解码帖子 {} ({})", id, post_type);

        Ok(Post::new(PostId::from(id), date, caption, kind, user))
    }

    /// 从 JSON 文本解码单条记录。
    pub fn decode_str(&self, json: &str) -> Result<Post> {
        self.decode(serde_json::from_str(json)?)
    }

    /// 从 JSON 字节解码单条记录。
    pub fn decode_slice(&self, json: &[u8]) -> Result<Post> {
        self.decode(serde_json::from_slice(json)?)
    }

    /// 解码一页动态流 (`{"collection": [...], "next_href": ...}`)。
    ///
    /// 单条记录解码失败时会被记录日志并跳过，不会影响整页；
    /// 只有分页外壳本身的结构错误才会返回 `Err`。
    pub fn decode_page(&self, raw: Value) -> Result<Page<Post>> {
        Page::decode_with(raw, "[Feed]", |record| self.decode(record))
    }

    /// 从 JSON 文本解码一页动态流。
    pub fn decode_page_str(&self, json: &str) -> Result<Page<Post>> {
        self.decode_page(serde_json::from_str(json)?)
    }
}
