#![warn(missing_docs)]

//! # SoundCloud Feed RS
//!
//! 一个 Rust 库，用于将 SoundCloud 动态流和播放历史的 JSON 响应解码为强类型的数据模型。
//!
//! ## 主要功能
//!
//! - **帖子解码**: 根据 `type` 字段将记录解码为封闭的 [`Kind`] 枚举
//!   (`track`, `track-repost`, `playlist`, `playlist-repost`)，未知类型直接报错。
//! - **派生视图**: [`Post::is_repost`], [`Post::is_track`], [`Post::tracks`], [`Post::item`]。
//! - **部分加载的歌单**: 歌单的歌曲列表可能未内联，统一视为空列表。
//! - **播放历史**: 解码 `/me/play-history` 的条目。
//! - **分页**: 解码 `{"collection": [...], "next_href": ...}`，跳过并记录损坏的记录。
//!
//! ## 解码帖子
//!
//! ```rust
//! use soundcloud_feed_rs::{FeedDecoder, FeedError, Item};
//!
//! let json = r#"{
//!     "uuid": "soundcloud:reposts:1",
//!     "created_at": "2020-11-10T12:00:00Z",
//!     "type": "track-repost",
//!     "user": { "id": 1, "username": "friend" },
//!     "track": { "id": 42, "title": "Nuage", "duration": 180000 }
//! }"#;
//!
//! let decoder = FeedDecoder::default();
//! let post = decoder.posts().decode_str(json).unwrap();
//!
//! assert!(post.is_repost());
//! assert!(post.is_track());
//! match post.item() {
//!     Item::Track(track) => assert_eq!(track.title, "Nuage"),
//!     Item::Playlist(_) => unreachable!(),
//! }
//!
//! let unknown = json.replace("track-repost", "story");
//! match decoder.posts().decode_str(&unknown) {
//!     Err(FeedError::UnrecognizedKind(kind)) => assert_eq!(kind, "story"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
pub mod config;
pub mod error;
pub mod feed;
pub mod model;

pub use crate::{
    config::DecoderConfig,
    error::{FeedError, Result},
    feed::{
        FeedDecoder,
        decoder::{PostDecoder, PostType},
        history::{HistoryDecoder, HistoryItem},
        page::Page,
        post::{Item, Kind, OwnedItem, Post, PostId},
    },
    model::{
        Identifiable,
        playlist::{Playlist, PlaylistId, TrackCollection},
        timestamp::TimestampFormat,
        track::{Track, TrackId},
        user::{User, UserId},
    },
};
