//! 动态流模块
//!
//! 包含帖子实体、帖子解码器、播放历史以及分页响应的解码。

pub mod decoder;
mod fields;
pub mod history;
pub mod page;
pub mod post;

use crate::{
    config::DecoderConfig,
    feed::{decoder::PostDecoder, history::HistoryDecoder},
};

/// 按配置组合好的帖子解码器和播放历史解码器。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedDecoder {
    posts: PostDecoder,
    history: HistoryDecoder,
}

impl FeedDecoder {
    /// 根据配置创建解码器。
    #[must_use]
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            posts: PostDecoder::new(config.post_timestamp),
            history: HistoryDecoder::new(config.history_timestamp),
        }
    }

    /// 动态流 (`/stream`) 的帖子解码器。
    #[must_use]
    pub fn posts(&self) -> &PostDecoder {
        &self.posts
    }

    /// 播放历史 (`/me/play-history`) 的解码器。
    #[must_use]
    pub fn history(&self) -> &HistoryDecoder {
        &self.history
    }
}
