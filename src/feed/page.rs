//! 分页响应。
//!
//! SoundCloud 的列表接口统一返回 `{"collection": [...], "next_href": "..."}`。
//! 每条记录独立解码，失败的记录只会被跳过，不会影响同一页中的其它记录。

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{FeedError, Result},
    feed::fields::{into_record, take_optional, take_required},
};

/// 一页解码结果。
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    next_href: Option<String>,
    skipped: usize,
}

impl<T: Send> Page<T> {
    /// 解码分页外壳，并用 `decode` 并行解码其中的每一条记录。
    ///
    /// 结果保持原始顺序。失败的记录按错误类别分别记录日志，并计入 `skipped`。
    pub(crate) fn decode_with<F>(raw: Value, log_prefix: &str, decode: F) -> Result<Self>
    where
        F: Fn(Value) -> Result<T> + Send + Sync,
    {
        let mut envelope = into_record(raw, "page")?;
        let records: Vec<Value> = take_required(&mut envelope, "collection")?;
        let next_href: Option<String> = take_optional(&mut envelope, "next_href")?;

        let total = records.len();
        let results: Vec<Result<T>> = records.into_par_iter().map(&decode).collect();

        let mut items = Vec::with_capacity(total);
        let mut skipped = 0;
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(item) => items.push(item),
                Err(FeedError::UnrecognizedKind(kind)) => {
                    skipped += 1;
                    warn!("{log_prefix} 跳过第 {index} 条记录：未知的帖子类型 '{kind}'");
                }
                Err(e) => {
                    skipped += 1;
                    warn!("{log_prefix} 跳过第 {index} 条记录：数据损坏: {e}");
                }
            }
        }

        debug!(
            "{log_prefix} 本页共 {} 条记录，成功 {} 条，跳过 {} 条",
            total,
            items.len(),
            skipped
        );

        Ok(Self {
            items,
            next_href,
            skipped,
        })
    }
}

impl<T> Page<T> {
    /// 成功解码的记录，顺序与响应中的一致。
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// 取出成功解码的记录。
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 下一页的链接。
    #[must_use]
    pub fn next_href(&self) -> Option<&str> {
        self.next_href.as_deref()
    }

    /// 是否还有下一页。
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_href.is_some()
    }

    /// 因解码失败而被跳过的记录数。
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 成功解码的记录数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 本页是否没有任何成功解码的记录。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
