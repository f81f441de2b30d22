//! 数据模型模块
//!
//! 包含动态流中引用的外部实体（歌曲、用户、歌单）以及时间戳解析。

pub mod playlist;
pub mod timestamp;
pub mod track;
pub mod user;

use std::hash::Hash;

/// 拥有稳定标识的实体。
///
/// 同一个实体多次解码得到的 `id` 必须相等，并且可以作为 `HashMap` 的键使用。
pub trait Identifiable {
    /// 标识的类型。
    type Id: Clone + Eq + Hash;

    /// 返回实体的标识。
    fn id(&self) -> Self::Id;
}
