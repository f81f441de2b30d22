//! SoundCloud 用户模型。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Identifiable;

/// 用户的数字 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 发布或转发内容的用户。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户 ID。
    pub id: UserId,
    /// 用户名（唯一的显示名）。
    pub username: String,
    /// 全名，可能为空。
    #[serde(default)]
    pub full_name: Option<String>,
    /// 个人主页链接。
    #[serde(default)]
    pub permalink_url: Option<String>,
    /// 头像链接。
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// 粉丝数。
    #[serde(default)]
    pub followers_count: Option<u64>,
}

impl Identifiable for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
