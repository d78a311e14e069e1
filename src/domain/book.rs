use serde::{Deserialize, Serialize};
use std::fmt;

use super::BookId;

/// 書籍の貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    Issued,
}

impl BookStatus {
    /// 表示用の文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

/// 書籍 - カタログに登録される1冊
///
/// `status` を変更するのは貸出・返却の遷移関数のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl Book {
    /// 新規登録（貸出可能状態）
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
        }
    }

    pub fn is_issued(&self) -> bool {
        self.status == BookStatus::Issued
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Book ID: {}, Title: {}, Author: {}, Status: {}]",
            self.id,
            self.title,
            self.author,
            self.status.as_str()
        )
    }
}
