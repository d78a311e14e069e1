use crate::domain::{BookId, MemberId};
use std::fmt;
use thiserror::Error;

/// 見つからなかったレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingRecord {
    Book(BookId),
    Member(MemberId),
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRecord::Book(id) => write!(f, "Book {}", id),
            MissingRecord::Member(id) => write!(f, "Member {}", id),
        }
    }
}

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LendingError {
    /// 書籍または会員が存在しない
    #[error("{0} not found")]
    NotFound(MissingRecord),

    /// 書籍が既に貸出中
    #[error("Book {0} is already issued")]
    AlreadyIssued(BookId),

    /// 書籍が貸出されていない
    #[error("Book {0} is not issued")]
    NotIssued(BookId),

    /// Catalogのエラー
    #[error("Catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Directoryのエラー
    #[error("Directory error")]
    DirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LendingError {
    /// 書籍・会員の不在、貸出状態の不一致など、利用者の入力に起因するエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LendingError::NotFound(_) | LendingError::AlreadyIssued(_) | LendingError::NotIssued(_)
        )
    }
}

/// 活動ログに書き込めなかった
///
/// 操作自体は成功しているため、エラーとしては伝播させない。
#[derive(Debug, Error)]
#[error("Activity log unavailable")]
pub struct LogUnavailable(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
