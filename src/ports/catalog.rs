use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログポート
///
/// 書籍IDをキーとする書籍の保存先を抽象化する。
#[async_trait]
pub trait Catalog: Send + Sync {
    /// 書籍を保存する
    ///
    /// 同じIDの書籍が既にあれば上書きする（後勝ち）。
    async fn add(&self, book: Book) -> Result<()>;

    /// IDで書籍を取得する
    async fn get(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// すべての書籍を取得する
    ///
    /// 並び順は実装依存。
    async fn all(&self) -> Result<Vec<Book>>;
}
