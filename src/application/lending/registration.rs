use crate::domain::{self, Book, BookAdded, MemberAdded, commands::*};

use super::activity::{Recorded, record};
use super::errors::{LendingError, Result};
use super::lending_service::ServiceDependencies;

/// 書籍を登録する
///
/// 同じIDの書籍があれば上書きする（後勝ち、エラーにしない）。
/// 上書きされた書籍は貸出可能状態に戻る。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<Recorded<BookAdded>> {
    let (book, event) = domain::lending::add_book(cmd);

    deps.catalog
        .add(book)
        .await
        .map_err(LendingError::CatalogError)?;

    tracing::info!(book_id = %event.book_id, "Book added");

    Ok(record(&deps.activity_log, event).await)
}

/// 会員を登録する
///
/// 同じIDの会員があれば上書きする（後勝ち、エラーにしない）。
pub async fn add_member(
    deps: &ServiceDependencies,
    cmd: AddMember,
) -> Result<Recorded<MemberAdded>> {
    let (member, event) = domain::lending::add_member(cmd);

    deps.directory
        .add(member)
        .await
        .map_err(LendingError::DirectoryError)?;

    tracing::info!(member_id = %event.member_id, "Member added");

    Ok(record(&deps.activity_log, event).await)
}

/// 在庫一覧を取得する
///
/// 並び順はCatalog実装に従う。
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.catalog.all().await.map_err(LendingError::CatalogError)
}
