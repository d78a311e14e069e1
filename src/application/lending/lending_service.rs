use crate::domain::{
    self, Book, BookId, BookIssued, BookReturned, IssueBookError, Member, MemberId,
    ReturnBookError, commands::*,
};
use crate::ports::*;
use std::sync::Arc;

use super::activity::{Recorded, record};
use super::errors::{LendingError, MissingRecord, Result};

/// サービスの依存関係
///
/// データ構造として定義し、振る舞いは持たない。
/// 各操作は純粋な関数として依存関係を引数で受け取る。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<dyn Catalog>,
    pub directory: Arc<dyn Directory>,
    pub activity_log: Arc<dyn ActivityLog>,
}

/// カタログから書籍を取得するヘルパー関数
///
/// # エラー
/// - CatalogError: 読み込み失敗
/// - NotFound: 書籍が存在しない
async fn load_book(catalog: &Arc<dyn Catalog>, book_id: &BookId) -> Result<Book> {
    catalog
        .get(book_id)
        .await
        .map_err(LendingError::CatalogError)?
        .ok_or_else(|| LendingError::NotFound(MissingRecord::Book(book_id.clone())))
}

/// 会員名簿から会員を取得するヘルパー関数
///
/// # エラー
/// - DirectoryError: 読み込み失敗
/// - NotFound: 会員が存在しない
async fn load_member(
    directory: &Arc<dyn Directory>,
    member_id: &MemberId,
) -> Result<Member> {
    directory
        .get(member_id)
        .await
        .map_err(LendingError::DirectoryError)?
        .ok_or_else(|| LendingError::NotFound(MissingRecord::Member(member_id.clone())))
}

/// 更新後の書籍と会員を保存するヘルパー関数
///
/// 書籍を先に保存する。Directoryの保存に失敗した場合は遷移前の書籍を書き戻し、
/// 失敗した操作が状態を変えないようにする。
async fn save(
    deps: &ServiceDependencies,
    previous: Book,
    book: Book,
    member: Member,
) -> Result<()> {
    deps.catalog
        .add(book)
        .await
        .map_err(LendingError::CatalogError)?;

    if let Err(e) = deps.directory.add(member).await {
        if let Err(rollback) = deps.catalog.add(previous).await {
            tracing::error!(error = %rollback, "Failed to restore book after directory error");
        }
        return Err(LendingError::DirectoryError(e));
    }

    Ok(())
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること（先に確認）
/// - 会員が存在すること
/// - 書籍が貸出可能であること
///
/// 失敗時は状態を一切変更しない。
/// 成功時は活動ログに `Issued Book: <book> to Member <member>` を書き込む。
pub async fn issue_book(
    deps: &ServiceDependencies,
    cmd: IssueBook,
) -> Result<Recorded<BookIssued>> {
    // 1. 書籍・会員の存在確認
    let book = load_book(&deps.catalog, &cmd.book_id).await?;
    let previous = book.clone();
    let member = load_member(&deps.directory, &cmd.member_id).await?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (book, member, event) =
        domain::lending::issue_book(book, member, cmd.issued_at).map_err(|e| match e {
            IssueBookError::AlreadyIssued => LendingError::AlreadyIssued(cmd.book_id.clone()),
        })?;

    // 3. 保存
    save(deps, previous, book, member).await?;

    tracing::info!(
        book_id = %event.book_id,
        member_id = %event.member_id,
        "Book issued"
    );

    // 4. 活動ログ
    Ok(record(&deps.activity_log, event).await)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在すること（先に確認）
/// - 会員が存在すること
/// - 書籍が貸出中であること
/// - 返却する会員が借りた本人かは確認しない
/// - 延滞料金は 延滞日数 × 2（日数の検証なし）
///
/// 延滞料金は返り値のイベントに含まれる。
pub async fn return_book(
    deps: &ServiceDependencies,
    cmd: ReturnBook,
) -> Result<Recorded<BookReturned>> {
    // 1. 書籍・会員の存在確認
    let book = load_book(&deps.catalog, &cmd.book_id).await?;
    let previous = book.clone();
    let member = load_member(&deps.directory, &cmd.member_id).await?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (book, member, event) =
        domain::lending::return_book(book, member, cmd.late_days, cmd.returned_at).map_err(
            |e| match e {
                ReturnBookError::NotIssued => LendingError::NotIssued(cmd.book_id.clone()),
            },
        )?;

    // 3. 保存
    save(deps, previous, book, member).await?;

    tracing::info!(
        book_id = %event.book_id,
        member_id = %event.member_id,
        late_fee = event.late_fee.value(),
        "Book returned"
    );

    // 4. 活動ログ
    Ok(record(&deps.activity_log, event).await)
}
