use chrono::{DateTime, Utc};

use super::{
    Book, BookAdded, BookIssued, BookReturned, BookStatus, IssueBookError, LateDays, LateFee,
    Member, MemberAdded, ReturnBookError,
    commands::{AddBook, AddMember},
};

// ============================================================================
// 登録
// ============================================================================

/// 純粋関数：書籍を登録する
///
/// 新しい書籍は常に貸出可能状態で作られる。
/// 同じIDの既存書籍があるかどうかはここでは判断しない（上書きは保存側の責務）。
pub fn add_book(cmd: AddBook) -> (Book, BookAdded) {
    let book = Book::new(cmd.book_id.clone(), cmd.title.clone(), cmd.author.clone());

    let event = BookAdded {
        book_id: cmd.book_id,
        title: cmd.title,
        author: cmd.author,
        added_at: cmd.added_at,
    };

    (book, event)
}

/// 純粋関数：会員を登録する
pub fn add_member(cmd: AddMember) -> (Member, MemberAdded) {
    let member = Member::new(cmd.member_id.clone(), cmd.name.clone());

    let event = MemberAdded {
        member_id: cmd.member_id,
        name: cmd.name,
        added_at: cmd.added_at,
    };

    (member, event)
}

// ============================================================================
// 状態遷移: Available <-> Issued
// ============================================================================

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出可能状態の書籍のみ貸し出せる
/// - 会員の貸出一覧に書籍IDが1件追加される
///
/// 副作用なし。更新後の書籍・会員とイベントを返す。
pub fn issue_book(
    book: Book,
    member: Member,
    issued_at: DateTime<Utc>,
) -> Result<(Book, Member, BookIssued), IssueBookError> {
    if book.is_issued() {
        return Err(IssueBookError::AlreadyIssued);
    }

    let event = BookIssued {
        book_id: book.id.clone(),
        member_id: member.id.clone(),
        issued_at,
    };

    let member = member.borrow(book.id.clone());
    let book = Book {
        status: BookStatus::Issued,
        ..book
    };

    Ok((book, member, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 貸出中の書籍のみ返却できる
/// - 返却する会員が借りた本人かは確認しない
/// - 会員の貸出一覧に書籍IDがなくてもエラーにしない
/// - 延滞料金は 延滞日数 × 2（負の日数も検証しない）
///
/// 副作用なし。更新後の書籍・会員とイベントを返す。
pub fn return_book(
    book: Book,
    member: Member,
    late_days: LateDays,
    returned_at: DateTime<Utc>,
) -> Result<(Book, Member, BookReturned), ReturnBookError> {
    if !book.is_issued() {
        return Err(ReturnBookError::NotIssued);
    }

    let event = BookReturned {
        book_id: book.id.clone(),
        member_id: member.id.clone(),
        late_days,
        late_fee: LateFee::for_late_days(late_days),
        returned_at,
    };

    let member = member.give_back(&book.id);
    let book = Book {
        status: BookStatus::Available,
        ..book
    };

    Ok((book, member, event))
}
