use crate::application::lending::{
    Recorded, ServiceDependencies, add_book as execute_add_book,
    add_member as execute_add_member, issue_book as execute_issue_book, list_books,
    return_book as execute_return_book,
};
use crate::domain::{BookId, LateDays, MemberId, commands::*};
use chrono::Utc;
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{
    console::Console,
    error::{CliError, Operation},
    menu::MenuChoice,
};

/// 1コマンド処理後にループを続けるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// 活動ログへの書き込みに失敗したときの表示
pub const LOG_UNAVAILABLE_NOTICE: &str = "Unable to write log.";

/// 在庫がないときの表示
pub const EMPTY_INVENTORY: &str = "Library has no books yet.";

/// プロンプトを順に表示して値を読む
///
/// 入力が途中で終わった場合は `return Ok(Flow::Exit)` する。
macro_rules! read_or_exit {
    ($console:expr, $label:expr) => {
        match $console.prompt($label).await? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

// ============================================================================
// Dispatch
// ============================================================================

/// 選択肢に対応するハンドラーを呼び出す
pub async fn dispatch<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
    choice: MenuChoice,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match choice {
        MenuChoice::AddBook => add_book(console, deps).await,
        MenuChoice::AddMember => add_member(console, deps).await,
        MenuChoice::IssueBook => issue_book(console, deps).await,
        MenuChoice::ReturnBook => return_book(console, deps).await,
        MenuChoice::ShowInventory => show_inventory(console, deps).await,
        MenuChoice::Exit => Ok(Flow::Exit),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// 1. Add Book - Book ID, Title, Author の順に入力
pub async fn add_book<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let book_id = read_or_exit!(console, "Book ID");
    let title = read_or_exit!(console, "Title");
    let author = read_or_exit!(console, "Author");

    let cmd = AddBook {
        book_id: BookId::new(book_id),
        title,
        author,
        added_at: Utc::now(),
    };

    match execute_add_book(deps, cmd).await {
        Ok(recorded) => {
            console.say("Book added.").await?;
            report_log_status(console, &recorded).await?;
        }
        Err(e) => report_error(console, CliError::new(Operation::AddBook, e)).await?,
    }

    Ok(Flow::Continue)
}

/// 2. Add Member - Member ID, Name の順に入力
pub async fn add_member<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let member_id = read_or_exit!(console, "Member ID");
    let name = read_or_exit!(console, "Name");

    let cmd = AddMember {
        member_id: MemberId::new(member_id),
        name,
        added_at: Utc::now(),
    };

    match execute_add_member(deps, cmd).await {
        Ok(recorded) => {
            console.say("Member added.").await?;
            report_log_status(console, &recorded).await?;
        }
        Err(e) => report_error(console, CliError::new(Operation::AddMember, e)).await?,
    }

    Ok(Flow::Continue)
}

/// 3. Issue Book - Book ID, Member ID の順に入力
pub async fn issue_book<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let book_id = read_or_exit!(console, "Book ID");
    let member_id = read_or_exit!(console, "Member ID");

    let cmd = IssueBook {
        book_id: BookId::new(book_id),
        member_id: MemberId::new(member_id),
        issued_at: Utc::now(),
    };

    match execute_issue_book(deps, cmd).await {
        Ok(recorded) => {
            console.say("Book Issued.").await?;
            report_log_status(console, &recorded).await?;
        }
        Err(e) => report_error(console, CliError::new(Operation::IssueBook, e)).await?,
    }

    Ok(Flow::Continue)
}

/// 4. Return Book - Book ID, Member ID, Days Late の順に入力
///
/// Days Late が整数でない場合は返却を中止してメニューに戻る。
pub async fn return_book<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let book_id = read_or_exit!(console, "Book ID");
    let member_id = read_or_exit!(console, "Member ID");
    let late_days = read_or_exit!(console, "Days Late");

    let Ok(late_days) = late_days.trim().parse::<i32>() else {
        console.say("Invalid number!").await?;
        return Ok(Flow::Continue);
    };

    let cmd = ReturnBook {
        book_id: BookId::new(book_id),
        member_id: MemberId::new(member_id),
        late_days: LateDays::new(late_days),
        returned_at: Utc::now(),
    };

    match execute_return_book(deps, cmd).await {
        Ok(recorded) => {
            console
                .say(&format!("Book returned. Late Fee: {}", recorded.event.late_fee))
                .await?;
            report_log_status(console, &recorded).await?;
        }
        Err(e) => report_error(console, CliError::new(Operation::ReturnBook, e)).await?,
    }

    Ok(Flow::Continue)
}

/// 5. Show Inventory - 全書籍を1行ずつ表示
pub async fn show_inventory<R, W>(
    console: &mut Console<R, W>,
    deps: &ServiceDependencies,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match list_books(deps).await {
        Ok(books) if books.is_empty() => console.say(EMPTY_INVENTORY).await?,
        Ok(books) => {
            for book in books {
                console.say(&book.to_string()).await?;
            }
        }
        Err(e) => report_error(console, CliError::new(Operation::ShowInventory, e)).await?,
    }

    Ok(Flow::Continue)
}

// ============================================================================
// Helpers
// ============================================================================

async fn report_log_status<R, W, E>(
    console: &mut Console<R, W>,
    recorded: &Recorded<E>,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if recorded.is_logged() {
        return Ok(());
    }
    console.say(LOG_UNAVAILABLE_NOTICE).await
}

async fn report_error<R, W>(console: &mut Console<R, W>, err: CliError) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // 保存先の障害は詳細をログに記録し、画面には一般的なメッセージのみを表示する
    if err.is_recoverable() {
        tracing::debug!(operation = ?err.operation(), error = %err, "Command rejected");
    } else {
        let cause = std::error::Error::source(&err)
            .and_then(std::error::Error::source)
            .map(ToString::to_string);
        tracing::error!(
            operation = ?err.operation(),
            error = %err,
            cause = ?cause,
            "Command failed"
        );
    }
    console.say(err.message()).await
}
