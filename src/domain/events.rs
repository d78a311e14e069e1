use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BookId, LateDays, LateFee, MemberId};

/// イベント：書籍が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub added_at: DateTime<Utc>,
}

/// イベント：会員が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAdded {
    pub member_id: MemberId,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIssued {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issued_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub late_days: LateDays,
    pub late_fee: LateFee,
    pub returned_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    BookAdded(BookAdded),
    MemberAdded(MemberAdded),
    BookIssued(BookIssued),
    BookReturned(BookReturned),
}

/// 活動ログの1行
///
/// 形式: `<Action>: <entity ids> [| Late Fee: <amount>]`
impl fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainEvent::BookAdded(e) => write!(f, "Added Book: {}", e.book_id),
            DomainEvent::MemberAdded(e) => write!(f, "Added Member: {}", e.member_id),
            DomainEvent::BookIssued(e) => {
                write!(f, "Issued Book: {} to Member {}", e.book_id, e.member_id)
            }
            DomainEvent::BookReturned(e) => write!(
                f,
                "Returned Book: {} by Member {} | Late Fee: {}",
                e.book_id, e.member_id, e.late_fee
            ),
        }
    }
}

impl From<BookAdded> for DomainEvent {
    fn from(event: BookAdded) -> Self {
        DomainEvent::BookAdded(event)
    }
}

impl From<MemberAdded> for DomainEvent {
    fn from(event: MemberAdded) -> Self {
        DomainEvent::MemberAdded(event)
    }
}

impl From<BookIssued> for DomainEvent {
    fn from(event: BookIssued) -> Self {
        DomainEvent::BookIssued(event)
    }
}

impl From<BookReturned> for DomainEvent {
    fn from(event: BookReturned) -> Self {
        DomainEvent::BookReturned(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_book_added() {
        let event = DomainEvent::from(BookAdded {
            book_id: BookId::new("B1"),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            added_at: Utc::now(),
        });
        assert_eq!(event.to_string(), "Added Book: B1");
    }

    #[test]
    fn test_log_line_member_added() {
        let event = DomainEvent::from(MemberAdded {
            member_id: MemberId::new("M1"),
            name: "Alice".to_string(),
            added_at: Utc::now(),
        });
        assert_eq!(event.to_string(), "Added Member: M1");
    }

    #[test]
    fn test_log_line_book_issued() {
        let event = DomainEvent::from(BookIssued {
            book_id: BookId::new("B1"),
            member_id: MemberId::new("M1"),
            issued_at: Utc::now(),
        });
        assert_eq!(event.to_string(), "Issued Book: B1 to Member M1");
    }

    #[test]
    fn test_log_line_book_returned_includes_fee() {
        let event = DomainEvent::from(BookReturned {
            book_id: BookId::new("B1"),
            member_id: MemberId::new("M1"),
            late_days: LateDays::new(3),
            late_fee: LateFee::for_late_days(LateDays::new(3)),
            returned_at: Utc::now(),
        });
        assert_eq!(
            event.to_string(),
            "Returned Book: B1 by Member M1 | Late Fee: ₹6"
        );
    }
}
