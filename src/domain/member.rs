use serde::{Deserialize, Serialize};

use super::{BookId, MemberId};

/// 会員 - 現在借りている書籍IDの一覧を持つ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// 貸出順に並ぶ
    pub borrowed: Vec<BookId>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    /// 借りている書籍に追加する
    pub fn borrow(mut self, book_id: BookId) -> Self {
        self.borrowed.push(book_id);
        self
    }

    /// 借りている書籍から最初に一致した1件を取り除く
    ///
    /// 一覧にない場合は何もしない。
    pub fn give_back(mut self, book_id: &BookId) -> Self {
        if let Some(pos) = self.borrowed.iter().position(|id| id == book_id) {
            self.borrowed.remove(pos);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_has_no_books() {
        let member = Member::new(MemberId::new("M1"), "Alice");
        assert!(member.borrowed.is_empty());
        assert_eq!(member.name, "Alice");
    }

    #[test]
    fn test_borrow_preserves_order() {
        let member = Member::new(MemberId::new("M1"), "Alice")
            .borrow(BookId::new("B2"))
            .borrow(BookId::new("B1"));
        assert_eq!(member.borrowed, vec![BookId::new("B2"), BookId::new("B1")]);
    }

    #[test]
    fn test_give_back_removes_only_first_match() {
        let member = Member::new(MemberId::new("M1"), "Alice")
            .borrow(BookId::new("B1"))
            .borrow(BookId::new("B2"))
            .borrow(BookId::new("B1"));

        let member = member.give_back(&BookId::new("B1"));

        assert_eq!(member.borrowed, vec![BookId::new("B2"), BookId::new("B1")]);
    }

    #[test]
    fn test_give_back_absent_id_is_noop() {
        let member = Member::new(MemberId::new("M1"), "Alice").borrow(BookId::new("B1"));

        let member = member.give_back(&BookId::new("B9"));

        assert_eq!(member.borrowed, vec![BookId::new("B1")]);
    }
}
