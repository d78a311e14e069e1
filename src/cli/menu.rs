/// メニュー表示
pub const MENU: &str = "\n========= LIBRARY MENU =========\n\
1. Add Book\n\
2. Add Member\n\
3. Issue Book\n\
4. Return Book\n\
5. Show Inventory\n\
6. Exit\n\
Choose: ";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    ShowInventory,
    Exit,
}

/// 選択肢として受け付けられない入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoice {
    /// 数値ではない
    NotANumber,
    /// 数値だが範囲外
    OutOfRange,
}

impl InvalidChoice {
    pub fn message(&self) -> &'static str {
        match self {
            InvalidChoice::NotANumber => "Invalid choice!",
            InvalidChoice::OutOfRange => "Invalid option.",
        }
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s.trim().parse().map_err(|_| InvalidChoice::NotANumber)?;

        match number {
            1 => Ok(MenuChoice::AddBook),
            2 => Ok(MenuChoice::AddMember),
            3 => Ok(MenuChoice::IssueBook),
            4 => Ok(MenuChoice::ReturnBook),
            5 => Ok(MenuChoice::ShowInventory),
            6 => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice::OutOfRange),
        }
    }
}
