use crate::application::lending::LendingError;

/// エラーが起きた操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    ShowInventory,
}

/// CLI層のエラー型
///
/// アプリケーション層のエラーをラップし、画面に表示するメッセージへのマッピングを提供する。
/// 同じエラーでも操作によって表示が異なる（返却時の不在は書籍・会員を区別しない）。
#[derive(Debug)]
pub struct CliError {
    operation: Operation,
    error: LendingError,
}

impl CliError {
    pub fn new(operation: Operation, error: LendingError) -> Self {
        Self { operation, error }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// 利用者の入力に起因するエラーか（保存先の障害ではないか）
    pub fn is_recoverable(&self) -> bool {
        self.error.is_recoverable()
    }

    /// 画面に表示するメッセージ
    pub fn message(&self) -> &'static str {
        use crate::application::lending::MissingRecord;

        match (&self.error, self.operation) {
            // 利用者の入力に起因するエラー
            (LendingError::NotFound(_), Operation::ReturnBook) => "Invalid Book/Member.",
            (LendingError::NotFound(MissingRecord::Book(_)), _) => "Book not found.",
            (LendingError::NotFound(MissingRecord::Member(_)), _) => "Member not found.",
            (LendingError::AlreadyIssued(_), _) => "Book already issued.",
            (LendingError::NotIssued(_), _) => "Book was not issued.",

            // 保存先の障害（詳細は画面に出さない）
            (LendingError::CatalogError(_), _) => "Catalog is unavailable. Please try again.",
            (LendingError::DirectoryError(_), _) => {
                "Member directory is unavailable. Please try again."
            }
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} failed: {}", self.operation, self.error)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
