use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 活動ログポート
///
/// 更新操作ごとに1行を追記する監査ログ。
/// 書き込みはベストエフォートで、失敗しても呼び出し元の操作は成功扱いとなる。
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// 1行を追記する
    ///
    /// 行は操作が完了した順に追記される。
    async fn append(&self, line: &str) -> Result<()>;
}
