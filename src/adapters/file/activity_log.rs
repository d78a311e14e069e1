use crate::ports::activity_log::{ActivityLog as ActivityLogTrait, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// ActivityLogのテキストファイル実装
///
/// 1行ずつファイルに追記する。ファイルは最初の書き込みで作成される。
/// 追記のたびにファイルを開き直すため、後から書き込み可能になったログにも
/// 再起動せずに書き込める。
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ActivityLogTrait for ActivityLog {
    async fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "Appended activity log line");
        Ok(())
    }
}
