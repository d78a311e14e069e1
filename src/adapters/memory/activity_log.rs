use crate::ports::activity_log::{ActivityLog as ActivityLogTrait, Result};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// ActivityLogのモック実装
///
/// 追記された行をメモリに保持し、テストから確認できるようにする。
pub struct ActivityLog {
    lines: Mutex<Vec<String>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// これまでに追記された行のスナップショット
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityLogTrait for ActivityLog {
    async fn append(&self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}
