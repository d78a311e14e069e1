#![allow(dead_code)]

use async_trait::async_trait;
use library_catalog::adapters::memory::{InMemoryActivityLog, InMemoryCatalog, InMemoryDirectory};
use library_catalog::application::lending::ServiceDependencies;
use library_catalog::domain::{Book, BookId, Member, MemberId};
use library_catalog::ports::*;
use std::sync::Arc;

/// テスト用の依存関係一式
///
/// 各アダプターへの参照も返し、テスト側から状態を確認できるようにする。
pub struct TestLibrary {
    pub catalog: Arc<InMemoryCatalog>,
    pub directory: Arc<InMemoryDirectory>,
    pub activity_log: Arc<InMemoryActivityLog>,
    pub deps: ServiceDependencies,
}

pub fn setup_library() -> TestLibrary {
    let catalog = Arc::new(InMemoryCatalog::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let activity_log = Arc::new(InMemoryActivityLog::new());

    let deps = ServiceDependencies {
        catalog: catalog.clone(),
        directory: directory.clone(),
        activity_log: activity_log.clone(),
    };

    TestLibrary {
        catalog,
        directory,
        activity_log,
        deps,
    }
}

/// 活動ログへの書き込みが常に失敗するActivityLog
pub struct FailingActivityLog;

#[async_trait]
impl ActivityLog for FailingActivityLog {
    async fn append(&self, _line: &str) -> activity_log::Result<()> {
        Err("log file is read-only".into())
    }
}

/// 読み書きが常に失敗するCatalog
pub struct FailingCatalog;

#[async_trait]
impl Catalog for FailingCatalog {
    async fn add(&self, _book: Book) -> catalog::Result<()> {
        Err("catalog offline".into())
    }

    async fn get(&self, _book_id: &BookId) -> catalog::Result<Option<Book>> {
        Err("catalog offline".into())
    }

    async fn all(&self) -> catalog::Result<Vec<Book>> {
        Err("catalog offline".into())
    }
}

/// 読み込みは委譲し、書き込みだけ常に失敗するDirectory
pub struct ReadOnlyDirectory {
    pub inner: Arc<InMemoryDirectory>,
}

#[async_trait]
impl Directory for ReadOnlyDirectory {
    async fn add(&self, _member: Member) -> directory::Result<()> {
        Err("directory is read-only".into())
    }

    async fn get(&self, member_id: &MemberId) -> directory::Result<Option<Member>> {
        self.inner.get(member_id).await
    }
}
