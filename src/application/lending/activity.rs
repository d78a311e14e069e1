use crate::domain::DomainEvent;
use crate::ports::ActivityLog;
use std::sync::Arc;

use super::errors::LogUnavailable;

/// 更新操作の結果
///
/// 発行されたイベントと、活動ログへの書き込み結果を持つ。
#[derive(Debug)]
pub struct Recorded<E> {
    pub event: E,
    pub log_failure: Option<LogUnavailable>,
}

impl<E> Recorded<E> {
    pub fn is_logged(&self) -> bool {
        self.log_failure.is_none()
    }
}

/// イベントを活動ログに1行として書き込む
///
/// 書き込みに失敗しても操作は成功のまま返し、失敗は `log_failure` に残す。
pub(super) async fn record<E>(activity_log: &Arc<dyn ActivityLog>, event: E) -> Recorded<E>
where
    E: Clone,
    DomainEvent: From<E>,
{
    let line = DomainEvent::from(event.clone()).to_string();

    match activity_log.append(&line).await {
        Ok(()) => Recorded {
            event,
            log_failure: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, line = %line, "Unable to write activity log");
            Recorded {
                event,
                log_failure: Some(LogUnavailable(e)),
            }
        }
    }
}
