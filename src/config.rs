use std::path::PathBuf;

/// 活動ログのパスを指定する環境変数
pub const LOG_PATH_ENV: &str = "LIBRARY_LOG_PATH";

/// 活動ログの既定パス（作業ディレクトリからの相対パス）
pub const DEFAULT_LOG_PATH: &str = "library_log.txt";

/// 実行時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: PathBuf,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定または空文字の場合は既定値を使う。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup(LOG_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());

        Self {
            log_path: PathBuf::from(log_path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}
