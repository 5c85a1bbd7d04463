//! # Discover Logs Use Case
//!
//! 入力パターン群を重複のないログファイル一覧にまとめる

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;
use log::{info, warn};

use crate::domain::repositories::log_repository::LogRepository;

/// ログファイル発見ユースケース
pub struct DiscoverLogsUseCase<R: LogRepository> {
    log_repository: Arc<R>,
}

impl<R: LogRepository> DiscoverLogsUseCase<R> {
    pub fn new(log_repository: Arc<R>) -> Self {
        Self { log_repository }
    }

    /// 全パターンを展開し、ソート・重複除去した一覧を返す
    ///
    /// 何にも一致しないパターンは警告のみで続行する。
    /// 不正なパターンがあればその時点でエラー
    pub fn execute(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let mut log_files = Vec::new();

        for pattern in patterns {
            let found = self.log_repository.discover_log_files(pattern)?;
            if found.is_empty() {
                warn!("No log files matched {}", pattern);
            }
            log_files.extend(found);
        }

        log_files.sort();
        log_files.dedup();

        info!(
            "Found {} log files from {} pattern(s)",
            log_files.len(),
            patterns.len()
        );

        Ok(log_files)
    }
}
