//! File Log Repository Implementation
//!
//! LogRepositoryのファイルシステム実装（globパターン・ディレクトリ走査）

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::log_repository::LogRepository;

/// ファイルシステムベースのログリポジトリ
pub struct FileLogRepository {
    /// ディレクトリ走査時に対象とする拡張子
    input_extension: String,
}

impl FileLogRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `input_extension` - ディレクトリ指定時に拾う拡張子（例: `log`）
    pub fn new(input_extension: impl Into<String>) -> Self {
        Self {
            input_extension: input_extension.into(),
        }
    }

    fn has_input_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.input_extension))
    }

    /// ディレクトリ配下のログファイルを再帰的に探す
    fn walk_directory(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && self.has_input_extension(path))
            .collect()
    }
}

impl LogRepository for FileLogRepository {
    fn discover_log_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let expanded = shellexpand::tilde(pattern);
        let expanded = expanded.as_ref();

        if Path::new(expanded).is_dir() {
            debug!("Walking directory {}", expanded);
            return Ok(self.walk_directory(Path::new(expanded)));
        }

        let paths = glob::glob(expanded)
            .with_context(|| format!("Invalid input pattern: {}", pattern))?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();

        Ok(paths)
    }
}

impl Default for FileLogRepository {
    fn default() -> Self {
        Self::new("log")
    }
}
