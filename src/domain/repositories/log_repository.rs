//! # Log Repository Trait
//!
//! ログファイルの発見を抽象化

use anyhow::Result;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// ログリポジトリ
///
/// 1つの入力パターン（globまたはディレクトリ）をファイル一覧に展開する
#[cfg_attr(test, automock)]
pub trait LogRepository: Send + Sync {
    /// パターンに一致するログファイルを返す
    ///
    /// 一致なしは空のVec。パターンが不正な場合はエラー
    fn discover_log_files(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}
