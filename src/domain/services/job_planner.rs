//! # Job Planner Service
//!
//! 入力ファイルと出力先から変換ジョブを組み立てる

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::conversion_job::{ConversionJob, WriteMode};

/// 集約出力時、親ディレクトリ名が取れない場合のファイル名
const FALLBACK_STEM: &str = "logs";

/// 出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// 全入力を1つのCSVに書き込む
    File(PathBuf),
    /// ディレクトリ配下に入力ごと（または入力ディレクトリごと）のCSVを書き込む
    Directory(PathBuf),
}

impl OutputTarget {
    /// パスから出力先の種類を判定
    ///
    /// 既存ディレクトリ、または拡張子のないパスはディレクトリとして扱う。
    pub fn resolve(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() || path.extension().is_none() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }
}

/// ジョブ計画サービス
pub struct JobPlanner;

impl JobPlanner {
    /// 変換ジョブを作成
    ///
    /// # Arguments
    ///
    /// * `inputs` - 入力ログファイル
    /// * `target` - 出力先
    /// * `reduce_files` - 入力ディレクトリごとに1つのCSVへ集約するかどうか
    /// * `extension` - 出力ファイルの拡張子
    ///
    /// # Returns
    ///
    /// 入力順のジョブ。同じ出力パスへの最初のジョブだけが `Truncate`、以降は `Append`。
    pub fn plan(
        inputs: &[PathBuf],
        target: &OutputTarget,
        reduce_files: bool,
        extension: &str,
    ) -> Vec<ConversionJob> {
        let mut seen: HashSet<PathBuf> = HashSet::new();

        inputs
            .iter()
            .map(|input| {
                let output = Self::output_path(input, target, reduce_files, extension);
                let mode = if seen.insert(output.clone()) {
                    WriteMode::Truncate
                } else {
                    WriteMode::Append
                };
                ConversionJob::new(input.clone(), output, mode)
            })
            .collect()
    }

    /// 1入力ファイルの出力パス
    pub fn output_path(
        input: &Path,
        target: &OutputTarget,
        reduce_files: bool,
        extension: &str,
    ) -> PathBuf {
        match target {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Directory(dir) => {
                let stem = if reduce_files {
                    input
                        .parent()
                        .and_then(Path::file_name)
                        .map(|name| name.to_string_lossy().into_owned())
                } else {
                    input
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                };
                let stem = stem.unwrap_or_else(|| FALLBACK_STEM.to_string());
                dir.join(format!("{}.{}", stem, extension))
            }
        }
    }
}
