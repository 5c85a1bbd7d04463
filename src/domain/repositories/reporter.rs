//! # Reporter Trait
//!
//! 進捗・警告の通知先を抽象化（ログ出力の方法はAdapter層が決める）

use std::path::Path;

use crate::domain::entities::conversion_job::{BatchSummary, ConversionJob, TranscodeStats};
use crate::domain::errors::TranscodeError;

#[cfg(test)]
use mockall::automock;

/// 変換の進捗を受け取るレポーター
#[cfg_attr(test, automock)]
pub trait Reporter: Send + Sync {
    /// バッチ開始（ジョブ総数）
    fn batch_started(&self, total: usize);

    /// ファイル変換開始
    fn file_started(&self, job: &ConversionJob);

    /// データ行の列数がスキーマと一致しなかった
    fn row_mismatch(&self, input: &Path, line_number: usize, expected: usize, found: usize);

    /// ファイル変換成功
    fn file_finished(&self, job: &ConversionJob, stats: &TranscodeStats);

    /// ファイル変換失敗
    fn file_failed(&self, job: &ConversionJob, error: &TranscodeError);

    /// バッチ終了
    fn batch_finished(&self, summary: &BatchSummary);
}

/// 何も通知しないレポーター
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn batch_started(&self, _total: usize) {}
    fn file_started(&self, _job: &ConversionJob) {}
    fn row_mismatch(&self, _input: &Path, _line_number: usize, _expected: usize, _found: usize) {}
    fn file_finished(&self, _job: &ConversionJob, _stats: &TranscodeStats) {}
    fn file_failed(&self, _job: &ConversionJob, _error: &TranscodeError) {}
    fn batch_finished(&self, _summary: &BatchSummary) {}
}
