//! Console Reporter Implementation
//!
//! `log` マクロと `indicatif` の進捗バーで変換状況を表示する

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::domain::entities::conversion_job::{BatchSummary, ConversionJob, TranscodeStats};
use crate::domain::errors::TranscodeError;
use crate::domain::repositories::reporter::Reporter;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// コンソールレポーター
///
/// ログ行は進捗バーを一時的に消してから出力する。
pub struct ConsoleReporter {
    progress: ProgressBar,
}

impl ConsoleReporter {
    /// # Arguments
    ///
    /// * `show_progress` - 進捗バーを表示するかどうか
    pub fn new(show_progress: bool) -> Self {
        let progress = if show_progress {
            let pb = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };
        Self { progress }
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

impl Reporter for ConsoleReporter {
    fn batch_started(&self, total: usize) {
        self.progress.set_length(total as u64);
        self.progress
            .suspend(|| info!("Converting {} log file(s)", total));
    }

    fn file_started(&self, job: &ConversionJob) {
        self.progress.set_message(Self::file_name(&job.input));
        self.progress.suspend(|| {
            debug!(
                "{} -> {} ({:?})",
                job.input.display(),
                job.output.display(),
                job.mode
            )
        });
    }

    fn row_mismatch(&self, input: &Path, line_number: usize, expected: usize, found: usize) {
        self.progress.suspend(|| {
            debug!(
                "{}:{}: expected {} columns, found {}",
                input.display(),
                line_number,
                expected,
                found
            )
        });
    }

    fn file_finished(&self, job: &ConversionJob, stats: &TranscodeStats) {
        self.progress.suspend(|| {
            info!(
                "Converted {} ({} rows) -> {}",
                job.input.display(),
                stats.rows,
                job.output.display()
            );
            if stats.mismatched_rows() > 0 {
                warn!(
                    "{}: {} row(s) did not match the #Fields: header ({} short, {} long)",
                    job.input.display(),
                    stats.mismatched_rows(),
                    stats.short_rows,
                    stats.long_rows
                );
            }
        });
        self.progress.inc(1);
    }

    fn file_failed(&self, _job: &ConversionJob, error: &TranscodeError) {
        self.progress.suspend(|| error!("{}", error));
        self.progress.inc(1);
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        self.progress.finish_and_clear();
        info!(
            "Converted {} file(s), {} row(s) total",
            summary.converted, summary.rows
        );
        if summary.has_failures() {
            warn!("{} file(s) failed", summary.failed);
        }
    }
}
