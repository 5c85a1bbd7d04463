//! # Transcode Logs Use Case
//!
//! ログ→CSV変換バッチユースケース

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};

use crate::domain::entities::conversion_job::{
    BatchSummary, ConversionJob, TranscodeStats, WriteMode,
};
use crate::domain::errors::TranscodeError;
use crate::domain::repositories::reporter::Reporter;
use crate::domain::repositories::transcode_repository::TranscodeRepository;

/// ログ変換バッチユースケース
///
/// ジョブを順番に処理する。失敗はファイル単位で報告し、残りのジョブを続行する。
pub struct TranscodeLogsUseCase<T: TranscodeRepository> {
    transcode_repository: Arc<T>,
    reporter: Arc<dyn Reporter>,
}

impl<T: TranscodeRepository> TranscodeLogsUseCase<T> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `transcode_repository` - 変換リポジトリ
    /// * `reporter` - 進捗の通知先
    pub fn new(transcode_repository: Arc<T>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            transcode_repository,
            reporter,
        }
    }

    /// ジョブを順番に変換する
    ///
    /// # Arguments
    ///
    /// * `jobs` - 変換ジョブ
    ///
    /// 書き込みモードは実行時に決まる。このバッチで最初に変換まで到達したジョブが
    /// 出力を `Truncate` し、以降のジョブはジョブ自身のモードで書き込む。
    /// * `fail_fast` - 最初の失敗で中断するかどうか
    ///
    /// # Returns
    ///
    /// 成功・失敗件数と総行数
    ///
    /// # Errors
    ///
    /// `fail_fast` が有効で、いずれかのファイルの変換に失敗した場合
    pub fn execute(&self, jobs: &[ConversionJob], fail_fast: bool) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        let mut opened: HashSet<PathBuf> = HashSet::new();
        self.reporter.batch_started(jobs.len());

        for job in jobs {
            self.reporter.file_started(job);
            match self.convert(job, &mut opened) {
                Ok(stats) => {
                    summary.record_success(&stats);
                    self.reporter.file_finished(job, &stats);
                }
                Err(e) => {
                    summary.record_failure();
                    self.reporter.file_failed(job, &e);
                    if fail_fast {
                        self.reporter.batch_finished(&summary);
                        return Err(e)
                            .with_context(|| format!("Failed to convert {}", job.input.display()));
                    }
                }
            }
        }

        self.reporter.batch_finished(&summary);
        Ok(summary)
    }

    /// 1ジョブ分の変換（スキーマ読み込み → 出力準備 → 変換）
    fn convert(
        &self,
        job: &ConversionJob,
        opened: &mut HashSet<PathBuf>,
    ) -> Result<TranscodeStats, TranscodeError> {
        let schema = self.transcode_repository.read_schema(&job.input)?;
        self.transcode_repository.prepare_output(&job.output)?;

        // 前回の実行結果が残っていても、このバッチで最初に開く出力は作り直す
        let mode = if opened.insert(job.output.clone()) {
            WriteMode::Truncate
        } else {
            job.mode
        };
        self.transcode_repository
            .transcode(&job.input, &job.output, &schema, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::field_schema::FieldSchema;
    use crate::domain::repositories::reporter::{MockReporter, SilentReporter};
    use crate::domain::repositories::transcode_repository::MockTranscodeRepository;
    use mockall::Sequence;
    use std::path::Path;

    fn schema() -> FieldSchema {
        FieldSchema::parse_directive("#Fields: date time cs-method").unwrap()
    }

    fn jobs() -> Vec<ConversionJob> {
        vec![
            ConversionJob::new("/logs/a.log", "/out/all.csv", WriteMode::Truncate),
            ConversionJob::new("/logs/bad.log", "/out/all.csv", WriteMode::Append),
            ConversionJob::new("/logs/c.log", "/out/all.csv", WriteMode::Append),
        ]
    }

    fn repository_with_bad_file() -> MockTranscodeRepository {
        let mut repo = repository_without_transcode();
        repo.expect_transcode().returning(|_, _, _, _| {
            Ok(TranscodeStats {
                rows: 10,
                ..Default::default()
            })
        });
        repo
    }

    /// `/logs/bad.log` だけスキーマ読み込みに失敗するリポジトリ
    fn repository_without_transcode() -> MockTranscodeRepository {
        let mut repo = MockTranscodeRepository::new();
        repo.expect_read_schema().returning(|input| {
            if input == Path::new("/logs/bad.log") {
                Err(TranscodeError::NoHeaderFound {
                    path: input.to_path_buf(),
                })
            } else {
                Ok(schema())
            }
        });
        repo.expect_prepare_output().returning(|_| Ok(()));
        repo
    }

    #[test]
    fn test_failures_are_isolated_per_file() {
        let use_case = TranscodeLogsUseCase::new(
            Arc::new(repository_with_bad_file()),
            Arc::new(SilentReporter),
        );

        let summary = use_case.execute(&jobs(), false).unwrap();

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.rows, 20);
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let mut repo = MockTranscodeRepository::new();
        repo.expect_read_schema().returning(|input| {
            if input == Path::new("/logs/bad.log") {
                Err(TranscodeError::NoHeaderFound {
                    path: input.to_path_buf(),
                })
            } else {
                Ok(schema())
            }
        });
        repo.expect_prepare_output().times(1).returning(|_| Ok(()));
        repo.expect_transcode()
            .times(1)
            .returning(|_, _, _, _| Ok(TranscodeStats::default()));
        let use_case = TranscodeLogsUseCase::new(Arc::new(repo), Arc::new(SilentReporter));

        let result = use_case.execute(&jobs(), true);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("/logs/bad.log"));
        assert!(err.downcast_ref::<TranscodeError>().is_some());
    }

    #[test]
    fn test_missing_header_skips_output_preparation() {
        let mut repo = MockTranscodeRepository::new();
        repo.expect_read_schema().returning(|input| {
            Err(TranscodeError::NoHeaderFound {
                path: input.to_path_buf(),
            })
        });
        repo.expect_prepare_output().never();
        repo.expect_transcode().never();
        let use_case = TranscodeLogsUseCase::new(Arc::new(repo), Arc::new(SilentReporter));

        let summary = use_case
            .execute(&[ConversionJob::new("/logs/bad.log", "/out/bad.csv", WriteMode::Truncate)], false)
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.converted, 0);
    }

    fn expect_transcode_mode(
        repo: &mut MockTranscodeRepository,
        seq: &mut Sequence,
        input: &'static str,
        expected: WriteMode,
    ) {
        repo.expect_transcode()
            .withf(move |job_input, output, _, mode| {
                job_input.to_path_buf() == PathBuf::from(input)
                    && output.to_path_buf() == PathBuf::from("/out/all.csv")
                    && *mode == expected
            })
            .times(1)
            .in_sequence(seq)
            .returning(|_, _, _, _| Ok(TranscodeStats::default()));
    }

    #[test]
    fn test_first_opened_output_is_truncated_then_appended() {
        let mut repo = MockTranscodeRepository::new();
        let mut seq = Sequence::new();
        repo.expect_read_schema().returning(|_| Ok(schema()));
        repo.expect_prepare_output().returning(|_| Ok(()));
        expect_transcode_mode(&mut repo, &mut seq, "/logs/a.log", WriteMode::Truncate);
        expect_transcode_mode(&mut repo, &mut seq, "/logs/c.log", WriteMode::Append);
        let use_case = TranscodeLogsUseCase::new(Arc::new(repo), Arc::new(SilentReporter));

        use_case
            .execute(
                &[
                    ConversionJob::new("/logs/a.log", "/out/all.csv", WriteMode::Truncate),
                    ConversionJob::new("/logs/c.log", "/out/all.csv", WriteMode::Append),
                ],
                false,
            )
            .unwrap();
    }

    #[test]
    fn test_failed_first_job_hands_truncate_to_next_job() {
        let mut repo = repository_without_transcode();
        let mut seq = Sequence::new();
        expect_transcode_mode(&mut repo, &mut seq, "/logs/c.log", WriteMode::Truncate);
        let use_case = TranscodeLogsUseCase::new(Arc::new(repo), Arc::new(SilentReporter));

        let summary = use_case
            .execute(
                &[
                    ConversionJob::new("/logs/bad.log", "/out/all.csv", WriteMode::Truncate),
                    ConversionJob::new("/logs/c.log", "/out/all.csv", WriteMode::Append),
                ],
                false,
            )
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.converted, 1);
    }

    #[test]
    fn test_reporter_receives_lifecycle_events() {
        let mut reporter = MockReporter::new();
        reporter
            .expect_batch_started()
            .withf(|total| *total == 3)
            .times(1)
            .return_const(());
        reporter.expect_file_started().times(3).return_const(());
        reporter.expect_file_finished().times(2).return_const(());
        reporter.expect_file_failed().times(1).return_const(());
        reporter
            .expect_batch_finished()
            .withf(|summary| summary.converted == 2 && summary.failed == 1)
            .times(1)
            .return_const(());

        let use_case =
            TranscodeLogsUseCase::new(Arc::new(repository_with_bad_file()), Arc::new(reporter));

        use_case.execute(&jobs(), false).unwrap();
    }
}
