//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション（設定のマージと依存性注入）

use anyhow::{bail, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_log_repository::FileLogRepository;
use crate::adapter::repositories::file_transcode_repository::FileTranscodeRepository;
use crate::application::dto::convert_options::ConvertOptions;
use crate::application::use_cases::discover_logs::DiscoverLogsUseCase;
use crate::application::use_cases::transcode_logs::TranscodeLogsUseCase;
use crate::domain::entities::conversion_job::BatchSummary;
use crate::domain::repositories::reporter::Reporter;
use crate::domain::services::job_planner::{JobPlanner, OutputTarget};

use super::cli::Args;
use super::logging::LoggerOptions;

/// CLI引数と設定ファイルをマージした実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub convert: ConvertOptions,
    pub logger: LoggerOptions,
    pub show_progress: bool,
}

/// 実行設定を解決する
///
/// CLI引数が設定ファイルより優先される。入力パターンは両方を結合する。
pub fn resolve_settings(args: &Args, config: Config) -> Result<RunSettings> {
    let mut patterns = config.inputs;
    patterns.extend(args.files.iter().cloned());
    if patterns.is_empty() {
        bail!("No input files given (use -f/--file or \"inputs\" in the config file)");
    }

    let output = match args.output.clone().or(config.output) {
        Some(output) => shellexpand::tilde(&output).into_owned(),
        None => bail!("No output path given (use -o/--output or \"output\" in the config file)"),
    };

    let quiet = args.quiet || config.quiet;
    let logger = LoggerOptions {
        verbose: args.verbose || config.verbose,
        quiet,
        log_file: args
            .log_file
            .clone()
            .or(config.log_file)
            .map(|path| PathBuf::from(shellexpand::tilde(&path).into_owned())),
    };

    let convert = ConvertOptions::new(
        patterns,
        output,
        args.reduce_files || config.reduce_files,
        args.fail_fast || config.fail_fast,
    )
    .with_extensions(config.input_extension, config.output_extension);

    Ok(RunSettings {
        convert,
        logger,
        show_progress: config.progress && !args.no_progress && !quiet,
    })
}

/// ログ変換ワークフロー
pub struct ConvertWorkflow {
    options: ConvertOptions,
    discover_use_case: DiscoverLogsUseCase<FileLogRepository>,
    transcode_use_case: TranscodeLogsUseCase<FileTranscodeRepository>,
}

impl ConvertWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(options: ConvertOptions, reporter: Arc<dyn Reporter>) -> Self {
        // Repository implementations
        let log_repo = Arc::new(FileLogRepository::new(options.input_extension.clone()));
        let transcode_repo = Arc::new(FileTranscodeRepository::new(reporter.clone()));

        Self {
            discover_use_case: DiscoverLogsUseCase::new(log_repo),
            transcode_use_case: TranscodeLogsUseCase::new(transcode_repo, reporter),
            options,
        }
    }

    /// Execute the conversion workflow
    pub fn execute(&self) -> Result<BatchSummary> {
        let log_files = self.discover_use_case.execute(&self.options.patterns)?;
        if log_files.is_empty() {
            warn!("No log files to convert. Exiting.");
            return Ok(BatchSummary::default());
        }

        let target = OutputTarget::resolve(&self.options.output);
        info!("Output: {:?}", target);

        let jobs = JobPlanner::plan(
            &log_files,
            &target,
            self.options.reduce_files,
            &self.options.output_extension,
        );

        self.transcode_use_case.execute(&jobs, self.options.fail_fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(files: &[&str], output: Option<&str>) -> Args {
        Args {
            files: files.iter().map(|s| s.to_string()).collect(),
            output: output.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_from_args_only() {
        let settings =
            resolve_settings(&args(&["a.log"], Some("out.csv")), Config::default()).unwrap();

        assert_eq!(settings.convert.patterns, vec!["a.log"]);
        assert_eq!(settings.convert.output, PathBuf::from("out.csv"));
        assert_eq!(settings.convert.output_extension, "csv");
        assert!(settings.show_progress);
        assert_eq!(settings.logger, LoggerOptions::default());
    }

    #[test]
    fn test_resolve_merges_config() {
        let config = Config {
            inputs: vec!["W3SVC1/*.log".to_string()],
            output: Some("from-config".to_string()),
            reduce_files: true,
            log_file: Some("run.log".to_string()),
            progress: false,
            ..Default::default()
        };

        let settings = resolve_settings(&args(&["extra.log"], Some("from-cli")), config).unwrap();

        assert_eq!(settings.convert.patterns, vec!["W3SVC1/*.log", "extra.log"]);
        assert_eq!(settings.convert.output, PathBuf::from("from-cli"));
        assert!(settings.convert.reduce_files);
        assert_eq!(settings.logger.log_file, Some(PathBuf::from("run.log")));
        assert!(!settings.show_progress);
    }

    #[test]
    fn test_quiet_hides_progress() {
        let mut cli = args(&["a.log"], Some("out.csv"));
        cli.quiet = true;

        let settings = resolve_settings(&cli, Config::default()).unwrap();

        assert!(settings.logger.quiet);
        assert!(!settings.show_progress);
    }

    #[test]
    fn test_missing_inputs_is_error() {
        let result = resolve_settings(&args(&[], Some("out.csv")), Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_output_is_error() {
        let result = resolve_settings(&args(&["a.log"], None), Config::default());
        assert!(result.is_err());
    }
}
