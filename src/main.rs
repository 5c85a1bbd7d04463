//! iiscsv - IIS Log to CSV Converter
//!
//! IISのW3C拡張ログをCSVに変換

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use std::sync::Arc;
use std::time::Instant;

use iiscsv::adapter::config::Config;
use iiscsv::adapter::reporters::console_reporter::ConsoleReporter;
use iiscsv::domain::repositories::reporter::Reporter;
use iiscsv::driver::logging::init_logger;
use iiscsv::driver::workflow::resolve_settings;
use iiscsv::driver::{Args, ConvertWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    let started = Instant::now();
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = resolve_settings(&args, config)?;

    init_logger(&settings.logger)?;

    // Create workflow with injected reporter
    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::new(settings.show_progress));
    let workflow = ConvertWorkflow::new(settings.convert, reporter);

    let summary = workflow.execute();
    info!("Execution time: {:.3}s", started.elapsed().as_secs_f64());

    let summary = summary?;
    if summary.has_failures() {
        bail!(
            "{} of {} file(s) failed to convert",
            summary.failed,
            summary.failed + summary.converted
        );
    }

    Ok(())
}
