//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// IISのW3C拡張ログをCSVに変換するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "iiscsv")]
#[command(about = "Convert IIS W3C extended log files to CSV", long_about = None)]
pub struct Args {
    /// IIS log file, glob pattern or directory to convert (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATTERN", num_args = 1..)]
    pub files: Vec<String>,

    /// Output CSV file, or directory for one CSV per input
    #[arg(short, long)]
    pub output: Option<String>,

    /// Combine all logs of a directory into one CSV named after the directory
    #[arg(short, long)]
    pub reduce_files: bool,

    /// Stop at the first file that fails to convert
    #[arg(long)]
    pub fail_fast: bool,

    /// Turn on verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not log to the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write log output to this file
    #[arg(short, long)]
    pub log_file: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Config file path (JSON)
    #[arg(short, long)]
    pub config: Option<String>,
}
