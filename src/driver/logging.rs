//! Logger Setup
//!
//! `env_logger` の初期化（コンソールは色付き、ファイルはタイムスタンプ付き）

use anyhow::{Context, Result};
use env_logger::fmt::Formatter;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ロガー設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    pub verbose: bool,
    /// コンソールへ出力しない
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
}

impl LoggerOptions {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet && self.log_file.is_none() {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// レベルごとの行頭記号
pub fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "[!]",
        Level::Warn | Level::Info => "[*]",
        Level::Debug | Level::Trace => "[-]",
    }
}

fn format_console(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let style = buf.default_level_style(record.level());
    writeln!(
        buf,
        "{style}{}  {}{style:#}",
        level_prefix(record.level()),
        record.args()
    )
}

/// ファイル向けのプレーンな1行（色なし・タイムスタンプ付き）
fn write_plain<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "{}  {} | {:<5} | {}",
        level_prefix(record.level()),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}

/// `--log-file` の出力先
///
/// フォーマッタから共有されるため `Mutex` で包む
struct LogFile {
    file: Mutex<File>,
}

impl LogFile {
    fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    fn append(&self, record: &Record) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        write_plain(&mut *file, record)
    }
}

/// グローバルロガーを初期化する
///
/// コンソール（stderr）には色付き、`--log-file` にはプレーン形式で同じ行を書く。
/// `RUST_LOG` が設定されていればそちらが優先される。
pub fn init_logger(options: &LoggerOptions) -> Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(options.level_filter());

    let log_file = options.log_file.as_deref().map(LogFile::open).transpose()?;
    builder.format(move |buf, record| {
        if let Some(log_file) = &log_file {
            log_file.append(record)?;
        }
        format_console(buf, record)
    });

    if options.quiet {
        builder.target(Target::Pipe(Box::new(io::sink())));
    } else {
        builder.target(Target::Stderr);
    }

    builder.parse_default_env();
    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}
