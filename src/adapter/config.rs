//! Configuration File
//!
//! JSON設定ファイルの読み込み（CLI引数で上書きされる）

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// 入力globパターンまたはディレクトリ
    pub inputs: Vec<String>,
    /// 出力CSVファイルまたはディレクトリ
    pub output: Option<String>,
    /// 入力ディレクトリごとに1つのCSVへ集約
    pub reduce_files: bool,
    /// 最初の失敗でバッチを中断
    pub fail_fast: bool,

    // Logging
    pub verbose: bool,
    pub quiet: bool,
    pub log_file: Option<String>,
    pub progress: bool,

    // File naming
    pub input_extension: String,
    pub output_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            reduce_files: false,
            fail_fast: false,
            verbose: false,
            quiet: false,
            log_file: None,
            progress: true,
            input_extension: "log".to_string(),
            output_extension: "csv".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}
