//! # ConversionJob Value Object
//!
//! 1入力ファイル → 1出力ファイルの変換単位

use std::path::PathBuf;

/// 出力ファイルの書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// 新規作成（既存の内容は破棄し、ヘッダーを書く）
    Truncate,
    /// 既存ファイルへの追記
    Append,
}

/// 変換ジョブ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: WriteMode,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode,
        }
    }
}

/// 1ファイル分の変換結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// 書き込んだデータ行数
    pub rows: usize,
    /// スキーマより列が少なかった行数
    pub short_rows: usize,
    /// スキーマより列が多かった行数
    pub long_rows: usize,
}

impl TranscodeStats {
    /// 列数が一致しなかった行の合計
    pub fn mismatched_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }
}

/// バッチ全体の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    pub rows: usize,
}

impl BatchSummary {
    pub fn record_success(&mut self, stats: &TranscodeStats) {
        self.converted += 1;
        self.rows += stats.rows;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
