//! # Domain Errors
//!
//! 変換処理のエラー種別（ファイル単位で発生し、バッチ全体は止めない）

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("no #Fields: directive found in {path}")]
    NoHeaderFound { path: PathBuf },

    #[error("failed to read input {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema of {input} does not match existing header of {output}: expected '{expected}', found '{found}'")]
    SchemaMismatch {
        input: PathBuf,
        output: PathBuf,
        expected: String,
        found: String,
    },
}

impl TranscodeError {
    pub fn input_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn output_unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.into(),
            source,
        }
    }
}
