//! File Transcode Repository Implementation
//!
//! TranscodeRepositoryのファイルシステム実装

use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::conversion_job::{TranscodeStats, WriteMode};
use crate::domain::entities::field_schema::{strip_line_terminator, FieldSchema};
use crate::domain::errors::TranscodeError;
use crate::domain::repositories::reporter::Reporter;
use crate::domain::repositories::transcode_repository::TranscodeRepository;
use crate::domain::services::transcoder::{
    encode_header, read_lossy_line, LogTranscoder, StreamError,
};

/// ファイルシステムベースの変換リポジトリ
pub struct FileTranscodeRepository {
    transcoder: LogTranscoder,
}

impl FileTranscodeRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `reporter` - 行単位の警告の通知先
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            transcoder: LogTranscoder::new(reporter),
        }
    }

    fn open_input(path: &Path) -> Result<BufReader<File>, TranscodeError> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| TranscodeError::input_unreadable(path, e))
    }

    /// 既存の出力ファイルのヘッダー行を読む（存在しない・空の場合は `None`）
    fn existing_header(output: &Path) -> Result<Option<String>, TranscodeError> {
        if !output.exists() {
            return Ok(None);
        }

        let mut reader = File::open(output)
            .map(BufReader::new)
            .map_err(|e| TranscodeError::output_unwritable(output, e))?;
        let mut buf = Vec::new();
        let line = read_lossy_line(&mut reader, &mut buf)
            .map_err(|e| TranscodeError::output_unwritable(output, e))?;

        Ok(line
            .map(|l| strip_line_terminator(&l).to_string())
            .filter(|l| !l.is_empty()))
    }

    /// 追記時にヘッダーを書くべきか判定し、既存ヘッダーとの一致を確認する
    fn needs_header(
        input: &Path,
        output: &Path,
        schema: &FieldSchema,
        mode: WriteMode,
    ) -> Result<bool, TranscodeError> {
        if mode == WriteMode::Truncate {
            return Ok(true);
        }

        match Self::existing_header(output)? {
            None => Ok(true),
            Some(found) => {
                let expected = encode_header(schema)
                    .map_err(|e| TranscodeError::output_unwritable(output, e))?;
                if found != expected {
                    return Err(TranscodeError::SchemaMismatch {
                        input: input.to_path_buf(),
                        output: output.to_path_buf(),
                        expected,
                        found,
                    });
                }
                Ok(false)
            }
        }
    }
}

impl TranscodeRepository for FileTranscodeRepository {
    fn prepare_output(&self, output: &Path) -> Result<(), TranscodeError> {
        match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .map_err(|e| TranscodeError::output_unwritable(output, e)),
            _ => Ok(()),
        }
    }

    fn read_schema(&self, input: &Path) -> Result<FieldSchema, TranscodeError> {
        let reader = Self::open_input(input)?;
        let schema = self
            .transcoder
            .read_schema(reader)
            .map_err(|e| TranscodeError::input_unreadable(input, e))?
            .ok_or_else(|| TranscodeError::NoHeaderFound {
                path: input.to_path_buf(),
            })?;

        debug!(
            "Read {} columns from {}",
            schema.len(),
            input.display()
        );
        Ok(schema)
    }

    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        schema: &FieldSchema,
        mode: WriteMode,
    ) -> Result<TranscodeStats, TranscodeError> {
        let reader = Self::open_input(input)?;
        let write_header = Self::needs_header(input, output, schema, mode)?;

        let append = mode == WriteMode::Append;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(output)
            .map_err(|e| TranscodeError::output_unwritable(output, e))?;

        self.transcoder
            .transcode(input, reader, file, schema, write_header)
            .map_err(|e| match e {
                StreamError::Read(source) => TranscodeError::input_unreadable(input, source),
                StreamError::Write(source) => TranscodeError::output_unwritable(output, source),
            })
    }
}
