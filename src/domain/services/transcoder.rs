//! # Log Transcoder Service
//!
//! W3C拡張ログ（スペース区切り）をCSVに変換するドメインサービス
//!
//! I/Oは `BufRead` / `Write` 越しに行い、ファイルの開閉はAdapter層が担当する。

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::conversion_job::TranscodeStats;
use crate::domain::entities::field_schema::FieldSchema;
use crate::domain::entities::record::Record;
use crate::domain::repositories::reporter::Reporter;

/// ストリーム変換中のエラー（読み込み側か書き込み側かを区別する）
#[derive(Debug)]
pub enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// CSVライターを作成（カンマ区切り・必要な時だけクォート・`\n` 終端）
pub fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// ヘッダー行をCSVエンコードした文字列（終端なし）
pub fn encode_header(schema: &FieldSchema) -> io::Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv_writer(&mut buf);
        writer.write_record(schema.columns()).map_err(io::Error::from)?;
        writer.flush()?;
    }
    let encoded = String::from_utf8_lossy(&buf);
    Ok(encoded.trim_end_matches('\n').to_string())
}

/// 1行読み込む（不正なUTF-8は U+FFFD に置換）
///
/// EOFでは `None` を返す。戻り値には改行コードが残る。
pub fn read_lossy_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// ログ変換器
pub struct LogTranscoder {
    reporter: Arc<dyn Reporter>,
}

impl LogTranscoder {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// 先頭から `#Fields:` 行を探してスキーマを返す
    ///
    /// 見つからなければ `Ok(None)`。
    pub fn read_schema<R: BufRead>(&self, mut reader: R) -> io::Result<Option<FieldSchema>> {
        let mut buf = Vec::new();
        while let Some(line) = read_lossy_line(&mut reader, &mut buf)? {
            if let Some(schema) = FieldSchema::parse_directive(&line) {
                return Ok(Some(schema));
            }
        }
        Ok(None)
    }

    /// データ行をCSV行として書き出す
    ///
    /// `#` で始まる行と空行はスキップする。`write_header` が真ならデータより先に
    /// ヘッダー行を書く。
    pub fn transcode<R: BufRead, W: Write>(
        &self,
        source: &Path,
        mut reader: R,
        writer: W,
        schema: &FieldSchema,
        write_header: bool,
    ) -> Result<TranscodeStats, StreamError> {
        let mut csv_out = csv_writer(writer);
        let mut stats = TranscodeStats::default();

        if write_header {
            csv_out
                .write_record(schema.columns())
                .map_err(|e| StreamError::Write(e.into()))?;
        }

        let mut buf = Vec::new();
        let mut line_number = 0usize;
        while let Some(line) = read_lossy_line(&mut reader, &mut buf).map_err(StreamError::Read)? {
            line_number += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let record = Record::from_line(&line, schema);
            let found = record.token_count();
            if found != schema.len() {
                if found < schema.len() {
                    stats.short_rows += 1;
                } else {
                    stats.long_rows += 1;
                }
                self.reporter
                    .row_mismatch(source, line_number, schema.len(), found);
            }

            csv_out
                .write_record(record.to_row(schema))
                .map_err(|e| StreamError::Write(e.into()))?;
            stats.rows += 1;
        }

        csv_out.flush().map_err(StreamError::Write)?;
        Ok(stats)
    }
}
