//! # Transcode Repository Trait
//!
//! 1ファイル単位のログ→CSV変換を抽象化

use std::path::Path;

use crate::domain::entities::conversion_job::{TranscodeStats, WriteMode};
use crate::domain::entities::field_schema::FieldSchema;
use crate::domain::errors::TranscodeError;

#[cfg(test)]
use mockall::automock;

/// 変換リポジトリ
///
/// 入力ログの読み込みとCSVファイルへの書き込みを担当する
#[cfg_attr(test, automock)]
pub trait TranscodeRepository: Send + Sync {
    /// 出力先の親ディレクトリを用意する
    ///
    /// # Errors
    ///
    /// ディレクトリを作成できない場合は `OutputUnwritable`
    fn prepare_output(&self, output: &Path) -> Result<(), TranscodeError>;

    /// 入力ファイルから `#Fields:` スキーマを読み取る
    ///
    /// # Errors
    ///
    /// * `InputUnreadable` - 入力ファイルを開けない・読めない
    /// * `NoHeaderFound` - `#Fields:` 行が存在しない
    fn read_schema(&self, input: &Path) -> Result<FieldSchema, TranscodeError>;

    /// 入力ファイルをCSVに変換して出力ファイルに書き込む
    ///
    /// # Arguments
    ///
    /// * `input` - 入力ログファイル
    /// * `output` - 出力CSVファイル
    /// * `schema` - `read_schema` で得たスキーマ
    /// * `mode` - 新規作成 / 追記
    ///
    /// # Returns
    ///
    /// 書き込んだ行数などの統計
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        schema: &FieldSchema,
        mode: WriteMode,
    ) -> Result<TranscodeStats, TranscodeError>;
}
