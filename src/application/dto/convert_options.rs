//! # Convert Options DTO
//!
//! 変換バッチの設定（CLI引数と設定ファイルをマージした結果）

use std::path::PathBuf;

/// 変換設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 入力globパターンまたはディレクトリ
    pub patterns: Vec<String>,
    /// 出力CSVファイルまたはディレクトリ
    pub output: PathBuf,
    /// 入力ディレクトリごとに1つのCSVへ集約
    pub reduce_files: bool,
    /// 最初の失敗でバッチを中断
    pub fail_fast: bool,
    /// ディレクトリ走査時の入力拡張子
    pub input_extension: String,
    /// 出力ファイルの拡張子
    pub output_extension: String,
}

impl ConvertOptions {
    /// 新しい変換設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use iiscsv::application::dto::convert_options::ConvertOptions;
    ///
    /// let options = ConvertOptions::new(
    ///     vec!["C:/inetpub/logs/LogFiles/**/*.log".to_string()],
    ///     "converted",
    ///     true,             // ディレクトリごとに集約
    ///     false,
    /// );
    ///
    /// assert!(options.reduce_files);
    /// assert_eq!(options.input_extension, "log");
    /// assert_eq!(options.output_extension, "csv");
    /// ```
    pub fn new(
        patterns: Vec<String>,
        output: impl Into<PathBuf>,
        reduce_files: bool,
        fail_fast: bool,
    ) -> Self {
        Self {
            patterns,
            output: output.into(),
            reduce_files,
            fail_fast,
            input_extension: "log".to_string(),
            output_extension: "csv".to_string(),
        }
    }

    pub fn with_extensions(
        mut self,
        input_extension: impl Into<String>,
        output_extension: impl Into<String>,
    ) -> Self {
        self.input_extension = input_extension.into();
        self.output_extension = output_extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_new() {
        let options = ConvertOptions::new(vec!["*.log".to_string()], "out.csv", false, true);

        assert_eq!(options.patterns, vec!["*.log"]);
        assert_eq!(options.output, PathBuf::from("out.csv"));
        assert!(!options.reduce_files);
        assert!(options.fail_fast);
    }

    #[test]
    fn test_with_extensions() {
        let options = ConvertOptions::new(vec![], "out", false, false).with_extensions("txt", "dat");

        assert_eq!(options.input_extension, "txt");
        assert_eq!(options.output_extension, "dat");
    }
}
