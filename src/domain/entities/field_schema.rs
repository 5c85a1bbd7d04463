//! # FieldSchema Entity
//!
//! `#Fields:` ディレクティブから得られる列スキーマ

/// `#Fields:` ディレクティブの接頭辞
pub const FIELDS_DIRECTIVE: &str = "#Fields:";

/// 先頭2要素（日付・時刻）を1つに結合する
///
/// IISは日付と時刻を別々のトークンとして書き出すため、CSVでは1列にまとめる。
/// 要素が2つ未満の場合はそのまま返す。
pub fn merge_leading_pair(mut tokens: Vec<String>) -> Vec<String> {
    if tokens.len() < 2 {
        return tokens;
    }
    let time = tokens.remove(1);
    tokens[0] = format!("{} {}", tokens[0], time);
    tokens
}

/// 行末の改行コード（`\n` / `\r\n`）を取り除く
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// フィールドスキーマ
///
/// CSVの列名を順序付きで保持する。先頭の2列は結合済み。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    columns: Vec<String>,
}

impl FieldSchema {
    /// 生の列名リストからスキーマを作成（先頭2列を結合）
    pub fn from_raw(raw: Vec<String>) -> Self {
        Self {
            columns: merge_leading_pair(raw),
        }
    }

    /// `#Fields:` 行をパースする
    ///
    /// 前後の空白を除いた内容が `#Fields:` で始まらない行には `None` を返す。
    pub fn parse_directive(line: &str) -> Option<Self> {
        let line = strip_line_terminator(line);
        let rest = line.trim_start().strip_prefix(FIELDS_DIRECTIVE)?;
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        let raw = rest.split(' ').map(str::to_string).collect();
        Some(Self::from_raw(raw))
    }

    /// 列名のスライス
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 列数
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
