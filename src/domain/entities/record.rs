//! # Record Entity
//!
//! ログ1行分のレコード

use super::field_schema::{merge_leading_pair, strip_line_terminator, FieldSchema};

/// 列名と値の順序付きペア
///
/// スキーマとの対応付けは位置で行い、短い方で打ち切る。
/// 値が足りない末尾の列はレコードに含まれない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'s> {
    fields: Vec<(&'s str, String)>,
    /// 結合後のトークン数（スキーマとの比較用）
    token_count: usize,
}

impl<'s> Record<'s> {
    /// データ行からレコードを作成
    pub fn from_line(line: &str, schema: &'s FieldSchema) -> Self {
        let line = strip_line_terminator(line);
        let tokens = merge_leading_pair(line.split(' ').map(str::to_string).collect());
        let token_count = tokens.len();
        let fields = schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(tokens)
            .collect();
        Self {
            fields,
            token_count,
        }
    }

    /// 列名で値を取得
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(&'s str, String)] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// スキーマの列順に値を並べる（欠けた列は空文字）
    pub fn to_row(&self, schema: &FieldSchema) -> Vec<String> {
        let mut row: Vec<String> = self.fields.iter().map(|(_, value)| value.clone()).collect();
        row.resize(schema.len(), String::new());
        row
    }
}
