//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **FieldSchema**: `#Fields:` ディレクティブから得た列スキーマ
//! - **Record**: ログ1行分のレコード
//! - **ConversionJob**: 変換ジョブと書き込みモード

pub mod conversion_job;
pub mod field_schema;
pub mod record;
