//! # Domain Services
//!
//! エンティティに属さないビジネスロジック
//!
//! - **transcoder**: ログ→CSV変換
//! - **job_planner**: 出力先と書き込みモードの決定

pub mod job_planner;
pub mod transcoder;
