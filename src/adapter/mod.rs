//! Adapter Layer
//!
//! 外部システム（ファイルシステム、コンソール、設定ファイル）との統合

pub mod config;
pub mod reporters;
pub mod repositories;
