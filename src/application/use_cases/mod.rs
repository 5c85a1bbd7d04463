//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverLogsUseCase**: ログファイルの発見
//! - **TranscodeLogsUseCase**: ログのCSV変換（ファイル単位で失敗を分離）

pub mod discover_logs;
pub mod transcode_logs;
