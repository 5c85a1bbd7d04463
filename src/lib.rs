//! # iiscsv
//!
//! IIS（W3C拡張ログ形式）のログファイルをCSVに変換するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: `#Fields:` スキーマ、レコード、変換ロジック
//! - **Application層**: ログ発見・バッチ変換のユースケース
//! - **Adapter層**: ファイルシステム、設定ファイル、コンソール表示
//! - **Driver層**: CLI、ロガー初期化、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋な変換ロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
