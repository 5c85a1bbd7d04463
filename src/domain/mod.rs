//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムを直接扱わない（I/Oは `BufRead` / `Write` 越し）
//! - CLIやログ出力の設定方法を知らない
//! - 純粋な変換ロジック
//!
//! ## 構成要素
//!
//! - **entities**: FieldSchema, Record, ConversionJob
//! - **errors**: TranscodeError
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: LogTranscoder, JobPlanner

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
