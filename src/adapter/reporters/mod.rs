//! Reporter Implementations
//!
//! Domain層のReporterトレイトの実装

pub mod console_reporter;
