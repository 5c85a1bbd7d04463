//! # Data Transfer Objects

pub mod convert_options;
