/*!
 * # srtscribe - SRT subtitles to plain-text transcripts
 *
 * A Rust library for turning a folder of SRT subtitle files into one
 * readable transcript, with sequence numbers, timestamps and inline
 * markup removed.
 *
 * ## Features
 *
 * - Block-based SRT parsing that tolerates malformed blocks
 * - Markup stripping and whitespace collapsing
 * - UTF-8 decoding with a Latin-1 fallback
 * - Optional `=== file.srt ===` headers between files
 * - Per-file error isolation and an atomic output write
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Block parsing and caption cleaning
 * - `transcript`: The combined in-memory transcript
 * - `file_utils`: File system operations
 * - `app_controller`: Runs a directory conversion
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::AppError;
pub use subtitle_processor::parse_segments;
pub use transcript::Transcript;
