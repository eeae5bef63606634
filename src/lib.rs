//! clipsplit Library
//!
//! Parses an interval file (a source video path followed by
//! `('H:MM:SS', 'H:MM:SS')` pairs) and extracts one stream-copied clip per
//! interval with an external ffmpeg binary.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use config::SplitConfig;
pub use domain::errors::DomainError;
pub use domain::model::{ParseMode, ParseResult, TimeRange};
pub use engine::extract_clips;
pub use error::{SplitError, SplitResult};
pub use parser::parse;
