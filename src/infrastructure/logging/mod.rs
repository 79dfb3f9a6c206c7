//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - json or pretty output on stderr
//! - optional daily-rotated JSON files via tracing-appender

pub mod logger;

pub use logger::LoggerImpl;
