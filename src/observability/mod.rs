//! Structured logging for the showroom.
//!
//! Every state transition, catalog load and query evaluation is instrumented with
//! `tracing` spans and events. This module wires those to an output:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! The destination is `log_file` when configured, stderr otherwise.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
