//! resumelint CLI library
//!
//! This library provides the command-line interface for the resumelint
//! resume critique tool.

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
