/*!
 * Error types for the cantosub application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when parsing or adjusting a timecode
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimecodeError {
    /// The line does not contain exactly one " --> " separator
    #[error("Invalid timecode separator in: {0}")]
    Separator(String),

    /// One of the two instants does not match HH:MM:SS,mmm
    #[error("Invalid instant format: {0}")]
    InvalidInstant(String),

    /// Minutes, seconds or milliseconds out of range
    #[error("Time component out of range in: {0}")]
    ComponentRange(String),

    /// Start instant is not strictly before the end instant
    #[error("Start time {start_ms}ms must be less than end time {end_ms}ms")]
    Inverted {
        /// Parsed start instant in milliseconds
        start_ms: u64,
        /// Parsed end instant in milliseconds
        end_ms: u64,
    },
}

/// Errors that can occur during line layout
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The input text already contains a line break marker
    #[error("Layout input already contains a line break: {0}")]
    AlreadyBroken(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timecode parsing
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from line layout
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
