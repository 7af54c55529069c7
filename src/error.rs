// src/error.rs
//! Unified error type for nowaf
//!
//! Every fallible step of payload building (reading input, loading custom
//! presets, validating configuration, serializing a spliced body) reports
//! through this type.

use std::fmt;

/// Main error type for all nowaf operations
#[derive(Debug)]
pub enum NowafError {
    /// I/O error (input or preset file)
    Io(std::io::Error),

    /// Parsing error (JSON, YAML)
    Parse(String),

    /// Configuration error
    Config(String),

    /// Body splicing error
    Splice(String),
}

impl std::error::Error for NowafError {}

impl fmt::Display for NowafError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NowafError::Io(e) => write!(f, "I/O error: {}", e),
            NowafError::Parse(s) => write!(f, "Parse error: {}", s),
            NowafError::Config(s) => write!(f, "Configuration error: {}", s),
            NowafError::Splice(s) => write!(f, "Splice error: {}", s),
        }
    }
}

// Automatic conversion from std::io::Error
impl From<std::io::Error> for NowafError {
    fn from(e: std::io::Error) -> Self {
        NowafError::Io(e)
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for NowafError {
    fn from(e: serde_json::Error) -> Self {
        NowafError::Parse(format!("JSON error: {}", e))
    }
}

// Automatic conversion from serde_yaml::Error
impl From<serde_yaml::Error> for NowafError {
    fn from(e: serde_yaml::Error) -> Self {
        NowafError::Parse(format!("YAML parse error: {}", e))
    }
}
