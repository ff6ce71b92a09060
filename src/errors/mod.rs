//! Error types for the scanner and parser.
//!
//! This module defines the error type shared by both passes. It
//! includes:
//!
//! - An error structure carrying a source position
//! - Specific error variants for scanning and parsing failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
