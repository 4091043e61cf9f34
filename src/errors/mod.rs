//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used by every phase. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants grouped into the user-facing categories
//! - Error formatting and display functionality
//!
//! Every error is fatal: the first one aborts the run.

pub mod errors;
