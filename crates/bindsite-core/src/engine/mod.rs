//! # Engine Module
//!
//! This module holds the logic shared by the library's operations: typed
//! configuration, residue-selection resolution, and the error taxonomy.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Target chain and residue selection with documented defaults
//! - **Selection** ([`selection`]) - Resolving configured identifiers against a loaded system
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation

pub mod config;
pub mod error;
pub mod selection;
