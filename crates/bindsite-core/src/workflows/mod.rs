//! # Workflows Module
//!
//! This module provides the high-level entry points of the library. Workflows
//! tie the `engine` and `core` layers together to execute a complete
//! procedure, from a loaded system to a finished result.
//!
//! - **Centroid Workflow** ([`centroid`]) - Mass-weighted binding-site center
//!   of mass over a configured residue selection.

pub mod centroid;
