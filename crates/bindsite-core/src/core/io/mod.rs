//! Provides input functionality for molecular structure files.
//!
//! Structure parsing is delegated to the `pdbtbx` crate, which handles the PDB
//! and mmCIF formats. This module owns the boundary: it maps parser output into
//! the library's [`MolecularSystem`](crate::core::models::system::MolecularSystem)
//! representation and parser failures into typed errors.

pub mod pdb;
