//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent molecular
//! systems, providing the foundation for all centroid operations.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with coordinates and mass
//! - [`residue`] - Residue structure identified by its sequence number
//! - [`chain`] - Chain organization of residues
//! - [`system`] - Complete molecular system with all components and lookup maps
//! - [`ids`] - Unique identifier types for atoms, residues, and chains
//!
//! ## Usage
//!
//! Most operations start with constructing or loading one of these structures.
//!
//! ```ignore
//! use bindsite::core::models::{atom::Atom, system::MolecularSystem};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain("A");
//! let residue_id = system.add_residue(chain_id, 10, "ALA").unwrap();
//!
//! let atom = Atom::new("CA", residue_id, Point3::new(0.0, 0.0, 0.0));
//! system.add_atom_to_residue(residue_id, atom);
//! ```

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
