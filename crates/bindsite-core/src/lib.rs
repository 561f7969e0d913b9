//! # bindsite Core Library
//!
//! A small library for locating ligand-binding-site centroids in macromolecular
//! structures: given a parsed structure and a set of residues presumed to contact
//! a ligand, it computes the mass-weighted center of those residues' atoms, a
//! common starting point for docking-box placement and pocket analysis.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`MolecularSystem`),
//!   pure geometric calculations (`center_of_mass`), and the I/O boundary that
//!   delegates structure parsing to the `pdbtbx` collaborator.
//!
//! - **[`engine`]: The Logic Core.** Holds configuration (`CentroidConfig`), the
//!   residue-selection resolver, and the error taxonomy shared by all operations.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute the complete centroid
//!   procedure and is the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
