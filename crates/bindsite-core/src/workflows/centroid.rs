use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry;
use crate::engine::config::CentroidConfig;
use crate::engine::error::EngineError;
use crate::engine::selection;
use nalgebra::Point3;
use tracing::{info, instrument};

/// Outcome of a centroid calculation.
///
/// The center of mass is the value callers came for; the counts and the total
/// mass describe the selection it was computed over and feed logging.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidResult {
    pub center_of_mass: Point3<f64>,
    pub residue_count: usize,
    pub atom_count: usize,
    pub total_mass: f64,
}

/// Computes the mass-weighted center of the configured residue selection.
///
/// The computation is pure and synchronous: resolve the selection, flatten the
/// selected residues' atoms, average their positions weighted by mass.
///
/// # Errors
///
/// Fails with [`EngineError::ChainNotFound`] or [`EngineError::ResidueNotFound`]
/// when the selection does not resolve against the system, and with
/// [`EngineError::Geometry`] when the selection carries no mass (e.g., an empty
/// residue list).
#[instrument(skip_all, name = "centroid_workflow")]
pub fn run(system: &MolecularSystem, config: &CentroidConfig) -> Result<CentroidResult, EngineError> {
    info!(
        chain = %config.chain_id,
        residues = config.residue_numbers.len(),
        "Resolving binding-site selection."
    );
    let residue_ids = selection::resolve_residue_ids(system, config)?;

    let weighted_points: Vec<(Point3<f64>, f64)> = residue_ids
        .iter()
        .flat_map(|&residue_id| system.residue(residue_id).unwrap().atoms())
        .map(|&atom_id| {
            let atom = system.atom(atom_id).unwrap();
            (atom.position, atom.mass)
        })
        .collect();

    let atom_count = weighted_points.len();
    let total_mass: f64 = weighted_points.iter().map(|(_, mass)| mass).sum();

    let center_of_mass = geometry::center_of_mass(weighted_points)?;

    info!(
        atoms = atom_count,
        total_mass,
        x = center_of_mass.x,
        y = center_of_mass.y,
        z = center_of_mass.z,
        "Center of mass computed."
    );

    Ok(CentroidResult {
        center_of_mass,
        residue_count: residue_ids.len(),
        atom_count,
        total_mass,
    })
}
