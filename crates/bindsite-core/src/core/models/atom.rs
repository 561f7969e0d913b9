use super::ids::ResidueId;
use nalgebra::Point3;

/// Mass assigned to an atom when the source data does not provide one.
///
/// Structure files routinely omit or garble element information; such atoms
/// count with a unit mass. The value is resolved once, at construction time,
/// so downstream calculations never branch on the presence of the field.
pub const DEFAULT_ATOM_MASS: f64 = 1.0;

/// Represents an atom in a molecular structure.
///
/// This struct carries exactly what the centroid calculation consumes: the
/// atom's 3D position and its mass. Atoms are immutable once loaded and are
/// owned by the system, with the parent residue holding a reference by ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The atomic mass in atomic mass units; [`DEFAULT_ATOM_MASS`] when unknown.
    pub mass: f64,
}

impl Atom {
    /// Creates a new `Atom` with the default mass.
    ///
    /// Loaders that know the element overwrite `mass` with the element's
    /// standard atomic weight after construction.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            position,
            mass: DEFAULT_ATOM_MASS,
        }
    }
}
