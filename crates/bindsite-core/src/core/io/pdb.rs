use crate::core::models::atom::Atom;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("Failed to parse structure file '{path}': {details}")]
    Parse { path: String, details: String },
    #[error("Structure file '{path}' contains no models")]
    NoModel { path: String },
}

/// Reads a molecular structure file and converts it into a [`MolecularSystem`].
///
/// The format (PDB or mmCIF, optionally gzipped) is inferred from the file
/// extension by the underlying parser. Only the first model of the structure
/// is consulted; additional models are ignored.
///
/// Each atom's mass is resolved while the system is built: the element's
/// standard atomic weight when the parser knows the element, the default unit
/// mass otherwise.
///
/// # Errors
///
/// Returns [`PdbError::Parse`] when the file is unreadable or malformed, and
/// [`PdbError::NoModel`] when the structure holds no coordinate model.
/// Recoverable parser diagnostics are logged at WARN level and do not abort.
pub fn read_structure<P: AsRef<Path>>(path: P) -> Result<MolecularSystem, PdbError> {
    let path_str = path.as_ref().to_string_lossy().into_owned();

    let (pdb, warnings) = pdbtbx::open(&path_str).map_err(|errors| PdbError::Parse {
        path: path_str.clone(),
        details: errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    })?;

    for warning in &warnings {
        warn!("Structure parser diagnostic: {}", warning);
    }

    let model = pdb
        .models()
        .next()
        .ok_or(PdbError::NoModel { path: path_str })?;

    let mut system = MolecularSystem::new();
    for chain in model.chains() {
        let chain_id = system.add_chain(chain.id());
        for residue in chain.residues() {
            let residue_id = system
                .add_residue(chain_id, residue.serial_number(), residue.name().unwrap_or("UNK"))
                .unwrap();
            for atom in residue.atoms() {
                let position = Point3::new(atom.x(), atom.y(), atom.z());
                let mut converted = Atom::new(atom.name(), residue_id, position);
                if let Some(weight) = atom.element().and_then(|element| element.weight()) {
                    converted.mass = weight;
                }
                system.add_atom_to_residue(residue_id, converted).unwrap();
            }
        }
    }

    debug!(
        chains = system.chains_iter().count(),
        residues = system.residues_iter().count(),
        atoms = system.atoms_iter().count(),
        "Structure loaded."
    );

    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pdb_atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        x: f64,
        y: f64,
        z: f64,
        element: &str,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4} {res_name:<3} {chain}{res_seq:>4}    {x:>8.3}{y:>8.3}{z:>8.3}{occ:>6.2}{temp:>6.2}          {element:>2}",
            occ = 1.00,
            temp = 0.00,
        )
    }

    fn write_temp_pdb(lines: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".pdb")
            .tempfile()
            .unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        writeln!(file, "END").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_chains_residues_and_atoms() {
        let file = write_temp_pdb(&[
            pdb_atom_line(1, "N", "ALA", 'A', 10, 1.0, 2.0, 3.0, "N"),
            pdb_atom_line(2, "CA", "ALA", 'A', 10, 2.0, 3.0, 4.0, "C"),
            pdb_atom_line(3, "CA", "GLY", 'A', 11, 5.0, 5.0, 5.0, "C"),
        ]);

        let system = read_structure(file.path()).unwrap();

        assert_eq!(system.chains_iter().count(), 1);
        assert_eq!(system.residues_iter().count(), 2);
        assert_eq!(system.atoms_iter().count(), 3);

        let chain_id = system.find_chain_by_id("A").unwrap();
        let ala_id = system.find_residue_by_id(chain_id, 10).unwrap();
        let ala = system.residue(ala_id).unwrap();
        assert_eq!(ala.name, "ALA");
        assert_eq!(ala.atoms().len(), 2);

        let n_atom = system.atom(ala.atoms()[0]).unwrap();
        assert_eq!(n_atom.name, "N");
        assert!((n_atom.position - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-9);
    }

    #[test]
    fn atom_mass_comes_from_the_element_weight() {
        let file = write_temp_pdb(&[pdb_atom_line(1, "N", "ALA", 'A', 1, 0.0, 0.0, 0.0, "N")]);

        let system = read_structure(file.path()).unwrap();
        let (_, atom) = system.atoms_iter().next().unwrap();

        // Standard atomic weight of nitrogen, not the unit-mass default.
        assert!((atom.mass - 14.007).abs() < 0.1, "mass was {}", atom.mass);
    }

    #[test]
    fn malformed_coordinates_surface_as_parse_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".pdb")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "ATOM      1  N   ALA A   1         abc     def     ghi  1.00  0.00           N"
        )
        .unwrap();
        file.flush().unwrap();

        let result = read_structure(file.path());
        assert!(matches!(result, Err(PdbError::Parse { .. })));
    }

    #[test]
    fn missing_file_surfaces_as_parse_error() {
        let result = read_structure("/nonexistent/structure.pdb");
        assert!(matches!(result, Err(PdbError::Parse { .. })));
    }
}
