use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use bindsite::core::io::pdb;
use bindsite::engine::config::CentroidConfigBuilder;
use bindsite::workflows::centroid::{self, CentroidResult};
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    // Argument validation happens before any parsing work begins.
    let residue_numbers =
        parser::parse_residue_list(&args.residues).map_err(|e| CliError::Argument(e.to_string()))?;

    let config = CentroidConfigBuilder::new()
        .chain_id(&args.chain)
        .residue_numbers(residue_numbers)
        .build()
        .map_err(|e| CliError::Argument(e.to_string()))?;

    info!("Loading input structure from {:?}", &args.input);
    let system = pdb::read_structure(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e,
    })?;

    let result = centroid::run(&system, &config)?;

    info!(
        residues = result.residue_count,
        atoms = result.atom_count,
        total_mass = result.total_mass,
        "Centroid computed."
    );

    // The one-line stdout contract: three space-separated coordinates, nothing else.
    println!("{}", format_centroid(&result));

    Ok(())
}

fn format_centroid(result: &CentroidResult) -> String {
    format!(
        "{} {} {}",
        result.center_of_mass.x, result.center_of_mass.y, result.center_of_mass.z
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn result_at(x: f64, y: f64, z: f64) -> CentroidResult {
        CentroidResult {
            center_of_mass: Point3::new(x, y, z),
            residue_count: 2,
            atom_count: 3,
            total_mass: 4.0,
        }
    }

    #[test]
    fn formats_three_space_separated_coordinates() {
        assert_eq!(format_centroid(&result_at(2.5, 2.5, 2.5)), "2.5 2.5 2.5");
    }

    #[test]
    fn formats_negative_and_fractional_coordinates() {
        assert_eq!(
            format_centroid(&result_at(-1.25, 0.0, 10.375)),
            "-1.25 0 10.375"
        );
    }
}
