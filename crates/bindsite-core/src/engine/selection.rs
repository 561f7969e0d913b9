use super::config::{CentroidConfig, ResidueSpecifier};
use super::error::EngineError;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;

/// Resolves the configured chain and residue numbers to residue IDs.
///
/// The returned list preserves the order and multiplicity of the configured
/// residue numbers. Resolution is strict: an absent chain or residue aborts
/// with the offending identifier, there is no partial result.
pub fn resolve_residue_ids(
    system: &MolecularSystem,
    config: &CentroidConfig,
) -> Result<Vec<ResidueId>, EngineError> {
    let chain_id =
        system
            .find_chain_by_id(&config.chain_id)
            .ok_or_else(|| EngineError::ChainNotFound {
                chain_id: config.chain_id.clone(),
            })?;

    config
        .residue_numbers
        .iter()
        .map(|&residue_number| {
            system
                .find_residue_by_id(chain_id, residue_number)
                .ok_or_else(|| EngineError::ResidueNotFound {
                    spec: ResidueSpecifier {
                        chain_id: config.chain_id.clone(),
                        residue_number,
                    },
                })
        })
        .collect()
}
