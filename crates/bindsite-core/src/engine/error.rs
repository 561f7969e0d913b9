use thiserror::Error;

use super::config::ResidueSpecifier;
use crate::core::utils::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Chain '{chain_id}' not found in system")]
    ChainNotFound { chain_id: String },

    #[error("Residue not found in system: {spec:?}")]
    ResidueNotFound { spec: ResidueSpecifier },

    #[error("Center of mass calculation failed: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
}
