use thiserror::Error;

/// Chain consulted when the caller does not specify one.
///
/// Binding-site residue lists are conventionally given against the first
/// protein chain of the deposited structure.
pub const DEFAULT_CHAIN_ID: &str = "A";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Identifies a single residue by source-file identifiers, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueSpecifier {
    pub chain_id: String,
    pub residue_number: isize,
}

/// Configuration for a centroid calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentroidConfig {
    /// Chain the residue numbers refer to.
    pub chain_id: String,
    /// Residue sequence numbers making up the binding site, in caller order.
    /// Duplicates are honored: each mention contributes its atoms again.
    pub residue_numbers: Vec<isize>,
}

#[derive(Default)]
pub struct CentroidConfigBuilder {
    chain_id: Option<String>,
    residue_numbers: Option<Vec<isize>>,
}

impl CentroidConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain_id(mut self, chain_id: &str) -> Self {
        self.chain_id = Some(chain_id.to_string());
        self
    }

    pub fn residue_numbers(mut self, residue_numbers: Vec<isize>) -> Self {
        self.residue_numbers = Some(residue_numbers);
        self
    }

    pub fn build(self) -> Result<CentroidConfig, ConfigError> {
        Ok(CentroidConfig {
            chain_id: self.chain_id.unwrap_or_else(|| DEFAULT_CHAIN_ID.to_string()),
            residue_numbers: self
                .residue_numbers
                .ok_or(ConfigError::MissingParameter("residue_numbers"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_chain_a() {
        let config = CentroidConfigBuilder::new()
            .residue_numbers(vec![45, 46, 102])
            .build()
            .unwrap();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.residue_numbers, vec![45, 46, 102]);
    }

    #[test]
    fn builder_honors_an_explicit_chain() {
        let config = CentroidConfigBuilder::new()
            .chain_id("B")
            .residue_numbers(vec![1])
            .build()
            .unwrap();
        assert_eq!(config.chain_id, "B");
    }

    #[test]
    fn builder_requires_residue_numbers() {
        let result = CentroidConfigBuilder::new().build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("residue_numbers")
        );
    }
}
