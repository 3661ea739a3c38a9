use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::filters::{AdjPValueFilter, ConfidenceFilter, FilterSet, PValueFilter};

/// Gen1 ligands carried into competition (Gen2) rounds in the published screen.
pub const GEN2_ELIGIBLE_V1: [&str; 20] = [
    "C027", "C028", "C044", "C046", "C064", "C115", "C127", "C160", "C179", "C186", "C197",
    "C219", "C240", "C270", "C275", "C303", "C310", "C320", "C378", "C391",
];

pub const GEN1_LIGAND_TOTAL_V1: usize = 407;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Dataset constants injected into the engine. Every field may be omitted
/// from a JSON config file and falls back to the published screen values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub gen1_ligand_total: usize,
    pub gen2_eligible: BTreeSet<String>,
    pub protein_promiscuity_threshold: f64,
    pub ligand_promiscuity_threshold: f64,
    pub gen2_promiscuity_threshold: f64,
    pub top_n: usize,
    pub reference_filters: FilterSet,
    pub competition_reference_filters: FilterSet,
}

impl EngineConfig {
    pub fn default_v1() -> Self {
        Self {
            gen1_ligand_total: GEN1_LIGAND_TOTAL_V1,
            gen2_eligible: GEN2_ELIGIBLE_V1.iter().map(|s| s.to_string()).collect(),
            protein_promiscuity_threshold: 0.10,
            ligand_promiscuity_threshold: 0.05,
            gen2_promiscuity_threshold: 0.05,
            top_n: 5,
            reference_filters: FilterSet::new(
                PValueFilter::Below005,
                AdjPValueFilter::Below025,
                ConfidenceFilter::MediumHits,
            ),
            // TODO: confirm with the screening group whether the competition
            // reference bar should be Medium like the enrichment one.
            competition_reference_filters: FilterSet::new(
                PValueFilter::Below005,
                AdjPValueFilter::Below025,
                ConfidenceFilter::Low,
            ),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gen1_ligand_total == 0 {
            return Err(ConfigError::Invalid(
                "gen1_ligand_total must be positive".to_string(),
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be positive".to_string()));
        }
        for (name, value) in [
            (
                "protein_promiscuity_threshold",
                self.protein_promiscuity_threshold,
            ),
            (
                "ligand_promiscuity_threshold",
                self.ligand_promiscuity_threshold,
            ),
            ("gen2_promiscuity_threshold", self.gen2_promiscuity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn is_gen2_eligible(&self, frag_id: &str) -> bool {
        self.gen2_eligible.contains(frag_id)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
