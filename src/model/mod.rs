pub mod config;
pub mod confidence;
pub mod filters;
pub mod outcomes;
pub mod records;

pub use config::EngineConfig;
pub use filters::{AdjPValueFilter, Assay, ConfidenceFilter, FilterSet, PValueFilter};
pub use outcomes::{Promiscuity, RankOutcome, RankStatus};
pub use records::{CompetitionInteraction, Interaction, ProteinEntry, ScreenRow};
