//! Filtering, ranking and drill-down over a chemical-proteomics ligand screen.
//!
//! The crate loads three read-only tables (protein directory, Gen1 enrichment
//! screen, Gen2 competition rounds) and answers selection queries against
//! them: which ligands enrich a protein, which proteins a ligand enriches,
//! and which Gen2 ligands compete a Gen1 ligand for that protein.

pub mod engine;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod test_support;

pub use engine::{DrillDown, ScreeningEngine, Selection};
pub use input::{InputError, ScreenTables, load_tables};
pub use model::{EngineConfig, FilterSet};
