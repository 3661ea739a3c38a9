//! Stateless filtering, ranking and drill-down over shared read-only tables.
//!
//! Every call recomputes its views from the tables it is given; the engine
//! holds no selection state. Clones share the same `Arc`ed tables, so one
//! loaded dataset can serve any number of independent sessions.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

pub mod filter;
pub mod ranking;

use crate::input::{InputError, ScreenTables, load_tables};
use crate::model::config::EngineConfig;
use crate::model::filters::{Assay, FilterSet};
use crate::pipeline::stage1_protein::{ProteinView, run_stage1};
use crate::pipeline::stage2_ligand::{LigandSummary, run_stage2};
use crate::pipeline::stage3_gen2_panel::{Gen2Panel, run_stage3};
use crate::pipeline::stage4_gen2_ligand::{Gen2LigandSummary, run_stage4};

/// What the presentation layer currently has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub accession: String,
    /// Falls back to the first ligand of the protein-centric view.
    pub ligand: Option<String>,
    /// Falls back to the first entry of the Gen2 selection list.
    pub gen2_ligand: Option<String>,
    pub filters: FilterSet,
    pub competition_filters: FilterSet,
}

impl Selection {
    pub fn protein(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            ligand: None,
            gen2_ligand: None,
            filters: FilterSet::default_for(Assay::Enrichment),
            competition_filters: FilterSet::default_for(Assay::Competition),
        }
    }

    pub fn with_ligand(mut self, frag_id: impl Into<String>) -> Self {
        self.ligand = Some(frag_id.into());
        self
    }

    pub fn with_gen2_ligand(mut self, frag_id: impl Into<String>) -> Self {
        self.gen2_ligand = Some(frag_id.into());
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_competition_filters(mut self, filters: FilterSet) -> Self {
        self.competition_filters = filters;
        self
    }
}

/// Every drill-down level for one selection. Levels below a missing one
/// are `None`.
#[derive(Debug, Clone, Serialize)]
pub struct DrillDown<'a> {
    pub protein: ProteinView<'a>,
    pub ligand: Option<LigandSummary<'a>>,
    pub gen2: Option<Gen2Panel<'a>>,
    pub gen2_ligand: Option<Gen2LigandSummary<'a>>,
}

#[derive(Debug, Clone)]
pub struct ScreeningEngine {
    tables: Arc<ScreenTables>,
    config: Arc<EngineConfig>,
}

impl ScreeningEngine {
    pub fn new(tables: ScreenTables, config: EngineConfig) -> Self {
        Self {
            tables: Arc::new(tables),
            config: Arc::new(config),
        }
    }

    pub fn from_shared(tables: Arc<ScreenTables>, config: EngineConfig) -> Self {
        Self {
            tables,
            config: Arc::new(config),
        }
    }

    pub fn load(data_dir: &Path, config: EngineConfig) -> Result<Self, InputError> {
        Ok(Self::new(load_tables(data_dir)?, config))
    }

    /// Replaces the tables with a fresh load. Clones made earlier keep
    /// their snapshot.
    pub fn reload(&mut self, data_dir: &Path) -> Result<(), InputError> {
        let tables = load_tables(data_dir)?;
        self.tables = Arc::new(tables);
        tracing::info!(data_dir = %data_dir.display(), "reloaded screening tables");
        Ok(())
    }

    pub fn tables(&self) -> &ScreenTables {
        &self.tables
    }

    pub fn shared_tables(&self) -> Arc<ScreenTables> {
        Arc::clone(&self.tables)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn protein_view(&self, accession: &str, filters: &FilterSet) -> ProteinView<'_> {
        run_stage1(&self.tables, &self.config, accession, filters)
    }

    pub fn ligand_view(
        &self,
        frag_id: &str,
        accession: &str,
        filters: &FilterSet,
    ) -> LigandSummary<'_> {
        run_stage2(&self.tables, &self.config, frag_id, accession, filters)
    }

    pub fn gen2_panel(&self, gen1_lig: &str, accession: &str) -> Option<Gen2Panel<'_>> {
        run_stage3(&self.tables, &self.config, gen1_lig, accession)
    }

    pub fn gen2_ligand_view(
        &self,
        gen1_lig: &str,
        gen2_lig: &str,
        accession: &str,
        filters: &FilterSet,
    ) -> Gen2LigandSummary<'_> {
        run_stage4(
            &self.tables,
            &self.config,
            gen1_lig,
            gen2_lig,
            accession,
            filters,
        )
    }

    pub fn drill_down(&self, selection: &Selection) -> DrillDown<'_> {
        let accession = selection.accession.as_str();
        let protein = self.protein_view(accession, &selection.filters);

        let Some(summary) = protein.summary() else {
            return DrillDown {
                protein,
                ligand: None,
                gen2: None,
                gen2_ligand: None,
            };
        };

        let ligand_id = selection
            .ligand
            .clone()
            .or_else(|| summary.view.rows.first().map(|r| r.frag_id.clone()));
        let Some(ligand_id) = ligand_id else {
            return DrillDown {
                protein,
                ligand: None,
                gen2: None,
                gen2_ligand: None,
            };
        };

        let ligand = self.ligand_view(&ligand_id, accession, &selection.filters);
        let gen2 = self.gen2_panel(&ligand_id, accession);

        let gen2_ligand = gen2.as_ref().and_then(|panel| {
            let gen2_id = selection
                .gen2_ligand
                .clone()
                .or_else(|| panel.selection.first().cloned())?;
            Some(self.gen2_ligand_view(
                &ligand_id,
                &gen2_id,
                accession,
                &selection.competition_filters,
            ))
        });

        DrillDown {
            protein,
            ligand: Some(ligand),
            gen2,
            gen2_ligand,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/mod.rs"]
mod tests;
