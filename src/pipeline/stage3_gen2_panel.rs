use std::collections::BTreeSet;

use serde::Serialize;

use crate::engine::ranking::{sort_gen2_hits, sort_gen2_non_hits};
use crate::input::ScreenTables;
use crate::model::config::EngineConfig;
use crate::model::confidence::ConfidenceClass;
use crate::model::filters::Assay;
use crate::model::records::{CompetitionInteraction, ScreenRow};

/// Gen2 ligands competed against one Gen1 anchor, for the selected protein.
#[derive(Debug, Clone, Serialize)]
pub struct Gen2Panel<'a> {
    pub gen1_lig: String,
    /// Distinct Gen2 ligands screened against the anchor, any protein.
    pub num_gen2_ligands: usize,
    pub hits: Vec<&'a CompetitionInteraction>,
    pub non_hits: Vec<&'a CompetitionInteraction>,
    /// Hits then non-hits, each in its own order.
    pub selection: Vec<String>,
}

pub fn anchor_slice<'a>(
    tables: &'a ScreenTables,
    gen1_lig: &str,
) -> Vec<&'a CompetitionInteraction> {
    tables
        .competition
        .iter()
        .filter(|r| r.gen1_lig == gen1_lig)
        .collect()
}

/// `None` when the ligand never went into a competition round.
pub fn run_stage3<'a>(
    tables: &'a ScreenTables,
    config: &EngineConfig,
    gen1_lig: &str,
    accession: &str,
) -> Option<Gen2Panel<'a>> {
    if !config.is_gen2_eligible(gen1_lig) {
        return None;
    }

    let anchor = anchor_slice(tables, gen1_lig);
    let num_gen2_ligands = anchor
        .iter()
        .map(|r| r.frag_id())
        .collect::<BTreeSet<_>>()
        .len();

    let (mut hits, mut non_hits): (Vec<_>, Vec<_>) = anchor
        .into_iter()
        .filter(|r| r.accession() == accession)
        .partition(|r| {
            ConfidenceClass::from_mdf(r.mdf_class()).is_some_and(|c| c.is_hit(Assay::Competition))
        });
    sort_gen2_hits(&mut hits);
    sort_gen2_non_hits(&mut non_hits);

    let selection = hits
        .iter()
        .chain(non_hits.iter())
        .map(|r| r.frag_id().to_string())
        .collect();

    tracing::debug!(
        gen1_lig,
        accession,
        gen2_ligands = num_gen2_ligands,
        hits = hits.len(),
        non_hits = non_hits.len(),
        "gen2 panel"
    );

    Some(Gen2Panel {
        gen1_lig: gen1_lig.to_string(),
        num_gen2_ligands,
        hits,
        non_hits,
        selection,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_gen2_panel.rs"]
mod tests;
