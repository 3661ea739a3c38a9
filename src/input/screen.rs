use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::reader::tsv_reader;
use crate::model::records::{CompetitionInteraction, Interaction};

/// Raw competition row; `hitRank` is written as a float (with NaN or an empty
/// cell for non-hits) by the upstream dataframe export.
#[derive(Debug, Deserialize)]
struct CompetitionRecord {
    accession: String,
    #[serde(rename = "geneName")]
    gene_name: String,
    #[serde(rename = "fragId")]
    frag_id: String,
    l2fc: f64,
    #[serde(rename = "l2fcM")]
    l2fc_m: f64,
    #[serde(rename = "protHits")]
    prot_hits: u32,
    #[serde(rename = "ligHits")]
    lig_hits: u32,
    ml10p: f64,
    #[serde(rename = "ml10adjP")]
    ml10_adj_p: f64,
    #[serde(rename = "mdfClass")]
    mdf_class: u8,
    #[serde(rename = "gen1Lig")]
    gen1_lig: String,
    #[serde(rename = "hitRank", default)]
    hit_rank: Option<f64>,
}

impl From<CompetitionRecord> for CompetitionInteraction {
    fn from(r: CompetitionRecord) -> Self {
        let hit_rank = r
            .hit_rank
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u32);
        CompetitionInteraction {
            interaction: Interaction {
                accession: r.accession,
                gene_name: r.gene_name,
                frag_id: r.frag_id,
                l2fc: r.l2fc,
                l2fc_m: r.l2fc_m,
                prot_hits: r.prot_hits,
                lig_hits: r.lig_hits,
                ml10p: r.ml10p,
                ml10_adj_p: r.ml10_adj_p,
                mdf_class: r.mdf_class,
            },
            gen1_lig: r.gen1_lig,
            hit_rank,
        }
    }
}

pub fn parse_interactions(path: &Path) -> Result<Vec<Interaction>, InputError> {
    let mut reader = tsv_reader(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<Interaction>() {
        rows.push(record.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed screen table");
    Ok(rows)
}

pub fn parse_competition(path: &Path) -> Result<Vec<CompetitionInteraction>, InputError> {
    let mut reader = tsv_reader(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<CompetitionRecord>() {
        let record = record.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(CompetitionInteraction::from(record));
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed competition table");
    Ok(rows)
}
