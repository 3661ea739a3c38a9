use serde::{Deserialize, Serialize};

/// One row of the protein directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinEntry {
    #[serde(rename = "UniProtID", alias = "accession")]
    pub accession: String,
    #[serde(rename = "Description", alias = "description")]
    pub description: String,
}

/// One (ligand, protein) measurement from the first-generation enrichment screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub accession: String,
    #[serde(rename = "geneName")]
    pub gene_name: String,
    #[serde(rename = "fragId")]
    pub frag_id: String,
    pub l2fc: f64,
    #[serde(rename = "l2fcM")]
    pub l2fc_m: f64,
    #[serde(rename = "protHits")]
    pub prot_hits: u32,
    #[serde(rename = "ligHits")]
    pub lig_hits: u32,
    pub ml10p: f64,
    #[serde(rename = "ml10adjP")]
    pub ml10_adj_p: f64,
    #[serde(rename = "mdfClass")]
    pub mdf_class: u8,
}

/// A Gen2 competition measurement anchored to a Gen1 ligand.
///
/// `hit_rank` is only assigned upstream for rows that pass the competition
/// hit bar; it is `None` elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionInteraction {
    #[serde(flatten)]
    pub interaction: Interaction,
    #[serde(rename = "gen1Lig")]
    pub gen1_lig: String,
    #[serde(rename = "hitRank")]
    pub hit_rank: Option<u32>,
}

/// Field accessors shared by both result tables, so filters and sort orders
/// are written once.
pub trait ScreenRow {
    fn interaction(&self) -> &Interaction;

    fn accession(&self) -> &str {
        &self.interaction().accession
    }

    fn gene_name(&self) -> &str {
        &self.interaction().gene_name
    }

    fn frag_id(&self) -> &str {
        &self.interaction().frag_id
    }

    fn l2fc(&self) -> f64 {
        self.interaction().l2fc
    }

    fn prot_hits(&self) -> u32 {
        self.interaction().prot_hits
    }

    fn lig_hits(&self) -> u32 {
        self.interaction().lig_hits
    }

    fn ml10p(&self) -> f64 {
        self.interaction().ml10p
    }

    fn ml10_adj_p(&self) -> f64 {
        self.interaction().ml10_adj_p
    }

    fn mdf_class(&self) -> u8 {
        self.interaction().mdf_class
    }
}

impl ScreenRow for Interaction {
    fn interaction(&self) -> &Interaction {
        self
    }
}

impl ScreenRow for CompetitionInteraction {
    fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}
