use crate::engine::DrillDown;
use crate::engine::filter::FilteredView;
use crate::model::config::EngineConfig;
use crate::model::outcomes::{Promiscuity, RankOutcome};
use crate::pipeline::stage1_protein::{ProteinSummary, ProteinView};
use crate::pipeline::stage2_ligand::LigandSummary;
use crate::pipeline::stage3_gen2_panel::Gen2Panel;
use crate::pipeline::stage4_gen2_ligand::Gen2LigandSummary;
use crate::report::{Table, bar_word};

const RULE: &str = "---------------------------------------------\n";

pub fn render_drilldown_text(drill: &DrillDown<'_>, config: &EngineConfig) -> String {
    let mut out = String::new();

    out.push_str("Ligand-Protein Interactions in Chemical Proteomics Screening\n");
    out.push_str("=============================================================\n\n");

    let summary = match &drill.protein {
        ProteinView::NoInteractions {
            accession,
            description,
            ..
        } => {
            out.push_str(&format!(
                "Selected protein: {}\n",
                description.as_deref().unwrap_or(accession)
            ));
            out.push_str(&format!(
                "We did not detect {accession} interacting with any ligand in our screen, try another protein.\n"
            ));
            return out;
        }
        ProteinView::Detected(summary) => summary,
    };

    render_protein(&mut out, summary, config);

    if let Some(ligand) = &drill.ligand {
        out.push('\n');
        render_ligand(&mut out, ligand, summary, config);
    }

    if let (Some(panel), Some(ligand)) = (&drill.gen2, &drill.ligand) {
        out.push('\n');
        out.push_str(RULE);
        render_gen2_panel(&mut out, panel, &ligand.frag_id, &summary.gene_name);
    }

    if let Some(gen2) = &drill.gen2_ligand {
        out.push('\n');
        render_gen2_ligand(&mut out, gen2, &summary.gene_name, config);
    }

    out
}

fn render_protein(out: &mut String, s: &ProteinSummary<'_>, config: &EngineConfig) {
    out.push_str(&format!(
        "Selected protein: {}\n",
        s.description.as_deref().unwrap_or(&s.accession)
    ));
    out.push_str(RULE);
    out.push_str(&format!(
        "First generation ligands (Gen1) that enrich {} over background\n",
        s.gene_name
    ));
    let best = match &s.best_ligand {
        Some(id) => format!("{id} is best hit."),
        None => "No hit.".to_string(),
    };
    out.push_str(&format!(
        "{} (out of {} screened) Gen1 ligands enrich {}. {}/{} ligands are labelled as hits by applying {} filter set (fS). {}\n",
        s.num_interactions,
        config.gen1_ligand_total,
        s.gene_name,
        s.reference_hit_count,
        s.num_interactions,
        bar_word(config.reference_filters.confidence),
        best
    ));
    if s.promiscuity.flagged {
        out.push_str(&format!(
            "{} is a promiscuous protein (hit/enriched ratio is {}%).\n",
            s.gene_name,
            format_percent(&s.promiscuity)
        ));
    }
    render_view_header(out, &s.view);
    out.push_str(&Table::protein_ligands(&s.view.rows).to_aligned());
}

fn render_ligand(
    out: &mut String,
    l: &LigandSummary<'_>,
    protein: &ProteinSummary<'_>,
    config: &EngineConfig,
) {
    out.push_str(&format!("Proteins enriched by {}\n", l.frag_id));
    out.push_str(&format!(
        "{} proteins were enriched by ligand {} (Fc compared to CRF control). {} of those proteins were labelled as hits by applying {} filter set (fS). {} {}\n",
        l.num_detected,
        l.frag_id,
        l.reference_hit_count,
        bar_word(config.reference_filters.confidence),
        best_sentence(&l.selected_rank),
        rank_sentence(&protein.gene_name, &l.selected_rank)
    ));
    if l.promiscuity.flagged {
        out.push_str(&format!(
            "{} is a promiscuous ligand (hit/enriched ratio is {}%).\n",
            l.frag_id,
            format_percent(&l.promiscuity)
        ));
    }
    render_view_header(out, &l.view);
    out.push_str(&Table::ligand_proteins(&l.view.rows).to_aligned());

    if l.mutual_top {
        let n = config.top_n;
        out.push_str(&format!(
            "\n{}-{} interaction: mutual top {n}\n",
            l.frag_id, protein.gene_name
        ));
        out.push_str(&format!(
            "{} is in top {n} Ligand hits for {}. {} is in top {n} Protein hits for {}.\n",
            l.frag_id, protein.gene_name, protein.gene_name, l.frag_id
        ));
    }
}

fn render_gen2_panel(out: &mut String, p: &Gen2Panel<'_>, gen1: &str, gene: &str) {
    out.push_str(&format!(
        "Second generation ligands (Gen2) of {gen1} that compete {gene}\n"
    ));
    out.push_str(&format!(
        "{} Gen2 ligands were screened in competition experiments against Gen1 ligand {}. {}/{} Gen2 ligands of {} pass low filter set (fS2).\n",
        p.num_gen2_ligands,
        gen1,
        p.hits.len(),
        p.num_gen2_ligands,
        gen1
    ));
    out.push_str("Hits (fS2 > 0)\n");
    if !p.hits.is_empty() {
        out.push_str(&Table::gen2_ligands(&p.hits).to_aligned());
    }
    out.push_str("Not hits (fS2 = 0)\n");
    out.push_str(&Table::gen2_ligands(&p.non_hits).to_aligned());
}

fn render_gen2_ligand(
    out: &mut String,
    g: &Gen2LigandSummary<'_>,
    gene: &str,
    config: &EngineConfig,
) {
    out.push_str(&format!("Proteins competed by {}\n", g.gen2_lig));
    out.push_str(&format!(
        "{} proteins were reduced in {} competition experiment (Fc compared to {} control). {} of those proteins are labelled as hits by applying {} filter set (fS2). {} {}\n",
        g.num_competed,
        g.gen2_lig,
        g.gen1_lig,
        g.reference_hit_count,
        bar_word(config.competition_reference_filters.confidence),
        best_sentence(&g.selected_rank),
        rank_sentence(gene, &g.selected_rank)
    ));
    if g.promiscuity.flagged {
        out.push_str(&format!(
            "{} competes broadly (hit/competed ratio is {}%).\n",
            g.gen2_lig,
            format_percent(&g.promiscuity)
        ));
    }
    render_view_header(out, &g.view);
    out.push_str(&Table::gen2_proteins(&g.view.rows).to_aligned());
}

fn render_view_header<R>(out: &mut String, view: &FilteredView<'_, R>) {
    if view.filters_cleared {
        out.push_str("No data to display with selected filters. Applied no filter.\n");
    }
    out.push_str(&format!("Filters: {}\n", view.applied));
}

fn best_sentence(rank: &RankOutcome) -> String {
    match &rank.best {
        Some(best) => format!("{} {} hit.", best, rank.best_text()),
        None => "No hit.".to_string(),
    }
}

fn rank_sentence(gene: &str, rank: &RankOutcome) -> String {
    match rank.rank {
        Some(r) => format!("{} {} {}.", gene, rank.status_text(), r),
        None => format!("{} {}.", gene, rank.status_text()),
    }
}

fn format_percent(p: &Promiscuity) -> String {
    format!("{:.1}", p.percent())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
