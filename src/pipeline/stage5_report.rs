use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::engine::DrillDown;
use crate::model::config::EngineConfig;
use crate::pipeline::stage1_protein::ProteinView;
use crate::report::Table;
use crate::report::json::render_drilldown_json;
use crate::report::text::render_drilldown_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render_report(
    drill: &DrillDown<'_>,
    config: &EngineConfig,
    format: ReportFormat,
) -> std::io::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_drilldown_text(drill, config)),
        ReportFormat::Json => render_drilldown_json(drill, config).map_err(std::io::Error::other),
    }
}

/// Writes the narrative, the JSON drill-down and one TSV per rendered table.
/// Returns the written paths in write order.
pub fn write_reports(
    drill: &DrillDown<'_>,
    config: &EngineConfig,
    out_dir: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_drilldown_text(drill, config))?;
    written.push(report_path);

    let json_path = out_dir.join("drilldown.json");
    let json = render_drilldown_json(drill, config).map_err(std::io::Error::other)?;
    write_text(&json_path, &json)?;
    written.push(json_path);

    let mut tables: Vec<(&str, Table)> = Vec::new();
    if let ProteinView::Detected(summary) = &drill.protein {
        tables.push((
            "protein_ligands.tsv",
            Table::protein_ligands(&summary.view.rows),
        ));
    }
    if let Some(ligand) = &drill.ligand {
        tables.push((
            "ligand_proteins.tsv",
            Table::ligand_proteins(&ligand.view.rows),
        ));
    }
    if let Some(panel) = &drill.gen2 {
        tables.push(("gen2_hits.tsv", Table::gen2_ligands(&panel.hits)));
        tables.push(("gen2_non_hits.tsv", Table::gen2_ligands(&panel.non_hits)));
    }
    if let Some(gen2) = &drill.gen2_ligand {
        tables.push((
            "gen2_ligand_proteins.tsv",
            Table::gen2_proteins(&gen2.view.rows),
        ));
    }

    for (name, table) in tables {
        let path = out_dir.join(name);
        write_text(&path, &table.to_tsv())?;
        written.push(path);
    }

    tracing::info!(out_dir = %out_dir.display(), files = written.len(), "wrote reports");
    Ok(written)
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
