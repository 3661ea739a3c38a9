pub mod json;
pub mod text;

use crate::model::filters::ConfidenceFilter;
use crate::model::records::ScreenRow;

/// A rendered grid: column headers plus pre-formatted cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Ligands enriching one protein.
    pub fn protein_ligands<R: ScreenRow>(rows: &[&R]) -> Self {
        Self {
            headers: vec![
                "Ligand",
                "Fc(log2)",
                "Fc Median adjusted",
                "# Protein Hits",
                "fS",
            ],
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.frag_id().to_string(),
                        format_f64_2(r.l2fc()),
                        format_f64_2(r.interaction().l2fc_m),
                        r.prot_hits().to_string(),
                        r.mdf_class().to_string(),
                    ]
                })
                .collect(),
        }
    }

    /// Proteins enriched by one Gen1 ligand.
    pub fn ligand_proteins<R: ScreenRow>(rows: &[&R]) -> Self {
        Self {
            headers: vec![
                "Protein",
                "Gene",
                "Fc(log2)",
                "Fc Median adjusted",
                "# Ligand Hits",
                "fS",
            ],
            rows: protein_cells(rows),
        }
    }

    /// Gen2 ligands competing one protein.
    pub fn gen2_ligands<R: ScreenRow>(rows: &[&R]) -> Self {
        Self {
            headers: vec![
                "Gen2",
                "Fc(log2)",
                "Fc Median adjusted",
                "# Gen2 Protein Hits",
                "fS2",
            ],
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.frag_id().to_string(),
                        format_f64_2(r.l2fc()),
                        format_f64_2(r.interaction().l2fc_m),
                        r.prot_hits().to_string(),
                        r.mdf_class().to_string(),
                    ]
                })
                .collect(),
        }
    }

    /// Proteins competed by one Gen2 ligand.
    pub fn gen2_proteins<R: ScreenRow>(rows: &[&R]) -> Self {
        Self {
            headers: vec![
                "Protein",
                "Gene",
                "Fc(log2)",
                "Fc Median adjusted",
                "# Gen2 Ligand Hits",
                "fS2",
            ],
            rows: protein_cells(rows),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_tsv(&self) -> String {
        let mut out = self.headers.join("\t");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    /// Left-aligned, space-padded columns for terminal output.
    pub fn to_aligned(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }
        let mut out = String::new();
        push_aligned(&mut out, self.headers.iter().copied(), &widths);
        for row in &self.rows {
            push_aligned(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn protein_cells<R: ScreenRow>(rows: &[&R]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.accession().to_string(),
                r.gene_name().to_string(),
                format_f64_2(r.l2fc()),
                format_f64_2(r.interaction().l2fc_m),
                r.lig_hits().to_string(),
                r.mdf_class().to_string(),
            ]
        })
        .collect()
}

fn push_aligned<'s>(out: &mut String, cells: impl Iterator<Item = &'s str>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Lower-case name of the bar a confidence filter sets, used in sentences.
pub fn bar_word(confidence: ConfidenceFilter) -> &'static str {
    match confidence {
        ConfidenceFilter::NoFilter => "no",
        ConfidenceFilter::Low | ConfidenceFilter::LowHits => "low",
        ConfidenceFilter::MediumHits => "medium",
        ConfidenceFilter::HighHits => "high",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
