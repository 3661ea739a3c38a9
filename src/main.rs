use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use kira_chemprot::engine::{ScreeningEngine, Selection};
use kira_chemprot::input::InputError;
use kira_chemprot::logging::init_tracing;
use kira_chemprot::model::confidence::ConfidenceClass;
use kira_chemprot::model::config::{ConfigError, EngineConfig};
use kira_chemprot::model::filters::{
    AdjPValueFilter, Assay, ConfidenceFilter, FilterSet, PValueFilter,
};
use kira_chemprot::pipeline::stage5_report::{ReportFormat, render_report, write_reports};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "kira-chemprot",
    version,
    about = "Filter and rank ligand-protein interactions from a chemical-proteomics screen"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find proteins by accession, gene name or description.
    Search(SearchArgs),
    /// Drill down from a protein to its ligands and Gen2 competitors.
    View(ViewArgs),
    /// List filter options and confidence-class criteria.
    Filters,
}

#[derive(Debug, Args)]
struct DataArgs {
    /// Directory holding proteinNames.tsv, finalScreen.tsv and finalFp.tsv (optionally .gz).
    #[arg(long)]
    data: PathBuf,
    /// JSON file overriding dataset constants.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[command(flatten)]
    data: DataArgs,
    query: String,
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

#[derive(Debug, Args)]
struct ViewArgs {
    #[command(flatten)]
    data: DataArgs,
    /// UniProt accession of the selected protein.
    #[arg(long)]
    protein: String,
    /// Gen1 ligand; defaults to the best-ranked ligand shown for the protein.
    #[arg(long)]
    ligand: Option<String>,
    /// Gen2 ligand; defaults to the first competitor listed.
    #[arg(long)]
    gen2: Option<String>,
    #[arg(long)]
    p_value: Option<PValueFilter>,
    #[arg(long)]
    adj_p_value: Option<AdjPValueFilter>,
    #[arg(long)]
    confidence: Option<ConfidenceFilter>,
    #[arg(long)]
    fp_p_value: Option<PValueFilter>,
    #[arg(long)]
    fp_adj_p_value: Option<AdjPValueFilter>,
    #[arg(long)]
    fp_confidence: Option<ConfidenceFilter>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also write report.txt, drilldown.json and table TSVs here.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl ViewArgs {
    fn selection(&self) -> Selection {
        let enrichment = FilterSet::default_for(Assay::Enrichment);
        let competition = FilterSet::default_for(Assay::Competition);
        let mut selection = Selection::protein(self.protein.trim())
            .with_filters(FilterSet::new(
                self.p_value.unwrap_or(enrichment.p_value),
                self.adj_p_value.unwrap_or(enrichment.adj_p_value),
                self.confidence.unwrap_or(enrichment.confidence),
            ))
            .with_competition_filters(FilterSet::new(
                self.fp_p_value.unwrap_or(competition.p_value),
                self.fp_adj_p_value.unwrap_or(competition.adj_p_value),
                self.fp_confidence.unwrap_or(competition.confidence),
            ));
        if let Some(ligand) = &self.ligand {
            selection = selection.with_ligand(ligand.trim());
        }
        if let Some(gen2) = &self.gen2 {
            selection = selection.with_gen2_ligand(gen2.trim());
        }
        selection
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Search(args) => run_search(&args),
        Command::View(args) => run_view(&args),
        Command::Filters => {
            print!("{}", render_filter_catalogue());
            Ok(())
        }
    }
}

fn load_engine(data: &DataArgs) -> Result<ScreeningEngine, AppError> {
    let config = match &data.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default_v1(),
    };
    Ok(ScreeningEngine::load(&data.data, config)?)
}

fn run_search(args: &SearchArgs) -> Result<(), AppError> {
    let engine = load_engine(&args.data)?;
    let matches = engine.tables().directory.search(&args.query);
    if matches.is_empty() {
        tracing::warn!(query = %args.query, "no proteins match");
    }
    for entry in matches.iter().take(args.limit) {
        println!("{}\t{}", entry.accession, entry.description);
    }
    if matches.len() > args.limit {
        tracing::info!(
            shown = args.limit,
            total = matches.len(),
            "search results truncated; raise --limit to see more"
        );
    }
    Ok(())
}

fn run_view(args: &ViewArgs) -> Result<(), AppError> {
    let engine = load_engine(&args.data)?;
    let selection = args.selection();
    tracing::info!(
        accession = %selection.accession,
        filters = %selection.filters,
        competition_filters = %selection.competition_filters,
        "running drill-down"
    );
    let drill = engine.drill_down(&selection);

    print!("{}", render_report(&drill, engine.config(), args.format.into())?);
    if args.format == OutputFormat::Json {
        println!();
    }

    if let Some(out_dir) = &args.out {
        write_reports(&drill, engine.config(), out_dir)?;
    }
    Ok(())
}

fn render_filter_catalogue() -> String {
    let mut out = String::new();
    for (assay, title, class_label) in [
        (Assay::Enrichment, "Enrichment (Gen1)", "fS"),
        (Assay::Competition, "Competition (Gen2)", "fS2"),
    ] {
        out.push_str(&format!("{title}\n"));
        out.push_str(&format!(
            "  P value:          {}\n",
            join_labels(PValueFilter::options(assay).iter().map(|o| o.label()))
        ));
        out.push_str(&format!(
            "  adjusted P value: {}\n",
            join_labels(AdjPValueFilter::options(assay).iter().map(|o| o.label()))
        ));
        out.push_str(&format!(
            "  filter set ({class_label}):  {}\n",
            join_labels(ConfidenceFilter::options(assay).iter().map(|o| o.label()))
        ));
        for class in ConfidenceClass::ALL {
            out.push_str(&format!(
                "    {}. {}\n",
                class.value(),
                class.criteria(assay)
            ));
        }
    }
    out
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|l| format!("'{l}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
