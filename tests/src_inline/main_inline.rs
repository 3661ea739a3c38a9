use super::*;

fn view_args(extra: &[&str]) -> ViewArgs {
    let mut argv = vec!["kira-chemprot", "view", "--data", "data", "--protein", " P11111 "];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::View(args) => args,
        other => panic!("expected view, got {other:?}"),
    }
}

#[test]
fn test_view_defaults_follow_assay_option_order() {
    let args = view_args(&[]);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.out.is_none());

    let selection = args.selection();
    assert_eq!(selection.accession, "P11111");
    assert_eq!(selection.ligand, None);
    assert_eq!(selection.gen2_ligand, None);
    assert_eq!(selection.filters, FilterSet::default_for(Assay::Enrichment));
    assert_eq!(
        selection.competition_filters,
        FilterSet::default_for(Assay::Competition)
    );
}

#[test]
fn test_view_filter_overrides() {
    let args = view_args(&[
        "--ligand",
        "C027",
        "--gen2",
        "G01",
        "--p-value",
        "<0.01",
        "--confidence",
        "no filter",
        "--fp-confidence",
        "High (hits)",
        "--format",
        "json",
    ]);
    assert_eq!(args.format, OutputFormat::Json);

    let selection = args.selection();
    assert_eq!(selection.ligand.as_deref(), Some("C027"));
    assert_eq!(selection.gen2_ligand.as_deref(), Some("G01"));
    assert_eq!(selection.filters.p_value, PValueFilter::Below001);
    assert_eq!(selection.filters.adj_p_value, AdjPValueFilter::Below025);
    assert_eq!(selection.filters.confidence, ConfidenceFilter::NoFilter);
    assert_eq!(
        selection.competition_filters.confidence,
        ConfidenceFilter::HighHits
    );
}

#[test]
fn test_invalid_filter_label_rejected() {
    let result = Cli::try_parse_from([
        "kira-chemprot",
        "view",
        "--data",
        "data",
        "--protein",
        "P11111",
        "--p-value",
        "<0.2",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_search_and_global_flags() {
    let cli = Cli::try_parse_from(["kira-chemprot", "-vv", "search", "--data", "d", "kinase"])
        .unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    match cli.command {
        Command::Search(args) => {
            assert_eq!(args.query, "kinase");
            assert_eq!(args.limit, 20);
            assert_eq!(args.data.data, PathBuf::from("d"));
            assert!(args.data.config.is_none());
        }
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn test_filter_catalogue_lists_both_assays() {
    let text = render_filter_catalogue();
    assert!(text.contains("Enrichment (Gen1)"));
    assert!(text.contains("Competition (Gen2)"));
    assert!(text.contains("'< 0.05', 'no filter', '< 0.01'"));
    assert!(text.contains("'Medium (hits)', 'no filter', 'Low', 'High (hits)'"));
    assert!(text.contains("filter set (fS2)"));
    assert!(text.contains("Fc < -1.65"));
}

#[test]
fn test_run_view_writes_reports() {
    let data = tempfile::tempdir().unwrap();
    std::fs::write(
        data.path().join("proteinNames.tsv"),
        "UniProtID\tDescription\nP11111\tAlpha kinase ALPHA\n",
    )
    .unwrap();
    std::fs::write(
        data.path().join("finalScreen.tsv"),
        "accession\tgeneName\tfragId\tl2fc\tl2fcM\tprotHits\tligHits\tml10p\tml10adjP\tmdfClass\n\
         P11111\tALPHA\tC027\t3.0\t2.5\t4\t3\t2.5\t1.5\t3\n",
    )
    .unwrap();
    std::fs::write(
        data.path().join("finalFp.tsv"),
        "accession\tgeneName\tfragId\tl2fc\tl2fcM\tprotHits\tligHits\tml10p\tml10adjP\tmdfClass\tgen1Lig\thitRank\n\
         P11111\tALPHA\tG01\t-3.0\t-2.5\t2\t1\t2.5\t1.5\t3\tC027\t1\n",
    )
    .unwrap();
    let out = tempfile::tempdir().unwrap();

    let data_dir = data.path().to_string_lossy().into_owned();
    let out_dir = out.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "kira-chemprot",
        "view",
        "--data",
        data_dir.as_str(),
        "--protein",
        "P11111",
        "--out",
        out_dir.as_str(),
    ])
    .unwrap();
    run(cli).unwrap();

    let report = std::fs::read_to_string(out.path().join("report.txt")).unwrap();
    assert!(report.contains("1 (out of 407 screened) Gen1 ligands enrich ALPHA."));
    assert!(out.path().join("gen2_ligand_proteins.tsv").exists());
}

#[test]
fn test_missing_data_dir_is_input_error() {
    let cli = Cli::try_parse_from([
        "kira-chemprot",
        "search",
        "--data",
        "/nonexistent/kira-chemprot-data",
        "kinase",
    ])
    .unwrap();
    assert!(matches!(run(cli), Err(AppError::Input(_))));
}
