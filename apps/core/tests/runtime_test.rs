use std::sync::mpsc;

use songfind_core::catalog::CatalogSnapshot;
use songfind_core::config::Config;
use songfind_core::contract::CoreResponse;
use songfind_core::core_service::CoreService;
use songfind_core::debounce::ManualClock;
use songfind_core::model::{Catalog, CatalogItem};
use songfind_core::navigation::RecordingNavigator;
use songfind_core::runtime::{parse_cli_args, run_with_options, serve_lines, Command};
use songfind_core::transport::TransportResponse;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn parses_search_with_global_options() {
    let options =
        parse_cli_args(&args(&["--config", "songfind.toml", "search", "purple rain", "--json"]))
            .unwrap();

    assert_eq!(
        options.config.as_deref(),
        Some(std::path::Path::new("songfind.toml"))
    );
    match options.command {
        Command::Search { query, json } => {
            assert_eq!(query, "purple rain");
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(parse_cli_args(&args(&["launch"])).is_err());
    assert!(parse_cli_args(&args(&[])).is_err());
}

#[test]
fn build_index_writes_compact_index() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("songbook.json");
    let output = dir.path().join("search_index.json");
    std::fs::write(
        &catalog,
        r#"{"categories": ["Pop"], "songs": [{"id": "song:1", "title": "Halo", "artist": "Beyoncé", "categories": ["Pop"]}]}"#,
    )
    .unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("log_dir = {:?}\n", dir.path().join("logs").to_string_lossy()),
    )
    .unwrap();

    let options = parse_cli_args(&args(&[
        "--config",
        config_path.to_str().unwrap(),
        "--catalog",
        catalog.to_str().unwrap(),
        "build-index",
        "--output",
        output.to_str().unwrap(),
    ]))
    .unwrap();
    run_with_options(options).unwrap();

    let index = songfind_core::catalog::load_index(&output).unwrap();
    assert_eq!(index.songs.len(), 1);
    assert_eq!(index.songs[0].a, "beyonce");
}

#[test]
fn pending_pass_is_flushed_when_input_closes() {
    let snapshot = CatalogSnapshot::new(Catalog::new(vec![CatalogItem::new(
        "song:halo",
        "Halo",
        "Beyoncé",
        &["Pop"],
    )]));
    let mut service = CoreService::with_parts(
        Config::default(),
        snapshot,
        ManualClock::default(),
        RecordingNavigator::default(),
    )
    .unwrap();

    let (sender, receiver) = mpsc::channel();
    sender
        .send(r#"{"kind":"input","payload":{"query":"halo"}}"#.to_string())
        .unwrap();
    drop(sender);

    let mut out = Vec::new();
    serve_lines(&mut service, &receiver, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let responses: Vec<TransportResponse> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    match &responses[0] {
        TransportResponse::Ok {
            response: CoreResponse::Selection(selection),
        } => {
            assert!(selection.pass_pending);
            assert!(!selection.open);
        }
        other => panic!("unexpected response: {other:?}"),
    }
    match &responses[1] {
        TransportResponse::Ok {
            response: CoreResponse::Selection(selection),
        } => {
            assert!(!selection.pass_pending);
            assert!(selection.open);
            assert_eq!(selection.suggestions[0].reference, "song:halo");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}
