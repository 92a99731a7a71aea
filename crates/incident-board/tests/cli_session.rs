//! Commands run back to back against one data directory, as separate
//! processes would.

use incident_board::cli;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

fn run(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["incident-board", "--data-dir", dir.to_str().unwrap()];
    argv.extend_from_slice(args);
    let matches = cli::command().try_get_matches_from(argv)?;
    let mut out = Vec::new();
    cli::run(&matches, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn listed_ids(dir: &Path, extra: &[&str]) -> Vec<u64> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let value: serde_json::Value = serde_json::from_str(&run(dir, &args).unwrap()).unwrap();
    value["incidents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn first_run_seeds_and_saves() {
    let dir = tempdir().unwrap();

    let ids = listed_ids(dir.path(), &["--sort", "Oldest First"]);
    assert_eq!(ids, vec![1, 3, 5, 2, 4, 7, 6]);
    assert!(dir.path().join("ai-safety-incidents.json").exists());
}

#[test]
fn report_survives_into_next_run() {
    let dir = tempdir().unwrap();

    let out = run(
        dir.path(),
        &["report", "--title", "Jailbreak", "--description", "Role-play bypass", "--severity", "High"],
    )
    .unwrap();
    assert!(out.starts_with("Reported incident #8"));

    let ids = listed_ids(dir.path(), &["--severity", "High", "--sort", "Oldest First"]);
    assert_eq!(ids, vec![2, 4, 8]);
}

#[test]
fn invalid_report_changes_nothing() {
    let dir = tempdir().unwrap();
    run(dir.path(), &["list"]).unwrap();
    let path = dir.path().join("ai-safety-incidents.json");
    let before = std::fs::read_to_string(&path).unwrap();

    let err = run(dir.path(), &["report", "--title", "  ", "--description", "x"]).unwrap_err();
    assert!(format!("{err:#}").contains("Title is required"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn update_and_delete_round_trip_through_disk() {
    let dir = tempdir().unwrap();

    run(dir.path(), &["update", "--id", "3", "--severity", "High"]).unwrap();
    run(dir.path(), &["delete", "--id", "1"]).unwrap();

    let ids = listed_ids(dir.path(), &["--severity", "high", "--sort", "oldest"]);
    assert_eq!(ids, vec![3, 2, 4]);
    assert!(run(dir.path(), &["delete", "--id", "1"]).is_err());
}

#[test]
fn summary_json_counts_everything() {
    let dir = tempdir().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&run(dir.path(), &["summary", "--json"]).unwrap()).unwrap();

    assert_eq!(value["total"], 7);
    assert_eq!(value["counts"], serde_json::json!({"Low": 2, "Medium": 3, "High": 2}));
    assert_eq!(value["daily"].as_array().unwrap().len(), 7);
    assert_eq!(value["recent"].as_array().unwrap().len(), 3);
}

#[test]
fn config_file_selects_slot_and_disables_seed() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("board.toml");
    std::fs::write(
        &config,
        "[store]\nstorage_key = \"lab\"\nseed_when_missing = false\n",
    )
    .unwrap();
    let config = config.to_str().unwrap();

    assert!(listed_ids(dir.path(), &["--config", config]).is_empty());
    run(
        dir.path(),
        &["--config", config, "report", "--title", "t", "--description", "d"],
    )
    .unwrap();

    assert_eq!(listed_ids(dir.path(), &["--config", config]), vec![1]);
    assert!(dir.path().join("lab.json").exists());
    assert!(!dir.path().join("ai-safety-incidents.json").exists());
}

#[test]
fn corrupt_file_falls_back_to_seed() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("ai-safety-incidents.json"), "{ not json").unwrap();

    assert_eq!(listed_ids(dir.path(), &[]).len(), 7);
}
