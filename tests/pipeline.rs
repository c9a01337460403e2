use std::{fs, path::Path};

use geo_metric::{GeoAnalysis, GeoConfig, GeoError, GeoParams};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Three districts in a line, two parties, headerless files.
fn line_config(dir: &Path) -> GeoConfig {
    GeoConfig {
        election: write(dir, "election.csv", "A,70,30\nB,60,40\nC,45,55\n"),
        edges: write(dir, "edges.csv", "A,B\nB,C\nC,B\n"),
        output_dir: dir.join("out"),
        output_prefix: "Line".into(),
        ..GeoConfig::default()
    }
}

#[test]
fn scores_and_tables_for_a_line_map() {
    let dir = tempfile::tempdir().unwrap();
    let config = line_config(dir.path());

    let analysis = GeoAnalysis::from_config(&config, 0).unwrap();
    let results = analysis.compute_all();
    assert_eq!(results[0].geo_score, 1);
    assert_eq!(results[0].newly_competitive[0].as_str(), "C");

    analysis.write_reports(&results, &config.output_dir, &config.output_prefix, None, 0).unwrap();

    let summary = fs::read_to_string(config.output_dir.join("1Line_GEO_0.55_0.5.csv")).unwrap();
    let mut lines = summary.lines();
    assert_eq!(lines.next(), Some("GEO score,Newly Competitive,Contributing Wins,Contributing Losses"));
    assert_eq!(lines.next(), Some("1,C,B,"));

    let audit = fs::read_to_string(config.output_dir.join("1_aux_Line_GEO_0.55_0.5.csv")).unwrap();
    let rows = audit.lines().collect::<Vec<_>>();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], "C,0.45000,0.52500,B,0.05000,W");
}

#[test]
fn non_numeric_labels_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeoConfig {
        election: write(dir.path(), "election.csv", "007,70,30\n07,60,40\nNorth,45,55\n"),
        edges: write(dir.path(), "edges.csv", "007,07\n07,North\n"),
        ..GeoConfig::default()
    };

    let analysis = GeoAnalysis::from_config(&config, 0).unwrap();
    let result = analysis.compute_party(&analysis.parties()[0]);
    assert_eq!(result.newly_competitive[0].as_str(), "North");
    assert_eq!(result.contributing_won[0].as_str(), "07");
}

#[test]
fn zero_vote_district_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeoConfig {
        election: write(dir.path(), "election.csv", "A,70,30\nB,0,0\n"),
        edges: write(dir.path(), "edges.csv", "A,B\n"),
        output_dir: dir.path().join("out"),
        ..GeoConfig::default()
    };

    let err = GeoAnalysis::from_config(&config, 0).unwrap_err();
    assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::ZeroVotes { .. })));
    assert!(!config.output_dir.exists());
}

#[test]
fn unknown_edge_district_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeoConfig {
        election: write(dir.path(), "election.csv", "A,70,30\nB,40,60\n"),
        edges: write(dir.path(), "edges.csv", "A,B\nB,Z\n"),
        ..GeoConfig::default()
    };

    let err = GeoAnalysis::from_config(&config, 0).unwrap_err();
    assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::InputShape(_))));
}

#[test]
fn inverted_thresholds_are_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeoConfig {
        params: GeoParams { min_cvs: 0.6, max_cvs: 0.55, ..GeoParams::default() },
        ..line_config(dir.path())
    };

    let err = GeoAnalysis::from_config(&config, 0).unwrap_err();
    assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::Config(_))));
}

#[test]
fn selected_party_columns_limit_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeoConfig {
        election: write(dir.path(), "election4.csv", "A,70,30,1\nB,60,40,1\nC,45,55,1\n"),
        party_columns: Some(vec![2]),
        ..line_config(dir.path())
    };

    let analysis = GeoAnalysis::from_config(&config, 0).unwrap();
    let results = analysis.compute_all();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].party.label, "2");

    let written = analysis.write_reports(&results, &config.output_dir, "", None, 0).unwrap();
    assert_eq!(written.len(), 2);
    assert!(config.output_dir.join("2_GEO_0.55_0.5.csv").exists());
}
