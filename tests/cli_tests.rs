use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn gca_etl(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gca-etl"))
        .args(args)
        .current_dir(work_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gca-etl")
}

#[test]
fn test_unknown_category_exits_with_status_1() {
    let temp_dir = TempDir::new().unwrap();

    let output = gca_etl(temp_dir.path(), &["--types", "bogus"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus"));
    assert!(!temp_dir.path().join("kc_dating_data.db").exists());
}

#[test]
fn test_json_output_prints_only_the_report() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");

    let output = gca_etl(
        temp_dir.path(),
        &["--output", "json", "--output-dir", out_dir.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_locations"], 18);
    assert_eq!(report["top_10_locations"].as_array().unwrap().len(), 10);

    let mut files: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "climbing_gyms.json",
            "coworking_spaces.json",
            "meetup_groups.json",
            "university_programs.json",
        ]
    );
}

#[test]
fn test_selected_types_print_summary_and_top_locations() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("kc.db");

    let output = gca_etl(
        temp_dir.path(),
        &[
            "--types",
            "climbing_gyms",
            "--database-path",
            db_path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Kansas City Dating Strategy - Data Scraping Framework"));
    assert!(stdout.contains("📍 Climbing Gyms: 4"));
    assert!(stdout.contains("1. RoKC North Kansas City - Score: 4.2"));
    assert!(!stdout.contains("Meetup"));
    assert!(!stdout.contains("\"top_10_locations\""));
    assert!(db_path.exists());
}
