use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

struct GoldenCase {
    golden: &'static str,
    args: &'static [&'static str],
    fixture: Option<&'static str>,
}

const CASES: &[GoldenCase] = &[
    GoldenCase {
        golden: "bucket_places.txt",
        args: &[
            "bucket",
            "--kind",
            "places",
            "--start",
            "2024-01-01",
            "--days",
            "4",
            "--output-format",
            "text",
        ],
        fixture: Some("places.json"),
    },
    GoldenCase {
        golden: "bucket_notes.json",
        args: &[
            "bucket",
            "--kind",
            "notes",
            "--start",
            "2024-01-01T08:00:00Z",
            "--days",
            "3",
        ],
        fixture: Some("notes.json"),
    },
    GoldenCase {
        golden: "window_leap.txt",
        args: &["window", "--start", "2024-02-27", "--end", "2024-03-01"],
        fixture: None,
    },
    GoldenCase {
        golden: "events_places.json",
        args: &["events"],
        fixture: Some("places.json"),
    },
    GoldenCase {
        golden: "ics_places.ics",
        args: &[
            "ics",
            "--stamp",
            "2024-06-01T12:00:00Z",
            "--organizer-name",
            "Jane Doe",
            "--organizer-email",
            "jane@example.com",
        ],
        fixture: Some("places.json"),
    },
];

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    project_root().join("fixtures")
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

fn run_daybucket(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daybucket"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute daybucket")
}

#[test]
fn golden_output() {
    let golden = golden_dir();

    for case in CASES {
        let mut args: Vec<String> = case.args.iter().map(|a| a.to_string()).collect();
        if let Some(fixture) = case.fixture {
            args.push("--input".to_string());
            args.push(fixture_dir().join(fixture).to_string_lossy().into_owned());
        }
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = run_daybucket(&arg_refs);

        assert!(
            output.status.success(),
            "daybucket failed for {}: {}",
            case.golden,
            String::from_utf8_lossy(&output.stderr)
        );

        let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");
        let golden_path = golden.join(case.golden);

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots",
                case.golden
            );
        }
    }
}

#[test]
fn negative_days_is_input_error() {
    let output = run_daybucket(&[
        "bucket",
        "--start",
        "2024-01-01",
        "--days",
        "-1",
        "--input",
        fixture_dir().join("places.json").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("JSON error envelope");
    assert_eq!(envelope["command"], "bucket");
    assert_eq!(envelope["exit_code"], 2);
    assert!(
        envelope["error"]
            .as_str()
            .unwrap()
            .contains("non-negative")
    );
}

#[test]
fn window_error_envelope_names_window() {
    let output = run_daybucket(&[
        "window",
        "--start",
        "2024-03-01",
        "--end",
        "2024-02-01",
        "--output-format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("JSON error envelope");
    assert_eq!(envelope["command"], "window");
    assert!(envelope["error"].as_str().unwrap().contains("before start"));
}

#[test]
fn window_json_output() {
    let output = run_daybucket(&[
        "window",
        "--start",
        "2024-02-28T23:00:00Z",
        "--days",
        "2",
        "--output-format",
        "json",
    ]);

    assert!(output.status.success());
    let window: serde_json::Value = serde_json::from_slice(&output.stdout).expect("window JSON");
    assert_eq!(
        window,
        serde_json::json!({
            "start": "2024-02-28",
            "number_of_days": 2,
            "days": ["2024-02-28", "2024-02-29"]
        })
    );
}

#[test]
fn missing_input_is_runtime_error() {
    let output = run_daybucket(&[
        "bucket",
        "--start",
        "2024-01-01",
        "--days",
        "3",
        "--output-format",
        "text",
        "--input",
        "does/not/exist.json",
    ]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Failed to read file"));
}

#[test]
fn malformed_json_is_input_error() {
    let output = run_daybucket(&[
        "events",
        "--output-format",
        "text",
        "--input",
        fixture_dir().join("malformed.json").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid record JSON"));
}

#[test]
fn unknown_kind_is_input_error() {
    let output = run_daybucket(&[
        "bucket",
        "--kind",
        "adventures",
        "--start",
        "2024-01-01",
        "--days",
        "3",
        "--output-format",
        "text",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid kind 'adventures'"));
}

#[test]
fn zero_day_window_prints_empty_map() {
    let output = run_daybucket(&[
        "bucket",
        "--start",
        "2024-01-01",
        "--days",
        "0",
        "--input",
        fixture_dir().join("places.json").to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "{}\n");
}
