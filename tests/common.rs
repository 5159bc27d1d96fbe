#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rac() -> Command {
    cargo_bin_cmd!("ractivities")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ractivities.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (which seeds the 4 default activities)
pub fn init_db(db_path: &str) {
    rac()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one extra activity through the CLI
pub fn add_activity(db_path: &str, title: &str, theme: &str, hours: &str, date: &str) {
    rac()
        .args([
            "--db", db_path, "add", title, "--theme", theme, "--hours", hours, "--date", date,
            "--status", "completed",
        ])
        .assert()
        .success();
}

/// Minimal JSON data bundle used by the read-only mode tests.
/// The precomputed statistics are intentionally different from what the
/// engines would derive, so tests can prove they are trusted as-is.
pub fn sample_bundle_json() -> String {
    r#"{
  "activities": [
    {
      "id": "act_bundle_1",
      "theme": "Security",
      "title": "Capture the flag night",
      "type": "Hackathon",
      "hours": 6,
      "date": "2024-05-12",
      "status": "completed",
      "proof": { "description": "Scoreboard screenshot", "file": "ctf.png" },
      "description": "Overnight CTF with the student security club.",
      "reflection": {
        "context": "Student CTF event",
        "facts": "Solved 5 web and 2 crypto challenges",
        "projectLink": "Security operations career path",
        "skills": "Web exploitation, teamwork",
        "conclusion": "Would compete again next year"
      },
      "skills": ["CTF", "Web security"]
    },
    {
      "id": "act_bundle_2",
      "theme": "Networks",
      "title": "Network lab refresh",
      "type": "Other",
      "hours": 4,
      "date": "2024-06-01",
      "status": "pending",
      "proof": { "description": "Lab report" },
      "description": "Re-cabled and documented the practice lab.",
      "reflection": "Plain text write-up, single blob variant.",
      "skills": ["Cabling"]
    }
  ],
  "statistics": {
    "currentTotalHours": 999,
    "themesCount": 2,
    "activitiesCount": 2,
    "completionPercentage": 17.0
  },
  "validation": {
    "hoursCheck": "❌ Missing 50 hours",
    "themesCheck": "❌ Missing 4 themes",
    "activitiesCheck": "❌ Missing 4 activities",
    "themeDistribution": { "Security": 6, "Networks": 4 }
  },
  "suggestions": {
    "missingThemes": ["Development", "Soft Skills"],
    "recommendedActivities": ["Join a hackathon", "Give a lightning talk"]
  }
}"#
    .to_string()
}

/// Write the sample bundle to a temp file and return its path
pub fn setup_bundle(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bundle.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, sample_bundle_json()).expect("write bundle");
    p
}
