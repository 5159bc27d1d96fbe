//! Read-only JSON data file mode (`--data`).

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rac, setup_bundle, temp_out};

#[test]
fn test_list_from_bundle() {
    let bundle = setup_bundle("list_bundle");

    rac()
        .args(["--data", &bundle, "list"])
        .assert()
        .success()
        .stdout(contains("Activities (2)"))
        .stdout(contains("Capture the flag night"))
        .stdout(contains("Network lab refresh"));
}

#[test]
fn test_list_from_bundle_with_filters() {
    let bundle = setup_bundle("filter_bundle");

    rac()
        .args(["--data", &bundle, "list", "--theme", "Security"])
        .assert()
        .success()
        .stdout(contains("Activities (1)"))
        .stdout(contains("Capture the flag night"))
        .stdout(contains("Network lab refresh").not());
}

#[test]
fn test_bundle_details_render_both_reflection_shapes() {
    let bundle = setup_bundle("details_bundle");

    rac()
        .args(["--data", &bundle, "list", "--details"])
        .assert()
        .success()
        // structured variant
        .stdout(contains("Context"))
        .stdout(contains("Student CTF event"))
        .stdout(contains("Skills developed"))
        // single-blob variant
        .stdout(contains("Plain text write-up, single blob variant."))
        // detailed proof with attached file
        .stdout(contains("Scoreboard screenshot"))
        .stdout(contains("ctf.png"));
}

#[test]
fn test_stats_from_bundle_are_trusted_as_is() {
    let bundle = setup_bundle("stats_bundle");

    // The file claims 999h even though the activities sum to 10h: the
    // precomputed block wins in this mode.
    rac()
        .args(["--data", &bundle, "stats"])
        .assert()
        .success()
        .stdout(contains("Hours:      999/60h"))
        .stdout(contains("Activities: 2/6"))
        .stdout(contains("Themes:     2/6"));
}

#[test]
fn test_validate_from_bundle_prints_preformatted_checks() {
    let bundle = setup_bundle("validate_bundle");

    rac()
        .args(["--data", &bundle, "validate"])
        .assert()
        .success()
        .stdout(contains("❌ Missing 50 hours"))
        .stdout(contains("❌ Missing 4 themes"))
        .stdout(contains("Security: 6/10h"));
}

#[test]
fn test_suggest_from_bundle() {
    let bundle = setup_bundle("suggest_bundle");

    rac()
        .args(["--data", &bundle, "suggest"])
        .assert()
        .success()
        .stdout(contains("Development"))
        .stdout(contains("Join a hackathon"));
}

#[test]
fn test_mutations_rejected_in_bundle_mode() {
    let bundle = setup_bundle("mutate_bundle");

    rac()
        .args([
            "--data", &bundle, "add", "Not allowed", "--theme", "Security", "--hours", "2",
        ])
        .assert()
        .failure()
        .stderr(contains("read-only"));

    rac()
        .args(["--data", &bundle, "del", "act_bundle_1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("read-only"));

    // The file itself is untouched
    let content = fs::read_to_string(&bundle).expect("bundle still readable");
    assert!(content.contains("Capture the flag night"));
}

#[test]
fn test_missing_bundle_is_a_load_failure() {
    rac()
        .args(["--data", "/nonexistent/bundle.json", "list"])
        .assert()
        .failure()
        .stderr(contains("Failed to load activity data"));
}

#[test]
fn test_corrupt_bundle_is_a_load_failure() {
    let path = temp_out("corrupt_bundle", "json");
    fs::write(&path, "{ this is not json").expect("write corrupt file");

    rac()
        .args(["--data", &path, "stats"])
        .assert()
        .failure()
        .stderr(contains("Failed to load activity data"));
}

#[test]
fn test_export_works_from_bundle() {
    let bundle = setup_bundle("export_bundle");
    let out = temp_out("export_bundle", "json");

    rac()
        .args([
            "--data", &bundle, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Capture the flag night"));
}
