use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_activity, init_db, rac, setup_test_db};

#[test]
fn test_init_seeds_default_activities() {
    let db_path = setup_test_db("init_seeds");

    rac()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store ready with 4 activities"));

    rac()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Activities (4)"))
        .stdout(contains("Cybersecurity challenge hackathon"))
        .stdout(contains("Custom gaming PC build"));
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_list");
    init_db(&db_path);

    add_activity(&db_path, "Rust meetup talk", "Communication", "3", "2024-05-02");

    rac()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Activities (5)"))
        .stdout(contains("Rust meetup talk"));
}

#[test]
fn test_list_filter_by_theme() {
    let db_path = setup_test_db("filter_theme");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "list", "--theme", "Hardware"])
        .assert()
        .success()
        .stdout(contains("Activities (2)"))
        .stdout(contains("Smartphone repairs for private clients"))
        .stdout(contains("Custom gaming PC build"))
        .stdout(contains("Cybersecurity challenge hackathon").not());
}

#[test]
fn test_list_filter_by_status() {
    let db_path = setup_test_db("filter_status");
    init_db(&db_path);

    // The seed is all completed; add one draft
    rac()
        .args([
            "--db",
            &db_path,
            "add",
            "IT law essay outline",
            "--theme",
            "IT Law",
            "--hours",
            "2",
            "--status",
            "draft",
        ])
        .assert()
        .success();

    rac()
        .args(["--db", &db_path, "list", "--status", "draft"])
        .assert()
        .success()
        .stdout(contains("Activities (1)"))
        .stdout(contains("IT law essay outline"));
}

#[test]
fn test_list_search_matches_theme() {
    let db_path = setup_test_db("search_theme");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "list", "--search", "hardware"])
        .assert()
        .success()
        .stdout(contains("Activities (2)"))
        .stdout(contains("Smartphone repairs for private clients"))
        .stdout(contains("Custom gaming PC build"));
}

#[test]
fn test_list_sorted_by_date_desc_by_default() {
    let db_path = setup_test_db("sort_default");
    init_db(&db_path);

    let out = rac().args(["--db", &db_path, "list"]).assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();

    // Seed dates: 2024-04-05 (lab) is the most recent, 2024-01-20 (PC) the oldest
    let lab = stdout.find("Electronics lab").expect("lab row");
    let pc = stdout.find("Custom gaming PC build").expect("pc row");
    assert!(lab < pc, "most recent activity should be listed first");
}

#[test]
fn test_list_sorted_by_hours_asc() {
    let db_path = setup_test_db("sort_hours");
    init_db(&db_path);

    let out = rac()
        .args(["--db", &db_path, "list", "--sort", "hours-asc"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();

    let lab = stdout.find("Electronics lab").expect("lab row (2h)");
    let hackathon = stdout
        .find("Cybersecurity challenge hackathon")
        .expect("hackathon row (10h)");
    assert!(lab < hackathon, "2h activity should come before the 10h one");
}

#[test]
fn test_list_details_shows_reflection() {
    let db_path = setup_test_db("details");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "list", "--details"])
        .assert()
        .success()
        .stdout(contains("Reflection"))
        .stdout(contains("Participation certificate"))
        .stdout(contains("Skills:"));
}

#[test]
fn test_del_removes_activity() {
    let db_path = setup_test_db("del_ok");
    init_db(&db_path);

    // Grab an id from the details view
    let out = rac()
        .args(["--db", &db_path, "list", "--details"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    let id = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("id: "))
        .expect("an id line")
        .to_string();

    rac()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rac()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Activities (3)"));
}

#[test]
fn test_del_unknown_id_fails_and_keeps_list() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "del", "act_does_not_exist", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No activity found with id act_does_not_exist"));

    rac()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Activities (4)"));
}

#[test]
fn test_edit_updates_fields_and_keeps_id() {
    let db_path = setup_test_db("edit_ok");
    init_db(&db_path);

    let out = rac()
        .args(["--db", &db_path, "list", "--details"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    let id = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("id: "))
        .expect("an id line")
        .to_string();

    rac()
        .args([
            "--db",
            &db_path,
            "edit",
            &id,
            "--title",
            "Renamed activity",
            "--hours",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("Activity updated: Renamed activity"));

    rac()
        .args(["--db", &db_path, "list", "--details"])
        .assert()
        .success()
        .stdout(contains("Renamed activity"))
        .stdout(contains(&id));
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "edit", "act_nope", "--title", "X"])
        .assert()
        .failure()
        .stderr(contains("No activity found with id act_nope"));
}

#[test]
fn test_add_rejects_out_of_range_hours() {
    let db_path = setup_test_db("hours_range");
    init_db(&db_path);

    rac()
        .args([
            "--db", &db_path, "add", "Marathon", "--theme", "Soft Skills", "--hours", "11",
        ])
        .assert()
        .failure();
}

#[test]
fn test_admin_flag_roundtrip() {
    let db_path = setup_test_db("admin_flag");
    init_db(&db_path);

    rac()
        .args(["--db", &db_path, "admin"])
        .assert()
        .success()
        .stdout(contains("Admin mode is disabled"));

    rac()
        .args(["--db", &db_path, "admin", "--enable"])
        .assert()
        .success()
        .stdout(contains("Admin mode enabled"));

    rac()
        .args(["--db", &db_path, "admin"])
        .assert()
        .success()
        .stdout(contains("Admin mode is enabled"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    add_activity(&db_path, "Logged entry", "Networks", "2", "2024-07-01");

    rac()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}
