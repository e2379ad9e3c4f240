use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_employee, init_db, od, setup_test_db, temp_out};

#[test]
fn test_export_roster_csv() {
    let db_path = setup_test_db("export_csv");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    let out = temp_out("export_csv", "csv");
    od().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,name,position,start_date,location,salary,benefits"));
    assert!(content.contains("E100"));
    assert!(content.contains("Asha Rao"));
}

#[test]
fn test_export_roster_json_is_parseable() {
    let db_path = setup_test_db("export_json");
    init_db(&db_path);
    add_employee(&db_path, "E100");
    add_employee(&db_path, "E101");

    let out = temp_out("export_json", "json");
    od().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["salary"], 1200000);
}

#[test]
fn test_export_roster_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    let out = temp_out("export_xlsx", "xlsx");
    od().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_export_empty_roster_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");
    od().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old contents").unwrap();

    od().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("E100"));
}

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    let out = temp_out("backup_plain", "sqlite");
    od().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::metadata(&out).unwrap().len(),
        fs::metadata(&db_path).unwrap().len()
    );
}

#[test]
fn test_backup_compress_leaves_only_the_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    let out = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    od().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();
    assert!(zip_path.exists());
    assert!(!Path::new(&out).exists());
}
