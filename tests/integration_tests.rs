use predicates::str::contains;

mod common;
use common::{add_employee, init_db, od, setup_test_db};

#[test]
fn test_add_and_list_employee() {
    let db_path = setup_test_db("add_list");
    init_db(&db_path);
    add_employee(&db_path, "E100");

    od().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("E100"))
        .stdout(contains("Asha Rao"))
        .stdout(contains("Software Engineer"))
        .stdout(contains("1200000"));
}

#[test]
fn test_add_generates_an_id_when_none_given() {
    let db_path = setup_test_db("generated_id");
    init_db(&db_path);

    od().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "Ravi Kumar",
        "--position",
        "Data Analyst",
        "--start-date",
        "2024-03-01",
        "--location",
        "Hyderabad, India",
        "--salary",
        "900000",
        "--benefits",
        "Provident fund",
    ])
    .assert()
    .success()
    .stdout(contains("added"));

    od().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ravi Kumar"));
}

#[test]
fn test_add_replaces_record_with_same_id() {
    let db_path = setup_test_db("replace");
    init_db(&db_path);
    add_employee(&db_path, "E200");

    od().args([
        "--db",
        &db_path,
        "add",
        "--id",
        "E200",
        "--name",
        "Asha Rao",
        "--position",
        "Senior Software Engineer",
        "--start-date",
        "2024-02-01",
        "--location",
        "Pune, India",
        "--salary",
        "1500000",
        "--benefits",
        "Health insurance",
    ])
    .assert()
    .success()
    .stdout(contains("updated"));

    od().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Senior Software Engineer"))
        .stdout(contains("Pune, India"));
}

#[test]
fn test_add_rejects_negative_salary() {
    let db_path = setup_test_db("neg_salary");
    init_db(&db_path);

    od().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "Bad Pay",
        "--position",
        "Engineer",
        "--start-date",
        "2024-01-01",
        "--location",
        "Chennai",
        "--salary",
        "-1",
        "--benefits",
        "None",
    ])
    .assert()
    .failure()
    .stderr(contains("non-negative"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("bad_date");
    init_db(&db_path);

    od().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "Wrong Date",
        "--position",
        "Engineer",
        "--start-date",
        "15-01-2024",
        "--location",
        "Chennai",
        "--salary",
        "100000",
        "--benefits",
        "None",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_empty_name() {
    let db_path = setup_test_db("empty_name");
    init_db(&db_path);

    od().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "  ",
        "--position",
        "Engineer",
        "--start-date",
        "2024-01-01",
        "--location",
        "Chennai",
        "--salary",
        "100000",
        "--benefits",
        "None",
    ])
    .assert()
    .failure()
    .stderr(contains("Missing required field"));
}

#[test]
fn test_del_removes_employee() {
    let db_path = setup_test_db("del");
    init_db(&db_path);
    add_employee(&db_path, "E300");

    od().args(["--db", &db_path, "del", "E300"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    od().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No employee records found"));
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    od().args(["--db", &db_path, "del", "NOPE"])
        .assert()
        .failure()
        .stderr(contains("No employee found"));
}

#[test]
fn test_db_reset_clears_employees_and_offers() {
    let db_path = setup_test_db("db_reset");
    init_db(&db_path);
    add_employee(&db_path, "E500");
    od().args(["--db", &db_path, "generate", "E500"]).assert().success();

    od().args(["--db", &db_path, "db", "--reset"])
        .assert()
        .success()
        .stdout(contains("records deleted"));

    od().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No employee records found"));

    od().args(["--db", &db_path, "list", "--offers"])
        .assert()
        .success()
        .stdout(contains("No offers generated yet"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maint");
    init_db(&db_path);
    add_employee(&db_path, "E400");

    od().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));

    od().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees:      1"))
        .stdout(contains("Schema version: 1"));
}
