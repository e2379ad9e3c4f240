#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn od() -> Command {
    cargo_bin_cmd!("offerdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_offerdesk.sqlite", name));
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

/// Initialize DB (creates schema without touching the user config)
pub fn init_db(db_path: &str) {
    od().args(["--db", db_path, "--test", "init"]).assert().success();
}

/// Add one employee with a fixed id so follow-up commands can refer to it
pub fn add_employee(db_path: &str, id: &str) {
    od().args([
        "--db",
        db_path,
        "add",
        "--id",
        id,
        "--name",
        "Asha Rao",
        "--position",
        "Software Engineer",
        "--start-date",
        "2024-01-15",
        "--location",
        "Bangalore, India",
        "--salary",
        "1200000",
        "--benefits",
        "Health insurance",
    ])
    .assert()
    .success();
}

/// Write a small valid PNG usable as an uploaded signature
pub fn write_test_png(name: &str) -> String {
    let path = temp_out(name, "png");
    let img = image::RgbaImage::from_fn(120, 40, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            image::Rgba([40, 40, 40, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    img.save(&path).expect("write png");
    path
}

/// Write a recorded pointer trace: two strokes across the pad
pub fn write_test_strokes(name: &str) -> String {
    let path = temp_out(name, "json");
    let trace = "[[[40.0,100.0],[120.0,60.0],[200.0,120.0],[280.0,80.0]],\
                 [[300.0,100.0],[360.0,100.0]]]";
    fs::write(&path, trace).expect("write strokes");
    path
}

/// Walk an employee through generate + accept so a download can succeed
pub fn generate_and_accept(db_path: &str, id: &str) {
    od().args(["--db", db_path, "generate", id]).assert().success();
    od().args(["--db", db_path, "accept", id, "--agree-terms"])
        .assert()
        .success();
}
