use assert_cmd::cargo::cargo_bin_cmd;
use rusqlite::Connection;
use serde_json::Value;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(db_path: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("repertoire")
        .env("XDG_CONFIG_HOME", db_path.parent().expect("parent"))
        .env_remove("RUST_LOG")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(db_path: &Path, args: &[&str]) -> String {
    let output = run_raw(db_path, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(db_path: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_raw(db_path, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_contact_lifecycle() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("repertoire.sqlite3");

    let created = run_cmd_json(
        &db_path,
        &[
            "add-contact",
            "--nom",
            "Kalala",
            "--postnom",
            "Mbuyi",
            "--email",
            "K@X.com",
            "--phone",
            "+243800000000",
            "--genre",
            "M",
        ],
    );
    let id = created["id"].as_i64().expect("id");
    assert!(id > 0);
    assert_eq!(created["email"], "k@x.com");

    run_cmd(
        &db_path,
        &["edit-contact", &id.to_string(), "--phone", "+243811111111"],
    );
    let detail = run_cmd_json(&db_path, &["show", &id.to_string()]);
    assert_eq!(detail["numero_telephone"], "+243811111111");

    let found = run_cmd_json(&db_path, &["search", "kal"]);
    assert_eq!(found.as_array().expect("array").len(), 1);
    let all = run_cmd_json(&db_path, &["search"]);
    assert_eq!(all.as_array().expect("array").len(), 1);

    run_cmd(&db_path, &["delete", &id.to_string()]);
    let missing = run_raw(&db_path, &["show", &id.to_string()]);
    assert_eq!(missing.status.code(), Some(2));
    let again = run_raw(&db_path, &["delete", &id.to_string()]);
    assert_eq!(again.status.code(), Some(2));
}

#[test]
fn cli_rejects_blank_required_field() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("repertoire.sqlite3");

    let output = run_raw(
        &db_path,
        &[
            "add-contact",
            "--nom",
            "  ",
            "--postnom",
            "Mbuyi",
            "--email",
            "k@x.com",
            "--phone",
            "+243800000000",
            "--genre",
            "M",
        ],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("nom is required"));
}

#[test]
fn cli_login_routes_by_role() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("repertoire.sqlite3");

    run_cmd(
        &db_path,
        &[
            "add-account",
            "--phone",
            "+243800000000",
            "--password",
            "s3cret",
            "--role",
            "admin",
        ],
    );
    let login = run_cmd_json(
        &db_path,
        &["login", "--phone", "+243800000000", "--password", "s3cret"],
    );
    assert_eq!(login["role"], "admin");
    assert_eq!(login["dashboard"], "admin");

    let denied = run_raw(
        &db_path,
        &["login", "--phone", "+243800000000", "--password", "nope"],
    );
    assert_eq!(denied.status.code(), Some(4));
}

fn add_contact(db_path: &Path, nom: &str, postnom: &str, phone: &str) -> i64 {
    let created = run_cmd_json(
        db_path,
        &[
            "add-contact",
            "--nom",
            nom,
            "--postnom",
            postnom,
            "--email",
            "k@x.com",
            "--phone",
            phone,
            "--genre",
            "F",
        ],
    );
    created["id"].as_i64().expect("id")
}

#[test]
fn cli_search_by_field() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("repertoire.sqlite3");

    let kalala = add_contact(&db_path, "Kalala", "Mbuyi", "+243800000000");
    let mbuyi = add_contact(&db_path, "Mbuyi", "Ilunga", "+243811111111");

    let by_nom = run_cmd_json(&db_path, &["search", "mbuyi", "--field", "nom"]);
    let by_nom = by_nom.as_array().expect("array");
    assert_eq!(by_nom.len(), 1);
    assert_eq!(by_nom[0]["id"].as_i64(), Some(mbuyi));

    let by_postnom = run_cmd_json(&db_path, &["search", "mbuyi", "--field", "postnom"]);
    let by_postnom = by_postnom.as_array().expect("array");
    assert_eq!(by_postnom.len(), 1);
    assert_eq!(by_postnom[0]["id"].as_i64(), Some(kalala));

    let blank = run_raw(&db_path, &["search", "--field", "nom"]);
    assert_eq!(blank.status.code(), Some(3));
}

#[test]
fn cli_hides_store_detail_unless_verbose() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("repertoire.sqlite3");

    run_cmd(&db_path, &["list"]);
    Connection::open(&db_path)
        .expect("open db")
        .execute_batch("DROP TABLE contacts;")
        .expect("drop table");

    let output = run_raw(&db_path, &["list"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert_eq!(stderr.trim_end(), "error: The operation could not be completed.");
    assert!(!stderr.contains("sqlite"));
    assert!(!stderr.contains("no such table"));

    let verbose = run_raw(&db_path, &["--verbose", "list"]);
    assert_eq!(verbose.status.code(), Some(1));
    let stderr = String::from_utf8(verbose.stderr).expect("utf8");
    assert!(stderr.contains("no such table: contacts"));
}
