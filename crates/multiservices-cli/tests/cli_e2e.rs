#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("multiservices"));
    cmd.env("MULTISERVICES_DATA", data_dir.as_os_str())
        .env_remove("RUST_LOG");
    cmd
}

fn list_json(data_dir: &Path, args: &[&str]) -> Vec<Value> {
    let output = cmd(data_dir)
        .args(["list", "--json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    match serde_json::from_slice(&output.stdout).unwrap() {
        Value::Array(items) => items,
        other => panic!("Expected a JSON array, got {}", other),
    }
}

#[test]
fn test_first_run_lists_sample_providers() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Carlos Silva"))
        .stdout(predicate::str::contains("Maria Santos"))
        .stdout(predicate::str::contains("João Pereira"));

    assert!(temp.path().join("multiservices_providers.json").exists());
}

#[test]
fn test_register_search_review_show_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Register
    cmd(temp.path())
        .args([
            "register",
            "provider",
            "--name",
            "Ana Lima",
            "--email",
            "ana@eletrica.com",
            "--phone",
            "(31) 98765-1234",
            "--service",
            "electrician",
            "--location",
            "Belo Horizonte - MG",
            "--rate",
            "95",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider registered: Ana Lima"));

    // 2. Search finds only the new provider
    let found = list_json(temp.path(), &["--search", "belo horizonte"]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["service"], "Eletricista");
    let id = found[0]["id"].as_str().unwrap().to_string();

    // 3. Review twice
    for rating in ["5", "4"] {
        cmd(temp.path())
            .args(["review", &id, rating, "--comment", "Muito bom"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Review saved"));
    }

    // 4. Rating shows up in the listing and sorts first
    let by_rating = list_json(temp.path(), &["--sort", "rating"]);
    assert_eq!(by_rating[0]["name"], "Ana Lima");
    assert_eq!(by_rating[0]["rating"]["average"], 4.5);
    assert_eq!(by_rating[0]["rating"]["reviewCount"], 2);

    // 5. Show
    cmd(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Lima"))
        .stdout(predicate::str::contains("R$ 95.00/hora"))
        .stdout(predicate::str::contains("Muito bom"));
}

#[test]
fn test_invalid_registration_fails_without_saving() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .args([
            "register",
            "client",
            "--name",
            "Bea",
            "--email",
            "bea-at-example",
            "--phone",
            "11912345678",
            "--location",
            "Santos - SP",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Invalid email"));

    cmd(temp.path())
        .args(["clients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients registered."));
}

#[test]
fn test_review_rating_out_of_range_fails() {
    let temp = TempDir::new().unwrap();
    let id = list_json(temp.path(), &[])[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    cmd(temp.path())
        .args(["review", &id, "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rating must be between 1 and 5"));
}

#[test]
fn test_show_unknown_provider_fails() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provider not found: does-not-exist"));
}

#[test]
fn test_config_disables_seeding() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("multiservices.toml"),
        "seed_sample_data = false\n",
    )
    .unwrap();

    cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers found."));

    cmd(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed_sample_data = false"))
        .stdout(predicate::str::contains("on_corrupt = \"empty\""));
}

#[test]
fn test_corrupt_collection_with_fail_fast_policy() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("multiservices.toml"),
        "on_corrupt = \"error\"\n",
    )
    .unwrap();
    fs::write(temp.path().join("multiservices_providers.json"), "garbage").unwrap();

    cmd(temp.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt providers collection"));
}

#[test]
fn test_corrupt_collection_degrades_to_empty_by_default() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("multiservices.toml"),
        "seed_sample_data = false\n",
    )
    .unwrap();
    fs::write(temp.path().join("multiservices_clients.json"), "{]").unwrap();

    cmd(temp.path())
        .args(["clients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients registered."));
}

#[test]
fn test_read_only_command_keeps_unreadable_providers() {
    let temp = TempDir::new().unwrap();
    let providers = temp.path().join("multiservices_providers.json");
    let stored = r#"{"version":1,"records":[{"id":"a","name":"Real User","email":"real@example.com","phone":"(11) 91234-5678","service":"Pintor","location":"Santos - SP","hourlyRate":"abc"}]}"#;
    fs::write(&providers, stored).unwrap();

    cmd(temp.path())
        .args(["clients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients registered."));

    cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers found."));

    assert_eq!(fs::read_to_string(&providers).unwrap(), stored);
}
