use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// The binary with config and state isolated under `home`.
fn circleci(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("circleci"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("CIRCLECI_CLI_CONFIG", home.join("cli.yml"))
        .env("CIRCLECI_CLI_SKIP_UPDATE_CHECK", "1")
        .env_remove("CIRCLECI_CLI_TOKEN")
        .env_remove("CIRCLECI_CLI_HOST")
        .env_remove("CIRCLECI_CLI_FORMAT")
        .env_remove("CIRCLECI_CLI_DEBUG");
    cmd
}

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
    fs::write(path, contents).expect("write file");
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    circleci(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "circleci version {}",
            env!("CARGO_PKG_VERSION")
        )));

    Ok(())
}

#[test]
fn help_lists_command_groups() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    circleci(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("context"))
        .stdout(predicate::str::contains("orb"))
        .stdout(predicate::str::contains("policy"));

    Ok(())
}

#[test]
fn completion_script_names_binary() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    circleci(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("circleci"));

    Ok(())
}

#[test]
fn orb_pack_merges_tree() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let src = home.path().join("src");
    write(&src, "@orb.yml", "version: 2.1\ndescription: demo\n");
    write(&src, "commands/greet.yml", "steps:\n  - run: echo hi\n");

    let assert = circleci(home.path())
        .args(["orb", "pack"])
        .arg(&src)
        .assert()
        .success();

    let packed: serde_yaml::Value = serde_yaml::from_slice(&assert.get_output().stdout)?;
    assert_eq!(packed["description"], serde_yaml::Value::from("demo"));
    assert!(packed["commands"]["greet"]["steps"].is_sequence());

    Ok(())
}

#[test]
fn config_pack_rejects_duplicate_keys() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let src = home.path().join("config");
    write(&src, "@config.yml", "version: 2.1\n");
    write(&src, "version.yml", "2.1\n");

    circleci(home.path())
        .args(["config", "pack"])
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key 'version'"));

    Ok(())
}

#[test]
fn missing_token_fails_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let mut server = mockito::Server::new();
    let untouched = server.mock("GET", Matcher::Any).expect(0).create();

    circleci(home.path())
        .args(["context", "list", "github", "acme", "--host", &server.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API token not configured"));

    untouched.assert();
    Ok(())
}

#[test]
fn malformed_orb_reference_is_rejected_locally() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let mut server = mockito::Server::new();
    let untouched = server.mock("POST", Matcher::Any).expect(0).create();

    circleci(home.path())
        .args(["orb", "info", "not-an-orb", "--host", &server.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid orb reference 'not-an-orb'"));

    untouched.assert();
    Ok(())
}

#[test]
fn context_list_follows_every_page() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let mut server = mockito::Server::new();

    let first = server
        .mock("GET", "/api/v2/context")
        .match_header("circle-token", "tok")
        .match_query(Matcher::Regex("^owner-slug=[^&]*$".into()))
        .with_status(200)
        .with_body(
            r#"{"items": [{"id": "c1", "name": "deploy"}, {"id": "c2", "name": "staging"}],
                "next_page_token": "p2"}"#,
        )
        .create();
    let second = server
        .mock("GET", "/api/v2/context")
        .match_query(Matcher::Regex("page-token=p2".into()))
        .with_status(200)
        .with_body(r#"{"items": [{"id": "c3", "name": "prod"}], "next_page_token": null}"#)
        .create();

    let assert = circleci(home.path())
        .args(["context", "list", "github", "acme"])
        .args(["--host", &server.url(), "--token", "tok", "--format", "json"])
        .assert()
        .success();

    let output: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let names: Vec<&str> = output["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["deploy", "staging", "prod"]);
    assert_eq!(output["meta"]["version"], env!("CARGO_PKG_VERSION"));

    first.assert();
    second.assert();
    Ok(())
}

#[test]
fn config_validate_reports_valid_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    write(home.path(), "config.yml", "version: 2.1\njobs: {}\n");
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/graphql-unstable")
        .match_body(Matcher::PartialJson(json!({
            "variables": {"config": "version: 2.1\njobs: {}\n"}
        })))
        .with_status(200)
        .with_body(
            r#"{"data": {"buildConfig": {"valid": true, "errors": [],
                "sourceYaml": "version: 2.1", "outputYaml": "version: 2"}}}"#,
        )
        .create();

    circleci(home.path())
        .args(["config", "validate", "config.yml", "--host", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file at config.yml is valid."));

    mock.assert();
    Ok(())
}

#[test]
fn config_validate_surfaces_server_errors() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    write(home.path(), "config.yml", "version: 2.1\n");
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("POST", "/graphql-unstable")
        .with_status(200)
        .with_body(
            r#"{"data": {"buildConfig": {"valid": false,
                "errors": [{"message": "jobs: is required"}, {"message": "workflows: is required"}]}}}"#,
        )
        .create();

    circleci(home.path())
        .args(["config", "validate", "config.yml", "--host", &server.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobs: is required"))
        .stderr(predicate::str::contains("workflows: is required"));

    Ok(())
}

#[test]
fn policy_push_dry_run_only_previews() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let policies = home.path().join("policies");
    write(&policies, "deny_old.rego", "package org\n");
    let mut server = mockito::Server::new();

    let dry = server
        .mock("POST", "/api/v1/owner/org-1/context/config/policy-bundle")
        .match_query(Matcher::UrlEncoded("dry".into(), "true".into()))
        .match_body(Matcher::PartialJson(json!({
            "policies": {"deny_old.rego": "package org\n"}
        })))
        .with_status(200)
        .with_body(r#"{"created": ["deny_old"]}"#)
        .create();

    circleci(home.path())
        .args(["policy", "push"])
        .arg(&policies)
        .args(["--owner-id", "org-1", "--dry-run"])
        .args(["--host", &server.url(), "--token", "tok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deny_old"));

    // An unmatched apply request would have failed the command
    dry.assert();
    Ok(())
}

#[test]
fn setup_without_prompt_saves_config() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let mut server = mockito::Server::new();
    let _me = server
        .mock("GET", "/api/v2/me")
        .match_header("circle-token", "tok")
        .with_status(200)
        .with_body(r#"{"id": "u1", "login": "octocat", "name": "Octo Cat"}"#)
        .create();

    circleci(home.path())
        .args(["setup", "--no-prompt", "--token", "tok", "--host", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"))
        .stdout(predicate::str::contains("Hello, Octo Cat."));

    let saved = fs::read_to_string(home.path().join("cli.yml"))?;
    assert!(saved.contains("token: tok"));
    assert!(saved.contains(&server.url()));

    Ok(())
}
