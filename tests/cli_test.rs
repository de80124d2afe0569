//! Integration tests for the badgeserv binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PREDEFINED: &str = r#"
predefined_badges:
  github-release:
    label: release
    message: "{{r.tag_name}}"
    target: "https://api.github.com/repos/{{owner}}/{{repo}}/releases/latest"
    description: Latest GitHub release
    parameters:
      owner: Repository owner
      repo: Repository name
    examples:
      - owner: rust-lang
        repo: rust
"#;

fn badgeserv() -> Command {
    let mut cmd = Command::new(cargo_bin("badgeserv"));
    cmd.env_remove("BADGESERV_CONFIG")
        .env_remove("BADGESERV_FONT")
        .env_remove("BADGESERV_PREDEFINED_DIR")
        .env_remove("BADGESERV_ASSETS_DIR");
    cmd
}

fn predefined_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("predefined"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv().assert().failure();
    Ok(())
}

#[test]
fn colors_lists_palette() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("brightgreen"))
        .stdout(predicate::str::contains("#e05d44"));
    Ok(())
}

#[test]
fn colors_reads_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("badgeserv.yml");
    fs::write(&path, "badges:\n  colors:\n    brand: \"#ff00aa\"\n")?;

    badgeserv()
        .args(["--config", path.to_str().unwrap(), "colors", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"brand\""))
        .stdout(predicate::str::contains("brightgreen").not());
    Ok(())
}

#[test]
fn missing_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args(["--config", "/nonexistent/badgeserv.yml", "colors"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn predefined_list_shows_examples() -> Result<(), Box<dyn std::error::Error>> {
    let dir = predefined_dir(&[("github.yml", PREDEFINED)]);
    badgeserv()
        .args(["--predefined-dir", dir.path().to_str().unwrap(), "predefined", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github-release - Latest GitHub release"))
        .stdout(predicate::str::contains(
            "predefined/github-release/?owner=rust-lang&repo=rust",
        ));
    Ok(())
}

#[test]
fn predefined_check_fails_on_bad_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = predefined_dir(&[
        ("a.yml", PREDEFINED),
        ("b.yml", "predefined_badges:\n  x:\n    colr: red\n"),
    ]);
    badgeserv()
        .args(["--predefined-dir", dir.path().to_str().unwrap(), "predefined", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("b.yml"))
        .stdout(predicate::str::contains("1 file(s) failed"));
    Ok(())
}

#[test]
fn predefined_check_passes_clean_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = predefined_dir(&[("a.yml", PREDEFINED)]);
    badgeserv()
        .args(["--predefined-dir", dir.path().to_str().unwrap(), "predefined", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 badge(s) loaded, 0 file(s) failed"));
    Ok(())
}

#[test]
fn assets_list_and_cat() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args(["assets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("badges/badge.svg.hbs"))
        .stdout(predicate::str::contains("fonts/DejaVuSans.ttf"));

    badgeserv()
        .args(["assets", "cat", "badges/badge.svg.hbs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"));

    badgeserv()
        .args(["assets", "cat", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asset not found"));
    Ok(())
}

#[test]
fn render_with_missing_font_fails() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args([
            "--font",
            "/nonexistent/font.ttf",
            "render",
            "static",
            "--label",
            "build",
            "--message",
            "passing",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse font"));
    Ok(())
}

#[test]
fn render_static_with_embedded_font() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args([
            "render",
            "--etag",
            "static",
            "--label",
            "build",
            "--message",
            "passing",
            "--color",
            "brightgreen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains(">passing</text>"))
        .stderr(predicate::str::contains("ETag: \""));
    Ok(())
}

#[test]
fn render_template_error_is_client_error() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args([
            "render",
            "static",
            "--message",
            "{{#if a}}x{{/each}}",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("client error"))
        .stderr(predicate::str::contains("message"));
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    badgeserv()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("badgeserv"));
    Ok(())
}
