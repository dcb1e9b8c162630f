use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
screen Home:
  # Welcome
  @[Settings](Settings)
screen Settings:
  > Preferences
";

fn write_source(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(source.as_bytes()).expect("write source");
    file
}

#[test]
fn renders_html_by_default() {
    let file = write_source(SAMPLE);
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path());

    cmd.assert().success().stdout(
        predicate::str::contains("class=\"proto-document\"")
            .and(predicate::str::contains("data-nav=\"Settings\""))
            .and(predicate::str::contains("data-theme=\"light\"")),
    );
}

#[test]
fn prints_ast_json() {
    let file = write_source(SAMPLE);
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path()).arg("--format").arg("ast");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"screen-0\"").and(predicate::str::contains("Welcome")));
}

#[test]
fn selects_screen_for_routes() {
    let file = write_source(SAMPLE);
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path())
        .args(["--format", "routes", "--screen", "Settings"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"currentScreen\": \"Settings\""));
}

#[test]
fn overrides_theme_from_command_line() {
    let file = write_source(SAMPLE);
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path()).args(["--set", "render.theme=dark"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("data-theme=\"dark\""));
}

#[test]
fn reads_config_file() {
    let file = write_source(SAMPLE);
    let config = write_source("[render]\nwrap_document = true\n");
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path()).arg("--config").arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"));
}

#[test]
fn reports_errors_and_fails() {
    let file = write_source("screen Home:\n  # Ok\nscreen Home:\n");
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path()).args(["--format", "errors"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("\"stage\": \"builder\""));
}

#[test]
fn rejects_malformed_override() {
    let file = write_source(SAMPLE);
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg(file.path()).args(["--set", "render.theme"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("proto");
    cmd.arg("/nonexistent/app.proto");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
