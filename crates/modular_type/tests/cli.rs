#![allow(deprecated, reason = "Command::cargo_bin is the stable entry point in assert_cmd 2.x")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{read_to_string, write};
use tempfile::tempdir;

fn modular_type() -> Command {
    let mut cmd = Command::cargo_bin("modular-type").unwrap();
    cmd.env_remove("MODULAR_TYPE_CONFIG");
    cmd
}

#[test]
fn help_lists_commands() {
    modular_type()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scale"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn scale_prints_root_rule() {
    modular_type()
        .args(["--unit", "px", "scale"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            ":root {\n  --font-size--2: clamp(11.11px, 0.01vw + 11.07px, 11.26px);\n",
        ))
        .stdout(predicate::str::contains(
            "  --font-size-0: clamp(16.00px, 0.33vw + 14.95px, 20.00px);\n",
        ));
}

#[test]
fn config_file_and_flags_are_merged() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("type-scale.json");
    write(
        &config,
        r#"{ "prefix": "fs-", "suffixType": "values", "minStep": 0, "maxStep": 1, "suffixValues": ["body", "lead"] }"#,
    )
    .unwrap();

    modular_type()
        .arg("--config")
        .arg(&config)
        .args(["--unit", "px", "scale", "--selector", "html"])
        .assert()
        .success()
        .stdout(
            "html {\n  \
             --fs-body: clamp(16.00px, 0.33vw + 14.95px, 20.00px);\n  \
             --fs-lead: clamp(19.20px, 0.61vw + 17.24px, 26.66px);\n}\n",
        );
}

#[test]
fn insufficient_suffix_values_fail() {
    modular_type()
        .args(["--suffix-type", "values", "--max-step", "9", "scale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("suffixValues must contain at least 12 entries"));
}

#[test]
fn unknown_config_key_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.json");
    write(&config, r#"{ "ratio": 1.5 }"#).unwrap();

    modular_type()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn process_expands_directive_to_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("styles.css");
    let output = dir.path().join("styles.out.css");
    write(
        &input,
        ":root {\n  /* postcss-modular-type-generate */\n}\nh1 { font-size: var(--font-size-3); }\n",
    )
    .unwrap();

    modular_type()
        .args(["--unit", "px", "--min-step", "0", "--max-step", "2", "process"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let css = read_to_string(&output).unwrap();
    assert_eq!(
        css,
        ":root {\n  \
         --font-size--1: clamp(13.33px, 0.14vw + 12.89px, 15.00px);\n  \
         --font-size-0: clamp(16.00px, 0.33vw + 14.95px, 20.00px);\n  \
         --font-size-1: clamp(19.20px, 0.61vw + 17.24px, 26.66px);\n}\n\
         h1 {\n  font-size: var(--font-size-3);\n}\n"
    );
}

#[test]
fn process_replaces_inline_from_stdin() {
    modular_type()
        .args(["--replace-inline", "process", "-"])
        .write_stdin("h1 { font-size: var(--font-size-0); }")
        .assert()
        .success()
        .stdout("h1 {\n  font-size: clamp(1.00rem, 0.33vw + 0.93rem, 1.25rem);\n}\n");
}

#[test]
fn process_reports_malformed_values() {
    modular_type()
        .args(["--replace-inline", "process", "-"])
        .write_stdin("h1 { font-size: var(--font-size-0)); }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to process -"));
}

#[test]
fn config_prints_resolved_values() {
    modular_type()
        .args(["--precision", "3", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"precision\": 3"))
        .stdout(predicate::str::contains("\"minScreenWidth\": 320.0"));
}
