#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use runtime_compat::compat::{self, ExpectedOutput, GetEnvInput, SetEnvInput, errors};
use runtime_compat::core::RuntimeVersion;
use runtime_compat::framework::{CaseStatus, Executor, PluginLocator, TestCase};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stateful stand-in for the real test plugins. SetEnv marks the fixture's
/// config file, GetEnv reads it back, GetContext fails with the wording of
/// the runtime version encoded in the binary name.
const MOCK_PLUGIN: &str = r#"#!/usr/bin/env bash
set -eu
[ "$1" = "test" ] && [ "$2" = "--file" ] || { echo "usage: test --file FILE" >&2; exit 64; }
echo "mock plugin $(basename "$0")"
grep '^- name: ' "$3" | sed 's/^- name: //' | while read -r api; do
  echo "---"
  case "$api" in
    SetEnv)
      echo "EDITOR=vim" >> "$RUNTIME_CONFIG"
      printf 'SetEnv:\n  - responseType: nil\n'
      ;;
    GetEnv)
      if grep -q '^EDITOR=' "$RUNTIME_CONFIG"; then
        printf 'GetEnv:\n  - responseType: str\n    responseBody: vim\n'
      else
        printf 'GetEnv:\n  - responseType: err\n    responseBody: not found\n'
      fi
      ;;
    GetContext)
      case "$(basename "$0")" in
        *v0_25_4) printf 'GetContext:\n  - responseType: err\n    responseBody: '"'"'could not find context "ctx"'"'"'\n' ;;
        *) printf 'GetContext:\n  - responseType: err\n    responseBody: context ctx not found\n' ;;
      esac
      ;;
    *)
      echo "unsupported api $api" >&2
      exit 2
      ;;
  esac
done
"#;

const INTEROP_SUITE: &str = r#"
name: interop
cases:
  - name: latest writes, v0.25.4 reads
    commands:
      - - name: SetEnv
          version: latest
          arguments: { key: EDITOR, value: vim }
      - - name: GetEnv
          version: v0.25.4
          arguments: { key: EDITOR }
          output: { result: success, content: vim, validationStrategy: strict }
  - name: fresh fixture has no env
    commands:
      - - name: GetEnv
          version: latest
          arguments: { key: EDITOR }
          output: { result: failed, content: not found }
  - name: missing context wording per version
    commands:
      - apis:
          - name: GetContext
            version: v0.25.4
            arguments: { contextName: ctx }
            output: { result: failed, content: 'could not find context "ctx"' }
          - name: GetContext
            version: latest
            arguments: { contextName: ctx }
            output: { result: failed, content: context ctx not found }
"#;

struct TestEnv {
    _tmp: TempDir,
    config_dir: PathBuf,
    plugin_dir: PathBuf,
    suites_dir: PathBuf,
}

impl TestEnv {
    fn new(versions: &[RuntimeVersion]) -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();
        let config_dir = root.join("config");
        let plugin_dir = root.join("bin");
        let suites_dir = root.join("suites");

        fs::create_dir_all(&config_dir).expect("mkdir config");
        fs::create_dir_all(&plugin_dir).expect("mkdir bin");
        fs::create_dir_all(&suites_dir).expect("mkdir suites");

        for version in versions {
            install_plugin(&plugin_dir, *version);
        }

        Self {
            _tmp: tmp,
            config_dir,
            plugin_dir,
            suites_dir,
        }
    }

    fn write_suite(&self, name: &str, content: &str) -> PathBuf {
        let path = self.suites_dir.join(name);
        fs::write(&path, content).expect("write suite");
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_runtime-compat"));
        cmd.env("RUNTIME_COMPAT_CONFIG_DIR", &self.config_dir)
            .env("NO_COLOR", "1");

        let old_path = std::env::var("PATH").unwrap_or_default();
        let new_path = format!("{}:{}", self.plugin_dir.display(), old_path);
        cmd.env("PATH", new_path);
        cmd
    }
}

fn install_plugin(dir: &Path, version: RuntimeVersion) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(format!("runtime-test-plugin-{}", version.plugin_suffix()));
    fs::write(&path, MOCK_PLUGIN).expect("write mock plugin");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod");
}

#[test]
fn e2e_run_passes_with_mock_plugins() {
    let env = TestEnv::new(&[RuntimeVersion::Latest, RuntimeVersion::V0254]);
    env.write_suite("interop.yaml", INTEROP_SUITE);

    env.command()
        .arg("run")
        .arg(&env.suites_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("latest writes, v0.25.4 reads"))
        .stdout(predicate::str::contains("3 cases: 3 passed, 0 failed"));
}

#[test]
fn e2e_run_reports_mismatch_and_fails() {
    let env = TestEnv::new(&[RuntimeVersion::Latest, RuntimeVersion::V0254]);
    env.write_suite(
        "mismatch.yaml",
        r#"
cases:
  - name: wrong value
    commands:
      - - name: SetEnv
          version: latest
          arguments: { key: EDITOR, value: vim }
        - name: GetEnv
          version: v0.25.4
          arguments: { key: EDITOR }
          output: { result: success, content: emacs }
"#,
    );

    env.command()
        .arg("run")
        .arg(&env.suites_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("command 1: GetEnv @ v0.25.4"))
        .stdout(predicate::str::contains("$: expected \"emacs\", got \"vim\""))
        .stderr(predicate::str::contains("1 of 1 test case(s) failed"));
}

#[test]
fn e2e_json_report_is_deterministic() {
    let env = TestEnv::new(&[RuntimeVersion::Latest, RuntimeVersion::V0254]);
    env.write_suite("interop.yaml", INTEROP_SUITE);

    let statuses = || -> Vec<(String, String)> {
        let output = env
            .command()
            .args(["--format", "json", "run"])
            .arg(&env.suites_dir)
            .output()
            .expect("run");
        assert!(output.status.success());

        let json: Value = serde_json::from_slice(&output.stdout).expect("json output");
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"]["summary"]["passed"], 3);
        json["data"]["suites"][0]["cases"]
            .as_array()
            .expect("cases")
            .iter()
            .map(|c| {
                (
                    c["name"].as_str().unwrap_or_default().to_string(),
                    c["status"].as_str().unwrap_or_default().to_string(),
                )
            })
            .collect()
    };

    let first = statuses();
    assert_eq!(first.len(), 3);
    assert_eq!(first, statuses());
}

#[test]
fn e2e_filter_selects_cases() {
    let env = TestEnv::new(&[RuntimeVersion::Latest]);
    env.write_suite("interop.yaml", INTEROP_SUITE);

    env.command()
        .args(["run", "--filter", "fresh fixture"])
        .arg(&env.suites_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cases: 1 passed"));
}

#[test]
fn e2e_missing_plugin_is_reported_as_error() {
    let env = TestEnv::new(&[RuntimeVersion::Latest]);
    env.write_suite("interop.yaml", INTEROP_SUITE);

    env.command()
        .args(["run", "--filter", "v0.25.4 reads"])
        .arg(&env.suites_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("runtime-test-plugin-v0_25_4"));
}

#[test]
fn e2e_plugin_dir_flag_without_path() {
    let env = TestEnv::new(&[RuntimeVersion::Latest]);
    env.write_suite("interop.yaml", INTEROP_SUITE);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_runtime-compat"));
    cmd.env("RUNTIME_COMPAT_CONFIG_DIR", &env.config_dir)
        .args(["run", "--filter", "fresh fixture", "--plugin-dir"])
        .arg(&env.plugin_dir)
        .arg(&env.suites_dir)
        .assert()
        .success();
}

#[test]
fn e2e_versions_shows_resolved_plugins() {
    let env = TestEnv::new(&[RuntimeVersion::V0280]);

    env.command()
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            env.plugin_dir.join("runtime-test-plugin-v0_28_0").display().to_string(),
        ))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn library_builders_drive_the_executor() {
    let env = TestEnv::new(&[RuntimeVersion::Latest, RuntimeVersion::V0254]);
    let executor = Executor::new(PluginLocator::new(Some(env.plugin_dir.clone())));

    let case = TestCase::new("builders")
        .with_command(
            compat::command(&SetEnvInput::new(RuntimeVersion::Latest, "EDITOR", "vim"), &ExpectedOutput::ok())
                .expect("SetEnv builds"),
        )
        .with_command(
            compat::command(
                &GetEnvInput::new(RuntimeVersion::V0254, "EDITOR"),
                &ExpectedOutput::success("vim".to_string()).strict(),
            )
            .expect("GetEnv builds"),
        );
    assert_eq!(case.execute(&executor).status, CaseStatus::Passed);

    let fresh = TestCase::new("fresh").with_command(
        compat::command(
            &GetEnvInput::new(RuntimeVersion::Latest, "EDITOR"),
            &ExpectedOutput::<String>::error(errors::env_not_found()),
        )
        .expect("GetEnv builds"),
    );
    assert_eq!(fresh.execute(&executor).status, CaseStatus::Passed);
}
