//! Integration tests for enclose-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STRUCT_DOC: &str = r#"
[[nodes]]
type = "directive"
content = "include"
value = "<cstdint>"

[[nodes]]
type = "scope"
kind = "struct"
name = "point"

  [[nodes.body]]
  type = "constant"
  content = "dims"
  value = "2"
"#;

/// A command isolated from the user's config and environment.
fn enclose(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("enclose").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("ENCLOSE_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    enclose(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("dialects"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    enclose(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_render_writes_header_next_to_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("point.toml"), STRUCT_DOC).unwrap();

    enclose(temp.path())
        .args(["render", "point.toml"])
        .assert()
        .success();

    let header = fs::read_to_string(temp.path().join("point.h")).unwrap();
    assert_eq!(
        header,
        "#pragma once\n#include <cstdint>\nstruct point {\n\t[[nodiscard]] static constexpr uint32_t dims = 2;\n};\n"
    );
}

#[test]
fn test_render_to_stdout_with_c_dialect_and_ifndef() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("point.toml"), STRUCT_DOC).unwrap();

    enclose(temp.path())
        .args([
            "render",
            "point.toml",
            "-o",
            "-",
            "--dialect",
            "c",
            "--guard",
            "ifndef",
            "--guard-name",
            "POINT_H",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#ifndef POINT_H\n#define POINT_H\n"))
        .stdout(predicate::str::contains("\tstatic const uint32_t dims = 2;\n"))
        .stdout(predicate::str::ends_with("};\n\n#endif"));
}

#[test]
fn test_render_without_header() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("c.json"),
        r#"{"nodes":[{"type":"line-comment","content":"only"}]}"#,
    )
    .unwrap();

    enclose(temp.path())
        .args(["render", "c.json", "-o", "-", "--no-header"])
        .assert()
        .success()
        .stdout("//\tonly\n");
}

#[test]
fn test_render_directory_mirrors_tree() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(docs.join("nested")).unwrap();
    fs::write(docs.join("a.toml"), STRUCT_DOC).unwrap();
    fs::write(
        docs.join("nested").join("b.json"),
        r#"{"nodes":[{"type":"newline"}]}"#,
    )
    .unwrap();

    enclose(temp.path())
        .args(["render", "docs", "-o", "include"])
        .assert()
        .success();

    assert!(temp.path().join("include").join("a.h").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("include").join("nested").join("b.h")).unwrap(),
        "#pragma once\n\n"
    );
}

#[test]
fn test_render_json_report() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("point.toml"), STRUCT_DOC).unwrap();

    let assert = enclose(temp.path())
        .args(["--output-format", "json", "render", "point.toml"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report[0]["scopes"], 1);
    assert_eq!(report[0]["leaves"], 2);
}

#[test]
fn test_demo_writes_both_headers() {
    let temp = TempDir::new().unwrap();

    enclose(temp.path())
        .args(["demo", "--out-dir", "out", "--date", "Jan  1 2030"])
        .assert()
        .success();

    let cpp = fs::read_to_string(temp.path().join("out").join("c++.h")).unwrap();
    assert!(cpp.starts_with(
        "#ifndef COOL_GUY_TEXT_PROCESSING\n#define COOL_GUY_TEXT_PROCESSING\n\n/* \tJan  1 2030 */\n"
    ));
    assert!(cpp.contains("\tnamespace CoolNamespace {\n"));
    assert!(cpp.ends_with("\n#endif"));

    let c = fs::read_to_string(temp.path().join("out").join("c.h")).unwrap();
    assert_eq!(
        c,
        "#pragma once\n\n/* \tJan  1 2030 */\n#include <stdio.h>\n\n{\n\n\tstruct yeh {\n\t};\n\n}\n"
    );
}

#[test]
fn test_dialects_list_and_json() {
    let temp = TempDir::new().unwrap();

    enclose(temp.path())
        .args(["dialects", "--format", "list"])
        .assert()
        .success()
        .stdout("cpp\nc\n");

    enclose(temp.path())
        .args(["dialects", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"namespace\""))
        .stdout(predicate::str::contains("static const"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("custom.toml"),
        "[defaults]\ndialect = \"c\"\n",
    )
    .unwrap();

    enclose(temp.path())
        .args(["--config", "custom.toml", "config", "get", "defaults.dialect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.dialect = \"c\""));
}

#[test]
fn test_environment_overrides_dialect() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("point.toml"), STRUCT_DOC).unwrap();

    enclose(temp.path())
        .env("ENCLOSE__DEFAULTS__DIALECT", "c")
        .args(["render", "point.toml", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("static const uint32_t dims = 2;"));
}

#[test]
fn test_local_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("point.toml"), STRUCT_DOC).unwrap();
    fs::write(
        temp.path().join(".enclose.toml"),
        "[layout]\nindent = \"    \"\n",
    )
    .unwrap();

    enclose(temp.path())
        .args(["render", "point.toml", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    [[nodiscard]]"));
}

#[test]
fn test_init_local_then_refuses_overwrite() {
    let temp = TempDir::new().unwrap();

    enclose(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let written = fs::read_to_string(temp.path().join(".enclose.toml")).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("[layout.control-block]"));

    enclose(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    enclose(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enclose"));
}

#[test]
fn test_conventional_no_color_value_is_accepted() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "0", ""] {
        enclose(temp.path())
            .env("NO_COLOR", value)
            .args(["dialects", "--format", "list"])
            .assert()
            .success()
            .stdout("cpp\nc\n");
    }
}
