//! CLI integration tests.
//!
//! Runs the `jpr` binary as a subprocess with input on stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn jpr_path() -> std::path::PathBuf {
    // Find the binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Integration tests live in deps/; the binary sits one level up
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jpr.exe")
    } else {
        path.join("jpr")
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let jpr = jpr_path();
    let mut child = Command::new(&jpr)
        .args(args)
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn jpr at {:?}: {}", jpr, e));

    {
        // The child may exit before reading stdin (bad flags, missing files)
        let stdin = child.stdin.as_mut().unwrap();
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn rule_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// paths
// ============================================================================

#[test]
fn paths_lists_every_node_in_visit_order() {
    let (code, stdout, _) = run(&["paths"], r#"{"a":{"b":[1,{"c":"x"}]},"n":null}"#);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "(root)\tobject",
            "a\tobject",
            "a.b\tarray",
            "a.b.0\tnumber",
            "a.b.1\tobject",
            "a.b.1.c\tstring",
            "n\tnull",
        ]
    );
}

#[test]
fn paths_reads_file_argument() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(br#"[true,false]"#).unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();

    let (code, stdout, _) = run(&["paths", path], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "(root)\tarray\n0\tboolean\n1\tboolean\n");
}

#[test]
fn paths_does_not_escape_dotted_keys() {
    let (code, stdout, _) = run(&["paths"], r#"{"a.b":1,"a":{"b":2}}"#);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["(root)\tobject", "a\tobject", "a.b\tnumber", "a.b\tnumber"]);
}

// ============================================================================
// redact
// ============================================================================

#[test]
fn redact_without_rules_is_pass_through() {
    let (code, stdout, _) = run(&["redact"], r#"{"b":1,"a":[1,2.5]}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"a":[1,2.5],"b":1}"#);
}

#[test]
fn redact_omit_flag() {
    let (code, stdout, _) = run(
        &["redact", "--omit", r"\.cc$"],
        r#"{"customer":{"cc":"4111","name":"Ann"}}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"customer":{"name":"Ann"}}"#);
}

#[test]
fn redact_with_rule_file() {
    let rules = rule_file(
        r#"
indent = 2

[[rules]]
pattern = '.*\.cc$'
action = "omit"

[[rules]]
pattern = '.*\.ssn$'
action = "replace"
value = "***-**-****"
"#,
    );
    let config = rules.path().to_str().unwrap();

    let (code, stdout, _) = run(
        &["redact", "--config", config],
        r#"{"customer":{"cc":"4111","ssn":"123-45-6789"}}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "{\n  \"customer\": {\n    \"ssn\": \"***-**-****\"\n  }\n}\n"
    );
}

#[test]
fn redact_rule_file_keep_shadows_omit_flag() {
    let rules = rule_file(
        r#"
[[rules]]
pattern = '^id$'
action = "keep"
"#,
    );
    let config = rules.path().to_str().unwrap();

    let (code, stdout, _) = run(
        &["redact", "--config", config, "--omit", ".+"],
        r#"{"id":7,"secret":"x"}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"id":7}"#);
}

#[test]
fn redact_indent_flag_overrides_file() {
    let rules = rule_file("indent = 4\n");
    let config = rules.path().to_str().unwrap();

    let (code, stdout, _) = run(&["redact", "--config", config, "--indent", "1"], r#"{"a":1}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n \"a\": 1\n}\n");
}

#[test]
fn redact_omitting_root_prints_nothing() {
    let (code, stdout, _) = run(&["redact", "--omit", "^$"], r#"{"a":1}"#);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn invalid_json_reports_e100() {
    let (code, stdout, stderr) = run(&["paths"], "{not json");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error: E100_InvalidJSON (code 100)"), "stderr: {}", stderr);
}

#[test]
fn invalid_pattern_reports_e200() {
    let (code, _, stderr) = run(&["redact", "--omit", "(unclosed"], "{}");
    assert_eq!(code, 1);
    assert!(stderr.contains("error: E200_InvalidPattern (code 200)"), "stderr: {}", stderr);
}

#[test]
fn replace_without_value_reports_e201() {
    let rules = rule_file("[[rules]]\npattern = 'a'\naction = \"replace\"\n");
    let config = rules.path().to_str().unwrap();

    let (code, _, stderr) = run(&["redact", "--config", config], "{}");
    assert_eq!(code, 1);
    assert!(stderr.contains("(code 201)"), "stderr: {}", stderr);
}

#[test]
fn missing_rule_file_reports_e400() {
    let (code, _, stderr) = run(&["redact", "--config", "/no/such/rules.toml"], "{}");
    assert_eq!(code, 1);
    assert!(stderr.contains("error: E400_ConfigUnreadable (code 400)"), "stderr: {}", stderr);
}

#[test]
fn malformed_rule_file_reports_e401() {
    let rules = rule_file("indent = \"wide\"\n");
    let config = rules.path().to_str().unwrap();

    let (code, _, stderr) = run(&["redact", "--config", config], "{}");
    assert_eq!(code, 1);
    assert!(stderr.contains("(code 401)"), "stderr: {}", stderr);
}

#[test]
fn missing_input_file_reports_e402() {
    let (code, _, stderr) = run(&["paths", "/no/such/input.json"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("error: E402_InputUnreadable (code 402)"), "stderr: {}", stderr);
}

#[test]
fn non_ascii_text_passes_through() {
    let (code, stdout, _) = run(&["redact"], "{\"name\":\"caf\u{e9} \u{1F600}\"}");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "{\"name\":\"caf\u{e9} \u{1F600}\"}");
}

// ============================================================================
// version
// ============================================================================

#[test]
fn version_command() {
    let (code, stdout, _) = run(&["version"], "");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("jpr v"));
}
