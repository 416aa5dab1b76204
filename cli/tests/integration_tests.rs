use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const PROFILE_YAML: &str = r#"
title: Profile
action: /user/profile
fields:
  - title: Nickname
    field: nickname
    type: input
    required: true
  - title: Gender
    field: gender
    type: radio
    options: "1:Male;2:Female;unknown"
  - title: Avatar
    field: avatar
    type: image
  - title: Resume
    field: resume
    type: file
"#;

const DUPLICATE_YAML: &str = r#"
title: Broken
fields:
  - { title: A, field: name, type: input }
  - { title: B, field: name, type: textarea }
"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_form-create"))
        .args(args)
        .env_remove("FORM_CREATE_TOKEN")
        .output()
        .expect("failed to run form-create")
}

// ---------------------------------------------------------------------------
// build
// ---------------------------------------------------------------------------

#[test]
fn build_prints_form_json() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write(dir.path(), "profile.yaml", PROFILE_YAML);

    let output = run(&[
        "build",
        "--definition",
        definition.to_str().unwrap(),
        "--token",
        "tok",
    ]);
    assert!(output.status.success(), "build should succeed");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Profile");
    assert_eq!(json["action"], "/user/profile");
    assert_eq!(json["rule"][0]["props"]["placeholder"], "请输入Nickname");
    assert_eq!(json["rule"][1]["options"].as_array().unwrap().len(), 2);
    assert_eq!(json["rule"][2]["props"]["type"], "image");
    assert_eq!(
        json["rule"][3]["props"]["headers"]["Authorization"],
        "Bearer tok"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 malformed option pair(s) skipped"));
}

#[test]
fn build_reads_token_from_env_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write(dir.path(), "profile.yaml", PROFILE_YAML);
    let config = write(
        dir.path(),
        "renderer.yaml",
        "upload_base: https://api.example.com\nroute:\n  scope: admin\n  admin_prefix: /admin\n",
    );
    let out_path = dir.path().join("out").join("profile.json");

    let status = Command::new(env!("CARGO_BIN_EXE_form-create"))
        .args([
            "build",
            "--definition",
            definition.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--compact",
        ])
        .env("FORM_CREATE_TOKEN", "from-env")
        .status()
        .expect("failed to run form-create");
    assert!(status.success());

    let raw = fs::read_to_string(&out_path).unwrap();
    assert!(!raw.contains('\n'), "compact output should be one line");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["action"], "/admin/user/profile");
    assert_eq!(
        json["rule"][3]["props"]["action"],
        "https://api.example.com/v1/admin/media/upload"
    );
    assert_eq!(
        json["rule"][3]["props"]["headers"]["Authorization"],
        "Bearer from-env"
    );
}

#[test]
fn build_fails_for_missing_definition() {
    let output = run(&["build", "--definition", "/nonexistent/form.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to load"));
}

// ---------------------------------------------------------------------------
// lint
// ---------------------------------------------------------------------------

#[test]
fn lint_reports_duplicate_fields() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write(dir.path(), "broken.yaml", DUPLICATE_YAML);

    let output = run(&["lint", broken.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate field in form: name"));
}

#[test]
fn lint_counts_malformed_options() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "profile.yaml", PROFILE_YAML);

    let output = run(&["lint", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 malformed option pair(s)"));
}

#[test]
fn lint_accepts_clean_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "mail.yaml",
        "title: Mail\nfields:\n  - { title: Host, field: mail_host, type: input }\n",
    );
    write(dir.path(), "README.txt", "not a definition");

    let output = run(&["lint", dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Linted 1 definition file(s); no issues."));
}

// ---------------------------------------------------------------------------
// kinds
// ---------------------------------------------------------------------------

#[test]
fn kinds_lists_builtin_table() {
    let output = run(&["kinds"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let kinds: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        kinds,
        vec!["file", "image", "input", "number", "radio", "textarea"]
    );
}
