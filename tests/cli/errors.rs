//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keypick");
}

#[test]
fn test_help_mentions_shell_wrapper() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shell-init"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_errors_go_to_stderr_only() {
    let t = Test::standard();

    t.cmd()
        .args(["copy", "api", "MISSING"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("✗ no secret named MISSING"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keypick");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_keypick") || out.contains("complete"));
}

#[test]
fn test_missing_file() {
    let t = Test::standard();

    let output = t.copy("nope", "KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret file not found: nope");
    assert_stderr_contains(&output, "keypick list");
}

#[test]
fn test_path_outside_dir_rejected() {
    let t = Test::standard();
    std::fs::write(t.home.path().join("outside"), "KEY=leak\n").unwrap();

    let output = t.copy("../outside", "KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret file not found");
    assert_eq!(t.clipboard(), None);
}

#[test]
fn test_comment_only_file_is_empty() {
    let t = Test::with_files(&[("notes", COMMENTS_ONLY)]);

    let output = t.copy("notes", "ANY");
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to read");
}

#[test]
fn test_empty_file_is_empty() {
    let t = Test::with_files(&[("empty", "")]);

    let output = t.export("empty", "ANY");
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to read");
}

#[test]
fn test_decrypt_failure_hides_diagnostics() {
    let t = Test::standard();
    t.write_config(NOISY_FAILING_DECRYPTOR);

    let output = t.copy("api", "OPENAI_API_KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to read");
    assert_stderr_excludes(&output, "No secret key");
    assert_stderr_excludes(&output, "gpg:");
}

#[test]
fn test_decrypt_failure_matches_empty_file_message() {
    let failing = Test::standard();
    failing.write_config(NOISY_FAILING_DECRYPTOR);
    let empty = Test::with_files(&[("api", COMMENTS_ONLY)]);

    let a = failing.copy("api", "OPENAI_API_KEY");
    let b = empty.copy("api", "OPENAI_API_KEY");
    assert_failure(&a);
    assert_failure(&b);
    assert_eq!(stderr(&a), stderr(&b));
}

#[test]
fn test_missing_decryptor_program() {
    let t = Test::standard();
    t.write_config("[decrypt]\nprogram = \"keypick-no-such-gpg\"\n");

    let output = t.copy("api", "OPENAI_API_KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to read");
}

#[test]
fn test_invalid_config() {
    let t = Test::standard();
    t.write_config("secrets_dir = [");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config");
}

#[test]
fn test_missing_explicit_config() {
    let t = Test::standard();

    let output = t
        .cmd()
        .arg("list")
        .env("KEYPICK_CONFIG", t.home.path().join("nope.toml"))
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config");
}

#[test]
fn test_config_secrets_dir_used_without_flag() {
    let t = Test::standard();
    t.write_config(&format!(
        "secrets_dir = \"{}\"\n[decrypt]\nprogram = \"cat\"\nargs = []\n",
        t.dir.path().display()
    ));

    let output = t.cmd().env_remove("KEYPICK_DIR").arg("list").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "api");
}
