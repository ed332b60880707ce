#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::{TempDir, tempdir};

/// Launcher sandbox: `bin` is the only `PATH` entry, `dir` holds the sibling files.
struct Sandbox {
    bin: TempDir,
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            bin: tempdir().unwrap(),
            dir: tempdir().unwrap(),
        }
    }

    fn program(&self, name: &str, body: &str) {
        script(&self.bin.path().join(name), body);
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bench_stats"));
        cmd.env_clear()
            .env("PATH", self.bin.path())
            .env("LIFT_BENCH_STATS_DIR", self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

fn script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const ECHO_ARGS: &str = r#"printf '%s\n' "$@""#;

#[test]
fn test_all_providers_missing() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["--runs", "3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Fatal: no Zig runtime and Python fallback missing.\n"
    );
}

#[test]
fn test_package_on_path_gets_args_verbatim() {
    let sandbox = Sandbox::new();
    sandbox.program(
        "lift-bench-stats",
        &format!("[ \"$1\" = --help ] && exit 0\n{ECHO_ARGS}\nexit 4"),
    );

    let output = sandbox.run(&["--runs", "a b", "", "--help"]);

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stdout(&output), "--runs\na b\n\n--help\n");
}

#[test]
fn test_binary_override() {
    let sandbox = Sandbox::new();
    sandbox.program("custom-stats", &format!("{ECHO_ARGS}\nexit 0"));

    let output = sandbox
        .command()
        .arg("x")
        .env("LIFT_BENCH_STATS_BIN", "custom-stats")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    // The availability probe's output is discarded.
    assert_eq!(stdout(&output), "x\n");
}

#[test]
fn test_sibling_binary_exit_status() {
    let sandbox = Sandbox::new();
    script(
        &sandbox.dir.path().join("bench_stats_zig"),
        &format!("{ECHO_ARGS}\nexit 3"),
    );

    let output = sandbox.run(&["one", "two"]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "one\ntwo\n");
}

#[test]
fn test_zig_source_fallback() {
    let sandbox = Sandbox::new();
    sandbox.program("zig", &format!("[ \"$1\" = version ] && exit 0\n{ECHO_ARGS}"));

    let output = sandbox.run(&["--json"]);

    let source = sandbox.dir.path().join("bench_stats.zig");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("run\n{}\n--\n--json\n", source.display())
    );
}

#[test]
fn test_python_fallback() {
    let sandbox = Sandbox::new();
    let source = sandbox.dir.path().join("bench_stats.py");
    fs::write(&source, "print('stats')\n").unwrap();
    sandbox.program("uv", &format!("{ECHO_ARGS}\nexit 5"));

    let output = sandbox.run(&["-n", "2"]);

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(
        stdout(&output),
        format!("run\npython\n{}\n-n\n2\n", source.display())
    );
}

#[test]
fn test_python_fallback_without_uv_is_launch_failure() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.dir.path().join("bench_stats.py"), "").unwrap();

    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Fatal: failed to launch 'uv'"), "{stderr}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn test_stdin_is_inherited() {
    let sandbox = Sandbox::new();
    script(
        &sandbox.dir.path().join("bench_stats_zig"),
        r#"while IFS= read -r line; do printf '%s\n' "$line"; done"#,
    );

    let mut child = sandbox
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"1.5\n2.5\n").unwrap();
    }
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1.5\n2.5\n");
}

#[test]
fn test_empty_dir_ignores_current_directory() {
    let sandbox = Sandbox::new();
    let cwd = tempdir().unwrap();
    script(&cwd.path().join("bench_stats_zig"), "exit 3");

    let output = sandbox
        .command()
        .current_dir(cwd.path())
        .env("LIFT_BENCH_STATS_DIR", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Fatal: no Zig runtime and Python fallback missing.\n"
    );
}

#[test]
fn test_relative_dir_runs_the_file_it_found() {
    let sandbox = Sandbox::new();
    let cwd = tempdir().unwrap();
    fs::create_dir(cwd.path().join("tools")).unwrap();
    script(
        &cwd.path().join("tools").join("bench_stats_zig"),
        &format!("{ECHO_ARGS}\nexit 3"),
    );
    // Same name on PATH must not be picked up instead.
    sandbox.program("bench_stats_zig", "exit 9");

    let output = sandbox
        .command()
        .current_dir(cwd.path())
        .env("LIFT_BENCH_STATS_DIR", "tools")
        .arg("a")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "a\n");
}
