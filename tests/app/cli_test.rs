/*!
 * Command-Line Tests
 * Drive the compiled binary: flags, log file contents, exit status
 */

use brocopy::core::limits::{DEFAULT_LOG_FILE, LOG_SEP_LINE};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    src: PathBuf,
    csv: PathBuf,
    log: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.prn");
        let csv = dir.path().join("map.csv");
        let log = dir.path().join("run.log");
        fs::write(&src, b"payload").unwrap();
        fs::write(
            &csv,
            format!(
                "key,path\nfoo,{}\nbar,{}\n",
                dir.path().join("foo.prn").display(),
                dir.path().join("bar.prn").display()
            ),
        )
        .unwrap();
        Self { dir, src, csv, log }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn brocopy() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brocopy"));
    cmd.env("RUST_LOG", "info")
        .env_remove("BROCOPY_LOG_JSON")
        .env_remove("BROCOPY_ARENA_SIZE");
    cmd
}

fn run_with_log(ws: &Workspace, extra: &[&str]) -> Output {
    brocopy()
        .arg("-log")
        .arg(&ws.log)
        .args(extra)
        .arg(&ws.src)
        .arg(&ws.csv)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_copies_and_logs_session() {
    let ws = Workspace::new();
    let output = brocopy()
        .arg("-log")
        .arg(&ws.log)
        .arg(&ws.src)
        .arg(&ws.csv)
        .arg("FOO")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(ws.path("foo.prn").exists());
    assert!(!ws.path("bar.prn").exists());

    let log = fs::read_to_string(&ws.log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.first(), Some(&LOG_SEP_LINE));
    assert_eq!(lines.last(), Some(&LOG_SEP_LINE));
    assert!(lines[2].starts_with("run id: "));
    assert!(log.contains("amount of matches in CSV from arg keys"));
    assert!(log.contains("copied"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_log_is_appended_across_runs() {
    let ws = Workspace::new();
    run_with_log(&ws, &["-a"]);
    run_with_log(&ws, &["-a"]);

    let log = fs::read_to_string(&ws.log).unwrap();
    assert_eq!(log.lines().filter(|l| *l == LOG_SEP_LINE).count(), 4);
    assert_eq!(log.matches("run id: ").count(), 2);
}

#[test]
fn test_all_csv_paths_and_remove_source() {
    let ws = Workspace::new();
    let output = run_with_log(&ws, &["--all-csv-paths", "-rm"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(ws.path("foo.prn").exists());
    assert!(ws.path("bar.prn").exists());
    assert!(!ws.src.exists());
    assert!(fs::read_to_string(&ws.log)
        .unwrap()
        .contains("source file removed"));
}

#[test]
fn test_verbose_mirrors_to_stdout() {
    let ws = Workspace::new();
    let output = run_with_log(&ws, &["-v", "-a"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("amount of paths parsed"));
}

#[test]
fn test_missing_keys_fails() {
    let ws = Workspace::new();
    let output = run_with_log(&ws, &[]);

    assert!(!output.status.success());
    assert!(!ws.path("foo.prn").exists());
    assert!(fs::read_to_string(&ws.log).unwrap().contains("run aborted"));
}

#[test]
fn test_inaccessible_source_fails() {
    let ws = Workspace::new();
    fs::remove_file(&ws.src).unwrap();
    let output = run_with_log(&ws, &["-a"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("inaccessible"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_source_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ws = Workspace::new();
    let src = ws.dir.path().join(OsStr::from_bytes(b"caf\xe9.prn"));
    fs::copy(&ws.src, &src).unwrap();

    let output = brocopy()
        .arg("-log")
        .arg(&ws.log)
        .arg(&src)
        .arg(&ws.csv)
        .arg("foo")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(fs::read(ws.path("foo.prn")).unwrap(), b"payload");
}

#[test]
fn test_arena_size_from_env() {
    let ws = Workspace::new();
    let output = brocopy()
        .env("BROCOPY_ARENA_SIZE", "32")
        .arg("--log")
        .arg(&ws.log)
        .arg(&ws.src)
        .arg(&ws.csv)
        .arg("foo")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!ws.path("foo.prn").exists());
}

#[test]
fn test_json_log_lines() {
    let ws = Workspace::new();
    let output = brocopy()
        .env("BROCOPY_LOG_JSON", "1")
        .arg("--log")
        .arg(&ws.log)
        .arg(&ws.src)
        .arg(&ws.csv)
        .arg("foo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let log = fs::read_to_string(&ws.log).unwrap();
    let events: Vec<&str> = log.lines().filter(|l| l.starts_with('{')).collect();
    assert!(!events.is_empty());
    assert!(events.iter().all(|l| l.ends_with('}') && l.contains("\"fields\"")));
}

#[test]
#[serial]
fn test_fallback_log_next_to_executable() {
    let ws = Workspace::new();
    let fallback = Path::new(env!("CARGO_BIN_EXE_brocopy"))
        .parent()
        .unwrap()
        .join(DEFAULT_LOG_FILE);

    let output = brocopy()
        .arg(&ws.src)
        .arg(&ws.csv)
        .arg("bar")
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let log = fs::read_to_string(&fallback).unwrap();
    assert!(log.contains(&ws.csv.display().to_string()));
}

#[test]
#[serial]
fn test_unwritable_log_falls_back() {
    let ws = Workspace::new();
    let fallback = Path::new(env!("CARGO_BIN_EXE_brocopy"))
        .parent()
        .unwrap()
        .join(DEFAULT_LOG_FILE);

    let output = brocopy()
        .arg("--log")
        .arg(ws.path("no-such-dir").join("run.log"))
        .arg(&ws.src)
        .arg(&ws.csv)
        .arg("foo")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not open log file"));
    assert!(fs::read_to_string(&fallback)
        .unwrap()
        .contains(&ws.src.display().to_string()));
}
