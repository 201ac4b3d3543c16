// End-to-end tests driving the compiled shell binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const ERROR_LINE: &str = "An error has occurred\n";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wish_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn wish(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wish"));
    cmd.env("HOME", dir).current_dir(dir);
    cmd
}

fn run_batch(dir: &Path, script: &str) -> Output {
    let batch = dir.join("batch.txt");
    fs::write(&batch, script).unwrap();
    wish(dir).arg(&batch).output().unwrap()
}

fn run_interactive(dir: &Path, input: &str) -> Output {
    let mut child = wish(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_redirect_truncates_and_captures_both_streams() {
    let dir = scratch_dir("redirect");
    fs::write(dir.join("out.txt"), "old contents\n").unwrap();

    let output = run_batch(
        &dir,
        "path /bin /usr/bin\nls /wish-nonexistent-dir > out.txt\necho done > done.txt\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    let captured = fs::read_to_string(dir.join("out.txt")).unwrap();
    assert!(!captured.contains("old contents"));
    assert!(captured.contains("wish-nonexistent-dir"));
    assert_eq!(fs::read_to_string(dir.join("done.txt")).unwrap(), "done\n");
}

#[test]
fn test_unopenable_redirect_target_fails_only_the_child() {
    let dir = scratch_dir("redirect_unopenable");
    let output = run_batch(
        &dir,
        "path /bin /usr/bin\necho hi > /wish-no-dir/out.txt\necho after\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "after\n");
}

#[test]
fn test_parallel_commands_all_finish_before_next_line() {
    let dir = scratch_dir("parallel");
    let output = run_batch(
        &dir,
        "path /bin /usr/bin\n\
         echo one > a.txt & echo two > b.txt & echo three > c.txt\n\
         cat a.txt b.txt c.txt > all.txt\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.join("all.txt")).unwrap(),
        "one\ntwo\nthree\n"
    );
}

#[test]
fn test_malformed_redirects_spawn_nothing() {
    let dir = scratch_dir("malformed");
    let output = run_batch(
        &dir,
        "path /bin /usr/bin\necho hi > out.txt extra\n> echo hi\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE.repeat(2));
    assert!(!dir.join("out.txt").exists());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_builtin_errors_keep_shell_running() {
    let dir = scratch_dir("builtins");
    let output = run_batch(
        &dir,
        "cd /wish-nonexistent\ncd\nexit now\npath /bin /usr/bin\necho alive\nexit\necho unreachable\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE.repeat(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "alive\n");
}

#[test]
fn test_empty_path_resolves_nothing() {
    let dir = scratch_dir("emptypath");
    let output = run_batch(&dir, "path\nls\n/bin/echo direct\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "direct\n");
}

#[test]
fn test_cd_changes_where_children_run() {
    let dir = scratch_dir("cd");
    fs::create_dir_all(dir.join("sub")).unwrap();
    let output = run_batch(&dir, "path /bin /usr/bin\ncd sub\npwd > here.txt\n");

    assert_eq!(output.status.code(), Some(0));
    let here = fs::read_to_string(dir.join("sub").join("here.txt")).unwrap();
    assert!(here.trim_end().ends_with("sub"));
}

#[test]
fn test_interactive_prompt_and_exit() {
    let dir = scratch_dir("interactive");
    let output = run_interactive(&dir, "path /bin /usr/bin\necho hello\nexit\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "wish> wish> hello\nwish> "
    );
}

#[test]
fn test_interactive_end_of_input_is_an_error() {
    let dir = scratch_dir("interactive_eof");
    let output = run_interactive(&dir, "path /bin\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE);
}

#[test]
fn test_quiet_flag_hides_prompt() {
    let dir = scratch_dir("quiet");
    let mut child = wish(&dir)
        .arg("-q")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"exit\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_startup_faults() {
    let dir = scratch_dir("startup");

    let too_many = wish(&dir).args(["a.txt", "b.txt"]).output().unwrap();
    assert_eq!(too_many.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&too_many.stderr), ERROR_LINE);

    let missing = wish(&dir).arg("missing.txt").output().unwrap();
    assert_eq!(missing.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&missing.stderr), ERROR_LINE);

    let unknown = wish(&dir).arg("--frobnicate").output().unwrap();
    assert_eq!(unknown.status.code(), Some(1));
}

#[test]
fn test_config_value_named_like_debug_flag() {
    let dir = scratch_dir("config_dash_d");

    // "-d" is the config file name here, so no debug detail follows the error line.
    let output = wish(&dir).args(["--config", "-d"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE);

    let output = wish(&dir)
        .args(["-d", "--config", "missing-rc"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with(ERROR_LINE));
    assert!(stderr.contains("wish: "));
}

#[test]
fn test_exec_failure_is_reported_by_child() {
    let dir = scratch_dir("badexec");
    let bogus = dir.join("bogus");
    fs::write(&bogus, [0u8, 1, 2, 3]).unwrap();
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(&bogus, fs::Permissions::from_mode(0o755)).unwrap();

    let output = run_batch(&dir, "./bogus\n");

    // Image-replacement failures stay inside the child.
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), ERROR_LINE);
}
