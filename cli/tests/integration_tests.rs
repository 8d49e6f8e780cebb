use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("rcat_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn rcat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rcat"))
        .args(args)
        .output()
        .expect("failed to run rcat")
}

#[test]
fn test_concatenates_inputs_to_stdout() {
    let dir = TempDir::new("stdout");
    let a = dir.write("a.txt", "alpha");
    let b = dir.write("b.txt", "beta");

    let out = rcat(&[a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "alphabeta");
}

#[test]
fn test_output_option_writes_file() {
    let dir = TempDir::new("output");
    let a = dir.write("a.txt", "alpha");
    let dest = dir.join("out.txt");

    let out = rcat(&["-o", dest.to_str().unwrap(), a.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_to_string(&dest).unwrap(), "alpha");
}

#[test]
fn test_separator_with_value_joins_inputs() {
    let dir = TempDir::new("separator");
    let a = dir.write("a.txt", "alpha");
    let b = dir.write("b.txt", "beta");

    let out = rcat(&["--separator", ",", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "alpha,beta");
}

#[test]
fn test_separator_before_option_defaults_to_newline() {
    let dir = TempDir::new("separator_default");
    let a = dir.write("a.txt", "alpha");
    let b = dir.write("b.txt", "beta");

    // "-s" must not steal "-v": the separator falls back to a newline
    // and verbose mode is still enabled.
    let out = rcat(&["-s", "-v", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "alpha\nbeta");
    assert!(String::from_utf8_lossy(&out.stderr).contains("wrote 2 input(s)"));
}

#[test]
fn test_missing_output_value_exits_2() {
    let out = rcat(&["-o"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&out.stderr)
            .contains("option `-o` requires an argument, but none is given")
    );
}

#[test]
fn test_no_inputs_exits_2() {
    let out = rcat(&["-v"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no input files"));
}

#[test]
fn test_missing_input_file_exits_1() {
    let dir = TempDir::new("missing_input");
    let nope = dir.join("does_not_exist.txt");

    let out = rcat(&[nope.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_inputs_beyond_positional_slots_are_ignored() {
    let dir = TempDir::new("excess");
    let mut args: Vec<String> = Vec::new();
    for i in 0..9 {
        let path = dir.write(&format!("f{i}.txt"), &i.to_string());
        args.push(path.to_str().unwrap().to_string());
    }

    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let out = rcat(&arg_refs);
    assert!(out.status.success());
    // Only the first eight positional slots consume inputs.
    assert_eq!(String::from_utf8_lossy(&out.stdout), "01234567");
}
