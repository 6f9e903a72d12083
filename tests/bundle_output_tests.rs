//! Integration tests for bundle output and response-file round-trips.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fb() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fb"))
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write fixture");
}

#[test]
fn python_filter_with_blank_removal_excludes_other_languages_and_artifacts() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.py", "print(1)\n\n");
    write(dir.path(), "b.js", "x=1;\n");
    write(dir.path(), "bin/debug/c.py", "print(3)\n");

    fb().current_dir(dir.path())
        .args(["bundle", "-l", "python", "-o", "out.txt", "-r"])
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("out.txt")).expect("read bundle");
    assert_eq!(out, "print(1)\n--------------------\n\n");
}

#[test]
fn note_and_author_annotate_the_bundle() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.py", "print(1)\n");

    fb().current_dir(dir.path())
        .args(["bundle", "-l", "all", "-o", "out.txt", "-n", "-a", "ada"])
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("out.txt")).expect("read bundle");
    assert_eq!(
        out,
        "// Author: ada\n\n--------------------\n\n// Source: a.py\nprint(1)\n--------------------\n\n"
    );
}

#[test]
fn sorted_bundle_orders_by_language_tag() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.py", "print(1)\n");
    write(dir.path(), "z.cs", "class C {}\n");

    fb().current_dir(dir.path())
        .args(["bundle", "-l", "all", "-o", "out.txt", "-s", "-n"])
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("out.txt")).expect("read bundle");
    let cs = out.find("// Source: z.cs").expect("csharp header");
    let py = out.find("// Source: a.py").expect("python header");
    assert!(cs < py, "csharp should sort before python");
}

#[test]
fn rerun_with_unchanged_tree_is_byte_identical() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.py", "print(1)\n");
    write(dir.path(), "b.js", "x=1;\n");

    fb().current_dir(dir.path())
        .args(["bundle", "-l", "all", "-o", "out1.txt", "-s"])
        .assert()
        .success();
    fb().current_dir(dir.path())
        .args(["bundle", "-l", "all", "-o", "out2.txt", "-s"])
        .assert()
        .success();

    let out1 = fs::read(dir.path().join("out1.txt")).expect("read out1");
    let out2 = fs::read(dir.path().join("out2.txt")).expect("read out2");
    assert_eq!(out1, out2);
}

#[test]
fn unreadable_file_does_not_stop_the_bundle() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.py", "print(1)\n");
    fs::write(dir.path().join("broken.py"), [0xff, 0xfe, 0xfd]).expect("write fixture");
    write(dir.path(), "c.py", "print(3)\n");

    let assert = fb()
        .current_dir(dir.path())
        .args(["bundle", "-l", "python", "-o", "out.txt"])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("broken.py"), "warning should name the failing file");

    let out = fs::read_to_string(dir.path().join("out.txt")).expect("read bundle");
    assert!(out.contains("print(1)"));
    assert!(out.contains("print(3)"));
}

#[test]
fn create_rsp_round_trips_through_the_bundle_command() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.cs", "class A {}\n");
    write(dir.path(), "b.py", "print(1)\n");

    // All options given on the command line; blank answers keep them.
    fb().current_dir(dir.path())
        .args([
            "create-rsp",
            "--language",
            "csharp",
            "--output",
            "from_rsp.txt",
            "--note",
            "true",
        ])
        .write_stdin("\n\n\n\n\n\n\n")
        .assert()
        .success();

    let rsp = fs::read_to_string(dir.path().join("bundle.rsp")).expect("read rsp");
    assert_eq!(rsp, "--language csharp\n--output from_rsp.txt\n--note\n");

    fb().current_dir(dir.path()).args(["bundle", "@bundle.rsp"]).assert().success();
    fb().current_dir(dir.path())
        .args(["bundle", "--language", "csharp", "--output", "direct.txt", "--note"])
        .assert()
        .success();

    let from_rsp = fs::read_to_string(dir.path().join("from_rsp.txt")).expect("read rsp bundle");
    let direct = fs::read_to_string(dir.path().join("direct.txt")).expect("read direct bundle");
    assert_eq!(from_rsp, direct);
    assert!(from_rsp.contains("// Source: a.cs"));
    assert!(!from_rsp.contains("b.py"));
}

#[test]
fn create_rsp_interactive_answers_fill_omitted_options() {
    let dir = TempDir::new().expect("temp dir");

    fb().current_dir(dir.path())
        .args(["create-rsp"])
        .write_stdin("all\nout.txt\nmaybe\ntrue\nfalse\nfalse\nada\ntrue\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Response file created successfully"));

    let rsp = fs::read_to_string(dir.path().join("bundle.rsp")).expect("read rsp");
    assert_eq!(
        rsp,
        "--language all\n--output out.txt\n--note\n--author ada\n--remove-comments true\n"
    );
}
