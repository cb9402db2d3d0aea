#[path = "util.rs"]
mod util;

use util::{demos_dir, run_examples, write_script};

#[test]
fn every_demo_passes() {
    let output = run_examples(&demos_dir());
    assert!(output.status.success(), "stdout: {}\nstderr: {}", output.stdout, output.stderr);
    for demo in ["collections.bhn", "conditionals.bhn", "hello.bhn", "strings.bhn"] {
        assert!(
            output.stdout.contains(&format!("Test passed for {demo}.")),
            "missing {demo} in {}",
            output.stdout
        );
    }
    assert!(output.stdout.ends_with("All tests completed.\n"));
}

#[test]
fn conditional_demo_takes_expected_branches() {
    let output = run_examples(&demos_dir());
    assert!(output.stdout.contains("wayask\n"));
    assert!(output.stdout.contains("matdan garna sakinchha\nsarta sakiyo\n"));
    assert!(output.stdout.contains("khali string ra sunya dubai jhutho\n"));
    assert!(!output.stdout.contains("yo chalnu hudaina"));
}

#[test]
fn failing_script_is_reported() {
    let script = write_script("bigreko.bhn", "bhanai(nabhayeko)\n");
    let output = run_examples(script.dir.path());
    assert!(!output.status.success());
    assert!(output.stderr.contains("Test failed for bigreko.bhn"), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("All tests completed."));
}

#[test]
fn empty_directory_has_nothing_to_test() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_examples(dir.path());
    assert!(output.status.success());
    assert_eq!(output.stdout, "No .bhn files found to test.\n");
}
