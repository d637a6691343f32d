//! End-to-end tests driving the `diff-sloc` binary.

mod common;

use common::{GIT_PATCH, SVN_PATCH, TestFixture, diff_sloc};
use predicates::prelude::*;

// =============================================================================
// Table Output
// =============================================================================

#[test]
fn git_patch_from_file_prints_full_table() {
    let fixture = TestFixture::new();
    let patch = fixture.create_file("changes.patch", GIT_PATCH);

    let expected = "\
Name        Code Comment Blank
------------------------------
app.py    +    2       1     1
          -    0       1     0
README.md +    0       1     1
          -    0       0     0
------------------------------
Total     +    2       2     2
          -    0       1     0
";

    diff_sloc()
        .current_dir(fixture.path())
        .arg(&patch)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn svn_patch_from_stdin() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .write_stdin(SVN_PATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains("main.c +    1       1     0\n"))
        .stdout(predicate::str::contains("       -    1       0     0\n"));
}

#[test]
fn dash_reads_stdin() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .arg("-")
        .write_stdin(SVN_PATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains("main.c"));
}

#[test]
fn only_add_omits_removed_rows() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .arg("--only-add")
        .write_stdin(GIT_PATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains(" - ").not())
        .stdout(predicate::str::ends_with("Total     +    2       2     2\n"));
}

#[test]
fn only_total_prints_only_totals() {
    let fixture = TestFixture::new();

    let expected = "\
Name    Code Comment Blank
--------------------------
Total +    2       2     2
      -    0       1     0
";

    diff_sloc()
        .current_dir(fixture.path())
        .arg("--only-total")
        .write_stdin(GIT_PATCH)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn json_format() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .args(["--format", "json"])
        .write_stdin(GIT_PATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filename\": \"app.py\""))
        .stdout(predicate::str::contains("\"language\": \"python\""))
        .stdout(predicate::str::contains("\"total\""));
}

#[test]
fn output_flag_writes_file() {
    let fixture = TestFixture::new();
    let out = fixture.path().join("report.txt");

    diff_sloc()
        .current_dir(fixture.path())
        .arg("--output")
        .arg(&out)
        .write_stdin(SVN_PATCH)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(out).unwrap();
    assert!(content.starts_with("Name"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn content_before_header_exits_with_input_error() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .write_stdin("+orphan line\ndiff --git a/a.c b/a.c\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("MalformedDiff"));
}

#[test]
fn patch_without_headers_exits_with_input_error() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .write_stdin("nothing to see here\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("EmptyInput"));
}

#[test]
fn missing_patch_file_exits_with_input_error() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .arg("does-not-exist.patch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.patch"));
}

#[test]
fn unknown_format_is_rejected_by_cli() {
    diff_sloc()
        .args(["--format", "sarif"])
        .write_stdin(GIT_PATCH)
        .assert()
        .failure();
}

// =============================================================================
// Verbosity
// =============================================================================

#[test]
fn verbose_reports_parsed_files_on_stderr() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .arg("-vv")
        .write_stdin(GIT_PATCH)
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed 2 file(s)"))
        .stderr(predicate::str::contains("b/src/app.py [python]: +4 -1"));
}

#[test]
fn quiet_suppresses_progress_but_not_table() {
    let fixture = TestFixture::new();

    diff_sloc()
        .current_dir(fixture.path())
        .args(["-v", "--quiet"])
        .write_stdin(GIT_PATCH)
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Total"));
}
