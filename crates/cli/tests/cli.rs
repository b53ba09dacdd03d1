// ABOUTME: End-to-end tests for the postpress binary.
// ABOUTME: Runs the compiled binary against temp files and checks outputs and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn postpress_cmd() -> Command {
    Command::cargo_bin("postpress").unwrap()
}

const PAGE: &str = r#"<html><head>
<title>Test Post</title>
<meta name="description" content="A post about testing">
<meta name="author" content="Jo Writer">
<meta name="dcterms.date" content="2025-06-27">
</head><body>
<div id="quarto-content" class="page-columns">
<p>preamble</p>
<h2>First</h2>
<p>alpha</p>
<h2>Second</h2>
<p>beta</p>
</div>
</body></html>"#;

#[test]
fn restructure_writes_sectioned_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    fs::write(&input, PAGE).unwrap();

    postpress_cmd()
        .arg("restructure")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("saved:"));

    let out = fs::read_to_string(dir.path().join("post.min.html")).unwrap();
    assert!(out.contains("<main>"));
    assert!(out.contains("<article>"));
    assert!(out.contains("<section>"));
    assert!(out.contains(r#"application/ld+json"#));
    assert!(out.contains("Test Post"));
    assert!(!out.contains("quarto-content"));
}

#[test]
fn restructure_missing_input_fails() {
    postpress_cmd()
        .arg("restructure")
        .arg("/nonexistent/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn restructure_without_wrapper_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("plain.html");
    fs::write(&input, "<html><head></head><body><p>no wrapper</p></body></html>").unwrap();

    postpress_cmd()
        .arg("restructure")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content wrapper"));
}

#[test]
fn restructure_honors_explicit_output_and_heading_level() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("restructured.html");
    fs::write(
        &input,
        r#"<html><head><title>T</title></head><body>
        <div id="quarto-content"><h3>Sub</h3><p>x</p></div>
        </body></html>"#,
    )
    .unwrap();

    postpress_cmd()
        .arg("restructure")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--heading-level")
        .arg("3")
        .assert()
        .success();

    let out = fs::read_to_string(&output).unwrap();
    assert!(out.contains("<section><h3>Sub</h3>"));
}

#[test]
fn minify_strips_comments_and_whitespace() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    fs::write(
        &input,
        "<html><head></head><body>\n  <!-- note -->\n  <p>hello   world</p>\n</body></html>",
    )
    .unwrap();

    postpress_cmd()
        .arg("minify")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("minified:"));

    let out = fs::read_to_string(dir.path().join("page.min.html")).unwrap();
    assert!(!out.contains("<!--"));
    assert!(out.contains("<p>hello world</p>"));
    assert!(out.len() < fs::read_to_string(&input).unwrap().len());
}

#[test]
fn minify_keep_comments_preserves_them() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<p>x</p><!-- keep me -->").unwrap();

    postpress_cmd()
        .arg("minify")
        .arg(&input)
        .arg("--keep-comments")
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("page.min.html")).unwrap();
    assert!(out.contains("<!-- keep me -->"));
}

#[test]
fn enhance_dry_run_prints_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    fs::write(&input, PAGE).unwrap();

    postpress_cmd()
        .arg("enhance")
        .arg(&input)
        .arg("--defaults")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON-LD that would be added:"))
        .stdout(predicate::str::contains("@context"))
        .stdout(predicate::str::contains("Test Post"));

    // Input untouched.
    assert_eq!(fs::read_to_string(&input).unwrap(), PAGE);
}

#[test]
fn enhance_defaults_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    fs::write(&input, PAGE).unwrap();

    postpress_cmd()
        .arg("enhance")
        .arg(&input)
        .arg("--defaults")
        .assert()
        .success()
        .stderr(predicate::str::contains("enhanced:"));

    let out = fs::read_to_string(&input).unwrap();
    assert!(out.contains(r#"application/ld+json"#));
    assert!(out.contains(r#"property="og:title""#));
    assert!(out.contains(r#"name="twitter:card""#));
    assert!(out.contains(r#"name="robots""#));
}

#[test]
fn enhance_twice_leaves_one_json_ld_script() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    fs::write(&input, PAGE).unwrap();

    for _ in 0..2 {
        postpress_cmd()
            .arg("enhance")
            .arg(&input)
            .arg("--defaults")
            .assert()
            .success();
    }

    let out = fs::read_to_string(&input).unwrap();
    assert_eq!(out.matches("application/ld+json").count(), 1);
    assert_eq!(out.matches(r#"property="og:title""#).count(), 1);
}

#[test]
fn enhance_explicit_output_preserves_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("enhanced.html");
    fs::write(&input, PAGE).unwrap();

    postpress_cmd()
        .arg("enhance")
        .arg(&input)
        .arg("--defaults")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&input).unwrap(), PAGE);
    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains("application/ld+json"));
}
