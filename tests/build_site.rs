//! End-to-end build tests: run the compiled binary over the fixture content
//! and inspect the generated tree.
//!
//! Run with: `cargo test --test build_site`

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ===========================================================================
// Setup helpers
// ===========================================================================

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn copy_dir_recursive(src: &Path, dst: &Path) {
    fs::create_dir_all(dst).unwrap();
    for entry in fs::read_dir(src).unwrap() {
        let entry = entry.unwrap();
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir_recursive(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Fixture content copied into a fresh temp dir, plus an output dir beside it.
fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    copy_dir_recursive(&fixtures(), &source);
    let output = tmp.path().join("dist");
    (tmp, source, output)
}

fn run(args: &[&str], source: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wanderlust"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .output()
        .expect("failed to run wanderlust")
}

fn read(output: &Path, page: &str) -> String {
    fs::read_to_string(output.join(page)).unwrap_or_else(|e| panic!("{page}: {e}"))
}

// ===========================================================================
// Successful build
// ===========================================================================

#[test]
fn build_writes_every_route() {
    let (_tmp, source, output) = workspace();
    let result = run(&["build"], &source, &output);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    for page in [
        "index.html",
        "404.html",
        "about/index.html",
        "destinations/kyoto/index.html",
        "destinations/iceland/index.html",
        "gallery/index.html",
        "gallery/kyoto/index.html",
        "gallery/iceland/index.html",
    ] {
        assert!(output.join(page).is_file(), "missing {page}");
    }
}

#[test]
fn build_writes_one_viewer_per_image() {
    let (_tmp, source, output) = workspace();
    assert!(run(&["build"], &source, &output).status.success());

    // 4 Kyoto + 3 Iceland
    assert!(output.join("gallery/7.html").is_file());
    assert!(!output.join("gallery/8.html").exists());
    assert!(output.join("destinations/kyoto/4.html").is_file());
    assert!(!output.join("destinations/kyoto/5.html").exists());
    assert!(output.join("gallery/iceland/3.html").is_file());
    // Curated selection caps at 6
    assert!(output.join("6.html").is_file());
    assert!(!output.join("7.html").exists());
}

#[test]
fn build_copies_assets() {
    let (_tmp, source, output) = workspace();
    assert!(run(&["build"], &source, &output).status.success());
    assert!(output.join("images/portrait.svg").is_file());
    assert!(output.join("images/kyoto/01.svg").is_file());
}

#[test]
fn pages_carry_expected_titles() {
    let (_tmp, source, output) = workspace();
    assert!(run(&["build"], &source, &output).status.success());

    assert!(read(&output, "index.html").contains("<title>Kyoto - Elena Marsh</title>"));
    assert!(
        read(&output, "destinations/iceland/index.html")
            .contains("<title>Iceland - Elena Marsh</title>")
    );
    assert!(read(&output, "gallery/index.html").contains("<title>Collection - Elena Marsh</title>"));
    assert!(
        read(&output, "about/index.html")
            .contains("<title>About Elena Marsh - Travel &amp; Exploration</title>")
    );
}

#[test]
fn viewer_pages_wrap_and_close_to_collection() {
    let (_tmp, source, output) = workspace();
    assert!(run(&["build"], &source, &output).status.success());

    let first = read(&output, "destinations/iceland/1.html");
    assert!(first.contains(r#"data-prev="/destinations/iceland/3.html""#));
    assert!(first.contains(r#"data-next="/destinations/iceland/2.html""#));
    assert!(first.contains(r#"data-close="/destinations/iceland/""#));
    assert!(first.contains(r#"<body class="viewer-open">"#));

    let last = read(&output, "destinations/iceland/3.html");
    assert!(last.contains(r#"data-next="/destinations/iceland/1.html""#));
}

#[test]
fn seeded_selection_is_stable_across_builds() {
    let (_tmp, source, output) = workspace();
    assert!(run(&["build"], &source, &output).status.success());
    let first = read(&output, "index.html");

    let second_output = output.with_file_name("dist-again");
    assert!(run(&["build"], &source, &second_output).status.success());
    let second = read(&second_output, "index.html");

    // Same seed, same selection
    assert_eq!(first, second);
}

#[test]
fn build_output_lists_pages() {
    let (_tmp, source, output) = workspace();
    let result = run(&["build"], &source, &output);
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(stdout.contains("==> Loading"));
    assert!(stdout.contains("001 Kyoto (4 photos) [featured]"));
    assert!(stdout.contains("\u{2192} destinations/kyoto/index.html (4 viewer pages)"));
    assert!(stdout.contains("==> Build complete"));
}

// ===========================================================================
// Failed load
// ===========================================================================

#[test]
fn missing_destination_writes_error_site_and_fails() {
    let (_tmp, source, output) = workspace();
    fs::remove_file(source.join("data/destinations/iceland.json")).unwrap();

    let result = run(&["build"], &source, &output);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to load portfolio data"));
    assert!(stderr.contains("iceland"));

    let index = read(&output, "index.html");
    assert!(index.contains("Failed to load portfolio data"));
    assert!(!index.contains(r#"class="masonry"#));
    assert!(output.join("404.html").is_file());
    assert!(!output.join("destinations").exists());
    assert!(!output.join("gallery").exists());
}

#[test]
fn corrupt_profile_fails_check() {
    let (_tmp, source, output) = workspace();
    fs::write(source.join("data/photographer.json"), "{ \"name\": ").unwrap();

    let result = run(&["check"], &source, &output);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("photographer profile"));
    assert!(!output.exists());
}

// ===========================================================================
// Other commands
// ===========================================================================

#[test]
fn check_writes_nothing() {
    let (_tmp, source, output) = workspace();
    let result = run(&["check"], &source, &output);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("==> Content is valid"));
    assert!(!output.exists());
}

#[test]
fn unknown_config_key_is_rejected() {
    let (_tmp, source, output) = workspace();
    fs::write(source.join("config.toml"), "[layout]\ncolumnz = 3\n").unwrap();
    let result = run(&["build"], &source, &output);
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn gen_config_prints_stock_config() {
    let (_tmp, source, output) = workspace();
    let result = run(&["gen-config"], &source, &output);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("[discovery]"));
    assert!(stdout.contains("mobile_breakpoint = 768"));
}
