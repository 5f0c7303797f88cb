//! File-level integration tests for report assembly.

use skillmd_analysis::{DEFAULT_BUDGET, analyze_file, compare_baseline};
use skillmd_types::BudgetStatus;

fn write_md(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn analyze_file_reads_and_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_md(
        &dir,
        "SKILL.md",
        "# Title\nHello world hello world hello world\n",
    );

    let report = analyze_file(&path, DEFAULT_BUDGET).expect("analysis succeeds");
    assert_eq!(report.file, path.display().to_string());
    // "#" splits as its own fragment: 2 header words plus 6 body words.
    assert_eq!(report.word_count, 8);
    assert_eq!(report.sections.get("Title"), Some(8));
    assert_eq!(report.budget_status, BudgetStatus::Pass);
    assert!(report.baseline_comparison.is_none());
}

#[test]
fn analyze_file_error_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.md");

    let err = analyze_file(&path, DEFAULT_BUDGET).unwrap_err();
    assert!(format!("{err:#}").contains("missing.md"));
}

#[test]
fn baseline_comparison_between_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let baseline_path = write_md(&dir, "old.md", &"w ".repeat(75));
    let current_path = write_md(&dir, "new.md", &"w ".repeat(90));

    let baseline = analyze_file(&baseline_path, DEFAULT_BUDGET).expect("baseline");
    let current = analyze_file(&current_path, DEFAULT_BUDGET).expect("current");
    let cmp = compare_baseline(&current, &baseline);

    assert_eq!(cmp.baseline_file, baseline_path.display().to_string());
    assert_eq!(cmp.summary, "100 -> 120 (+20.0%)");
}
