// tests/unit_summary.rs
use lintpost_core::summary::{summarize, Classification};
use lintpost_core::types::FileDiagnostics;

fn file(errors: usize, fixable_errors: usize, warnings: usize, fixable_warnings: usize) -> FileDiagnostics {
    FileDiagnostics {
        file_path: "src/app.js".to_string(),
        messages: Vec::new(),
        error_count: errors,
        warning_count: warnings,
        fatal_error_count: 0,
        fixable_error_count: fixable_errors,
        fixable_warning_count: fixable_warnings,
    }
}

#[test]
fn test_exactly_one_classification_holds() {
    for errors in 0..3 {
        for warnings in 0..3 {
            let summary = summarize(&[file(errors, 0, warnings, 0)]);
            let flags = [
                summary.has_errors_and_warnings(),
                summary.has_only_errors(),
                summary.has_only_warnings(),
                summary.is_clean(),
            ];
            let set = flags.iter().filter(|f| **f).count();
            assert_eq!(
                set, 1,
                "expected exactly one flag for {errors} errors, {warnings} warnings"
            );
        }
    }
}

#[test]
fn test_classification_variants() {
    assert_eq!(
        summarize(&[file(1, 0, 1, 0)]).classification(),
        Classification::ErrorsAndWarnings
    );
    assert_eq!(
        summarize(&[file(2, 0, 0, 0)]).classification(),
        Classification::ErrorsOnly
    );
    assert_eq!(
        summarize(&[file(0, 0, 3, 0)]).classification(),
        Classification::WarningsOnly
    );
    assert_eq!(summarize(&[]).classification(), Classification::Clean);
}

#[test]
fn test_empty_input_is_clean() {
    let summary = summarize(&[]);
    assert!(summary.is_clean());
    assert_eq!(summary.problem_count(), 0);
}

#[test]
fn test_clean_files_never_affect_sums() {
    let problematic = vec![file(2, 1, 1, 1), file(0, 0, 3, 2)];
    let mut with_clean = problematic.clone();
    with_clean.insert(0, file(0, 0, 0, 0));
    with_clean.push(file(0, 0, 0, 0));

    assert_eq!(summarize(&with_clean), summarize(&problematic));
}

#[test]
fn test_aggregation_is_order_independent() {
    let a = file(2, 1, 0, 0);
    let b = file(1, 1, 4, 3);
    let c = file(0, 0, 2, 0);

    let forward = summarize(&[a.clone(), b.clone(), c.clone()]);
    let rotated = summarize(&[b.clone(), c.clone(), a.clone()]);
    let reversed = summarize(&[c, b, a]);

    assert_eq!(forward, rotated);
    assert_eq!(forward, reversed);
}

#[test]
fn test_fixability_is_vacuously_true_at_zero() {
    let summary = summarize(&[file(0, 0, 2, 1)]);
    assert!(summary.every_error_fixable(), "no errors means trivially fixable");

    let summary = summarize(&[file(2, 1, 0, 0)]);
    assert!(summary.every_warning_fixable(), "no warnings means trivially fixable");
}

#[test]
fn test_fixability_requires_full_coverage() {
    let summary = summarize(&[file(2, 2, 3, 3)]);
    assert!(summary.every_error_fixable());
    assert!(summary.every_warning_fixable());

    let summary = summarize(&[file(2, 1, 3, 3)]);
    assert!(!summary.every_error_fixable());
    assert!(summary.every_warning_fixable());
}

#[test]
fn test_fatal_count_does_not_drive_fixability() {
    let mut diag = file(2, 2, 0, 0);
    diag.fatal_error_count = 1;
    let summary = summarize(&[diag]);
    assert!(summary.every_error_fixable());
    assert_eq!(summary.error_count, 2);
}

#[test]
fn test_totals_accumulate_across_files() {
    let summary = summarize(&[file(2, 1, 1, 0), file(1, 1, 2, 2), file(0, 0, 1, 1)]);
    assert_eq!(summary.error_count, 3);
    assert_eq!(summary.warning_count, 4);
    assert_eq!(summary.fixable_error_count, 2);
    assert_eq!(summary.fixable_warning_count, 3);
    assert_eq!(summary.problem_count(), 7);
}
