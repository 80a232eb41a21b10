use tcheck_core::{produce_diff, LineStatus, DEFAULT_MISMATCH_LIMIT};

#[test]
fn identical_sequences_report_no_mismatches() {
    let lines = ["alpha", "beta", "gamma"];
    let diff = produce_diff(&lines, &lines, DEFAULT_MISMATCH_LIMIT);
    assert!(diff.is_equal());
    assert!(!diff.is_truncated());
    assert!(diff.mismatches().is_empty());
}

#[test]
fn disjoint_sequences_truncate_after_three() {
    let expected: Vec<String> = (0..10).map(|i| format!("e{i}")).collect();
    let got: Vec<String> = (0..10).map(|i| format!("g{i}")).collect();
    let diff = produce_diff(&expected, &got, DEFAULT_MISMATCH_LIMIT);
    assert!(!diff.is_equal());
    assert!(diff.is_truncated());
    assert_eq!(diff.mismatches(), vec![0, 1, 2]);
    assert!(diff
        .report()
        .ends_with("... stopping after 3 consecutive unequal lines"));
}

#[test]
fn equal_line_resets_the_run() {
    let expected = ["a", "b", "same", "c", "d"];
    let got = ["x", "y", "same", "z", "w"];
    let diff = produce_diff(&expected, &got, DEFAULT_MISMATCH_LIMIT);
    assert!(!diff.is_truncated());
    assert_eq!(diff.mismatches(), vec![0, 1, 3, 4]);
}

#[test]
fn longer_got_marks_additions() {
    let expected = ["abc", "def", "xyz"];
    let got = ["abcd", "def", "xyza", "longer"];
    let diff = produce_diff(&expected, &got, DEFAULT_MISMATCH_LIMIT);
    assert!(!diff.is_equal());
    assert_eq!(diff.mismatches(), vec![0, 2, 3]);
    let statuses: Vec<_> = diff.entries().iter().map(|entry| entry.status).collect();
    assert_eq!(
        statuses,
        vec![
            LineStatus::Changed,
            LineStatus::Equal,
            LineStatus::Changed,
            LineStatus::ExtraGot
        ]
    );
    assert_eq!(
        diff.report(),
        [
            " !   e[0] `abc`",
            " !   g[0] `abcd`",
            " =  eg[1] `def`",
            " !   e[2] `xyz`",
            " !   g[2] `xyza`",
            "-!   e[3] <missing>",
            " !+  g[3] `longer`",
        ]
        .join("\n")
    );
}

#[test]
fn zero_limit_reports_everything() {
    let expected = ["a", "b", "c", "d", "e"];
    let got = ["1", "2", "3", "4", "5"];
    let diff = produce_diff(&expected, &got, 0);
    assert!(!diff.is_truncated());
    assert_eq!(diff.mismatches().len(), 5);
}
