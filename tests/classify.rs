use kira_pbodyqc::classify::classify;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn numeric_runs_sort_by_value() {
    let buckets = classify(&names(&["f_2_x", "f_10_x", "f_1_x"]), &["f_"]);
    assert_eq!(buckets.matched(0), names(&["f_1_x", "f_2_x", "f_10_x"]).as_slice());
}

#[test]
fn first_keyword_wins() {
    let files = names(&["a_print_skel_b.tif"]);
    let buckets = classify(&files, &["_print_", "_nuc_", "_skel_"]);
    assert_eq!(buckets.matched(0).len(), 1);
    assert!(buckets.matched(1).is_empty());
    assert!(buckets.matched(2).is_empty());
    assert!(buckets.unmatched().is_empty());
}

#[test]
fn unmatched_files_collect_in_last_bucket() {
    let files = names(&["x_10.gif", "x_9.txt", "y.xlsx"]);
    let buckets = classify(&files, &[".xlsx"]);
    assert_eq!(buckets.n_keywords(), 1);
    assert_eq!(buckets.bucket(1), names(&["x_9.txt", "x_10.gif"]).as_slice());
    assert_eq!(buckets.bucket(0), names(&["y.xlsx"]).as_slice());
}

#[test]
fn somaprint_is_not_a_dendrite_print() {
    let files = names(&["MAX_c1_somaprint_1.tif", "MAX_c1_print_1.tif"]);
    let buckets = classify(&files, &["_nucprint_", "_print_", "_skel_", "_somaprint_"]);
    assert_eq!(buckets.matched(1), names(&["MAX_c1_print_1.tif"]).as_slice());
    assert_eq!(buckets.matched(3), names(&["MAX_c1_somaprint_1.tif"]).as_slice());
}

#[test]
fn taking_a_bucket_leaves_it_empty() {
    let mut buckets = classify(&names(&["a.gif", "b.xlsx"]), &[".gif", ".xlsx"]);
    assert_eq!(buckets.take_matched(1), names(&["b.xlsx"]));
    assert!(buckets.matched(1).is_empty());
    assert!(buckets.take_matched(5).is_empty());
}
