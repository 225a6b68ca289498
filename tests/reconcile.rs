use kira_pbodyqc::counts::ImageStructureCount;
use kira_pbodyqc::reconcile::{Divergence, reconcile};

fn seq(v: &[(&str, usize)]) -> Vec<ImageStructureCount> {
    v.iter()
        .map(|(n, c)| ImageStructureCount::new(*n, *c))
        .collect()
}

#[test]
fn identical_sequences_align() {
    let s = seq(&[("a", 1), ("b", 2)]);
    let alignment = reconcile(&s, &s, &s).unwrap();
    assert_eq!(alignment.n_structures(), 3);
    let names: Vec<&str> = alignment.structure_images().collect();
    assert_eq!(names, vec!["a", "b", "b"]);
}

#[test]
fn empty_sequences_align() {
    let alignment = reconcile(&[], &[], &[]).unwrap();
    assert_eq!(alignment.n_structures(), 0);
}

#[test]
fn count_mismatch_surfaces_all_sequences() {
    let a = seq(&[("a", 1), ("b", 2)]);
    let b = seq(&[("a", 1), ("b", 3)]);
    let err = reconcile(&a, &a, &b).unwrap_err();
    assert_eq!(err.prints, a);
    assert_eq!(err.pbody, a);
    assert_eq!(err.reports, b);
    assert!(matches!(err.first, Divergence::CountMismatch { reports: 3, .. }));
}

#[test]
fn reordered_images_fail() {
    let a = seq(&[("a", 1), ("b", 1)]);
    let b = seq(&[("b", 1), ("a", 1)]);
    let err = reconcile(&a, &b, &a).unwrap_err();
    assert!(matches!(err.first, Divergence::ImageMismatch { position: 0, .. }));
}

#[test]
fn missing_image_fails() {
    let a = seq(&[("a", 1), ("b", 1)]);
    let b = seq(&[("a", 1)]);
    let err = reconcile(&a, &a, &b).unwrap_err();
    assert_eq!(
        err.first,
        Divergence::LengthMismatch {
            prints: 2,
            pbody: 2,
            reports: 1
        }
    );
    assert!(err.first.to_string().contains("reports=1"));
}

#[test]
fn renamed_image_fails_even_with_equal_totals() {
    let a = seq(&[("a", 2)]);
    let b = seq(&[("A", 2)]);
    assert!(reconcile(&b, &a, &a).is_err());
}
