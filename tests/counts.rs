use kira_pbodyqc::config::StreamNaming;
use kira_pbodyqc::counts::{
    ImageIdStrategy, ImageStructureCount, count_prints, group_consecutive, total,
};

fn print_strategy() -> ImageIdStrategy {
    // "_print_N.tif" is 12 characters for a single digit.
    ImageIdStrategy::StructureNumbered {
        prefix_len: 4,
        suffix_len: 12,
    }
}

#[test]
fn strip_suffix_drops_trailing_chars() {
    let strategy = ImageIdStrategy::StripSuffix { suffix_len: 4 };
    assert_eq!(strategy.image_id("cell1.txt").unwrap(), "cell1");
    assert!(strategy.image_id("abc").is_err());
}

#[test]
fn print_suffix_grows_with_structure_digits() {
    let strategy = print_strategy();
    assert_eq!(strategy.image_id("MAX_img1_print_3.tif").unwrap(), "img1");
    assert_eq!(strategy.image_id("MAX_img1_print_12.tif").unwrap(), "img1");
    assert_eq!(strategy.image_id("MAX_img1_print_123.tif").unwrap(), "img1");
}

#[test]
fn print_without_number_is_an_error() {
    assert!(print_strategy().image_id("MAX_img1_print_x.tif").is_err());
}

#[test]
fn default_dendrite_print_convention() {
    let strategy = ImageIdStrategy::print(&StreamNaming::dendrite());
    let id = strategy.image_id("MAX_sampleA_C1_dendrite_print_1.tif").unwrap();
    assert_eq!(id, "sampleA_C1_den");
    let id10 = strategy.image_id("MAX_sampleA_C1_dendrite_print_10.tif").unwrap();
    assert_eq!(id, id10);
}

#[test]
fn display_lists_image_and_count() {
    assert_eq!(ImageStructureCount::new("x", 0).to_string(), "['x', 0]");
}

#[test]
fn grouping_sums_consecutive_runs_only() {
    let grouped = group_consecutive(vec![
        ("a".to_string(), 1),
        ("a".to_string(), 1),
        ("b".to_string(), 2),
        ("a".to_string(), 1),
    ]);
    assert_eq!(
        grouped,
        vec![
            ImageStructureCount::new("a", 2),
            ImageStructureCount::new("b", 2),
            ImageStructureCount::new("a", 1),
        ]
    );
    assert_eq!(total(&grouped), 5);
}

#[test]
fn count_prints_groups_by_image() {
    let files: Vec<String> = ["MAX_a_print_1.tif", "MAX_a_print_2.tif", "MAX_b_print_1.tif"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let counts = count_prints(&files, print_strategy()).unwrap();
    assert_eq!(
        counts,
        vec![ImageStructureCount::new("a", 2), ImageStructureCount::new("b", 1)]
    );
}
