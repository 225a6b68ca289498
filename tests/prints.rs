use image::{GrayImage, Luma};
use kira_pbodyqc::io::prints::{print_area, white_pixels};
use tempfile::TempDir;

#[test]
fn counts_only_saturated_pixels() {
    let mut img = GrayImage::new(4, 3);
    img.put_pixel(0, 0, Luma([255]));
    img.put_pixel(1, 2, Luma([255]));
    img.put_pixel(2, 2, Luma([254]));
    assert_eq!(white_pixels(&img), 2);
}

#[test]
fn decodes_png_from_disk() {
    let tmp = TempDir::new().unwrap();
    let mut img = GrayImage::new(5, 5);
    for x in 0..5 {
        img.put_pixel(x, 1, Luma([255]));
    }
    img.save(tmp.path().join("MAX_a_print_1.png")).unwrap();
    assert_eq!(print_area(tmp.path(), "MAX_a_print_1.png").unwrap(), 5);
}

#[test]
fn undecodable_print_names_the_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("MAX_b_print_1.png"), "not an image").unwrap();
    let err = print_area(tmp.path(), "MAX_b_print_1.png").unwrap_err();
    assert!(err.to_string().contains("MAX_b_print_1.png"));
}
