use kira_pbodyqc::counts::{ImageIdStrategy, ImageStructureCount};
use kira_pbodyqc::sheets::{PBodyTable, read_workbook, read_workbooks};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn write_book(path: &std::path::Path, sheets: &[&[(f64, f64)]]) {
    let mut workbook = Workbook::new();
    for (i, rows) in sheets.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(format!("Dendrite {}", i + 1)).unwrap();
        sheet.write_string(0, 0, "Label").unwrap();
        sheet.write_string(0, 1, "Area").unwrap();
        sheet.write_string(0, 2, "mRNA").unwrap();
        for (r, (area, mrna)) in rows.iter().enumerate() {
            let row = r as u32 + 1;
            sheet.write_string(row, 0, format!("pb{}", row)).unwrap();
            sheet.write_number(row, 1, *area).unwrap();
            sheet.write_number(row, 2, *mrna).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn one_table_per_sheet_in_order() {
    let tmp = TempDir::new().unwrap();
    write_book(
        &tmp.path().join("img1_results.xlsx"),
        &[&[(12.0, 1.0), (8.0, 0.0)], &[], &[(4.0, 2.0)]],
    );
    let tables = read_workbook(tmp.path(), "img1_results.xlsx").unwrap();
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].sheet, "Dendrite 1");
    assert_eq!(tables[0].header, vec!["Label", "Area", "mRNA"]);
    assert_eq!(tables[0].n_pbodies(), 2);
    assert_eq!(tables[0].column_sum(1).unwrap(), 20.0);
    assert_eq!(tables[1].n_pbodies(), 0);
    assert_eq!(tables[2].column_sum(2).unwrap(), 2.0);
    assert!(tables[0].rows[0][0].is_nan());
}

#[test]
fn workbook_counts_are_sheet_counts() {
    let tmp = TempDir::new().unwrap();
    write_book(&tmp.path().join("img1_results.xlsx"), &[&[], &[]]);
    write_book(&tmp.path().join("img2_results.xlsx"), &[&[(1.0, 0.0)]]);
    let files = vec!["img1_results.xlsx".to_string(), "img2_results.xlsx".to_string()];
    let parsed = read_workbooks(
        tmp.path(),
        &files,
        ImageIdStrategy::StripSuffix { suffix_len: 13 },
        0,
    )
    .unwrap();
    assert_eq!(
        parsed.counts,
        vec![ImageStructureCount::new("img1", 2), ImageStructureCount::new("img2", 1)]
    );
    assert_eq!(parsed.tables.len(), 3);
}

#[test]
fn unreadable_workbook_is_an_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("broken.xlsx"), "not a zip").unwrap();
    let err = read_workbook(tmp.path(), "broken.xlsx").unwrap_err();
    assert!(err.to_string().contains("broken.xlsx"));
}

#[test]
fn columns_count_from_a_when_first_column_is_blank() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("img1_results.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in [(1u16, "Area"), (2, "mRNA"), (3, "Mean")] {
        sheet.write_string(0, col, name).unwrap();
    }
    sheet.write_number(1, 1, 20.0).unwrap();
    sheet.write_number(1, 2, 3.0).unwrap();
    sheet.write_number(1, 3, 99.0).unwrap();
    workbook.save(&path).unwrap();

    let tables = read_workbook(tmp.path(), "img1_results.xlsx").unwrap();
    assert_eq!(tables[0].header, vec!["", "Area", "mRNA", "Mean"]);
    assert_eq!(tables[0].column_sum(1).unwrap(), 20.0);
    assert_eq!(tables[0].column_sum(2).unwrap(), 3.0);
    assert!(tables[0].rows[0][0].is_nan());
}

fn table(rows: Vec<Vec<f64>>) -> PBodyTable {
    PBodyTable {
        sheet: "Dendrite 1".to_string(),
        header: vec!["#".into(), "Area".into(), "mRNA".into()],
        rows,
    }
}

#[test]
fn column_sum_truncates_cells() {
    let t = table(vec![vec![1.0, 10.9, 1.0], vec![2.0, 5.0, 0.0]]);
    assert_eq!(t.column_sum(1).unwrap(), 15.0);
    assert_eq!(t.column_sum(2).unwrap(), 1.0);
    assert_eq!(t.n_pbodies(), 2);
}

#[test]
fn column_sum_rejects_text_and_short_rows() {
    let t = table(vec![vec![1.0, f64::NAN, 1.0]]);
    assert!(t.column_sum(1).is_err());
    let t = table(vec![vec![1.0]]);
    assert!(t.column_sum(2).is_err());
}

#[test]
fn empty_table_sums_to_zero() {
    assert_eq!(table(Vec::new()).column_sum(1).unwrap(), 0.0);
}
