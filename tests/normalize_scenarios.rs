use vaw_rs::models::{Cell, Dataset};
use vaw_rs::normalize::{
    EU27_PATTERNS, MKD_ALIAS_PATTERNS, MKD_FOOTNOTE, MKD_LABEL, build_footnote, exclude_rows,
    relabel_aliases,
};
use vaw_rs::{DatasetError, PatternSet};

fn ds(codes: &[&str]) -> Dataset {
    Dataset::from_rows(
        ["geo", "female", "male"],
        codes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                vec![
                    Cell::from(*c),
                    Cell::Number(10.0 + i as f64),
                    Cell::Number(20.0 + i as f64),
                ]
            })
            .collect(),
    )
    .unwrap()
}

fn codes(d: &Dataset) -> Vec<String> {
    d.column("geo").unwrap().map(|c| c.to_string()).collect()
}

fn relabel(d: &mut Dataset) -> usize {
    relabel_aliases(d, "geo", &PatternSet::new(MKD_ALIAS_PATTERNS), MKD_LABEL).unwrap()
}

fn footnote(d: &Dataset) -> String {
    build_footnote(d, "geo", MKD_LABEL, MKD_FOOTNOTE).unwrap()
}

#[test]
fn eu27_rows_are_excluded() {
    let d = ds(&["EU27_2020", "DEU", "FRA"]);
    let out = exclude_rows(&d, "geo", &PatternSet::new(EU27_PATTERNS)).unwrap();
    assert_eq!(codes(&out), ["DEU", "FRA"]);
    assert_eq!(out.columns(), d.columns());
}

#[test]
fn exclusion_is_prefix_only() {
    // an aggregate code embedded later in a value is kept
    let d = ds(&["XEU27", "EU27", "eu27"]);
    let out = exclude_rows(&d, "geo", &PatternSet::new(EU27_PATTERNS)).unwrap();
    assert_eq!(codes(&out), ["XEU27", "eu27"]);
}

#[test]
fn kept_rows_are_unchanged_and_in_order() {
    let d = ds(&["AUT", "EU27_2007", "BEL", "EU27_2020", "CZE"]);
    let out = exclude_rows(&d, "geo", &PatternSet::new(EU27_PATTERNS)).unwrap();
    let expected: Vec<Vec<Cell>> = d
        .rows()
        .iter()
        .filter(|r| !r[0].to_string().starts_with("EU27"))
        .cloned()
        .collect();
    assert_eq!(out.rows(), expected.as_slice());
}

#[test]
fn aliases_fold_into_canonical_label() {
    let mut d = ds(&["MKD", "TFYRMKD2", "DEU"]);
    assert_eq!(relabel(&mut d), 2);
    assert_eq!(codes(&d), ["MKD ¶", "MKD ¶", "DEU"]);
    // numeric columns untouched
    assert_eq!(d.rows()[1][1], Cell::Number(11.0));
    assert_eq!(d.rows()[1][2], Cell::Number(21.0));
}

#[test]
fn relabel_is_idempotent() {
    let mut once = ds(&["MKD", "TFYR", "MKD_X", "SRB"]);
    relabel(&mut once);
    let mut twice = once.clone();
    relabel(&mut twice);
    assert_eq!(once, twice);
    for c in codes(&once) {
        assert!(c == MKD_LABEL || (!c.starts_with("MKD") && !c.starts_with("TFYR")));
    }
}

#[test]
fn no_footnote_without_label() {
    assert_eq!(footnote(&ds(&["DEU", "FRA"])), "");
}

#[test]
fn footnote_for_canonical_label_and_stable_relabel() {
    let mut d = ds(&["MKD ¶"]);
    assert_eq!(footnote(&d), MKD_FOOTNOTE);
    let before = d.clone();
    assert_eq!(relabel(&mut d), 0);
    assert_eq!(d, before);
}

#[test]
fn footnote_iff_label_present() {
    for list in [&["DEU"][..], &["MKD"], &["MKD ¶", "DEU"], &[]] {
        let d = ds(list);
        let present = list.contains(&MKD_LABEL);
        assert_eq!(!footnote(&d).is_empty(), present, "codes {list:?}");
    }
}

#[test]
fn missing_column_is_reported_by_every_operation() {
    let mut d = ds(&["DEU"]);
    let set = PatternSet::new(EU27_PATTERNS);
    let want = DatasetError::ColumnNotFound {
        column: "iso3".into(),
    };
    assert_eq!(exclude_rows(&d, "iso3", &set).unwrap_err(), want);
    assert_eq!(
        relabel_aliases(&mut d, "iso3", &set, MKD_LABEL).unwrap_err(),
        want
    );
    assert_eq!(
        build_footnote(&d, "iso3", MKD_LABEL, MKD_FOOTNOTE).unwrap_err(),
        want
    );
}

#[test]
fn malformed_pattern_is_not_an_error() {
    let d = ds(&["A(B", "DEU"]);
    let out = exclude_rows(&d, "geo", &PatternSet::new(["A("])).unwrap();
    assert_eq!(codes(&out), ["DEU"]);
}
