use super::*;
use crate::error::FragError;
use crate::join::join;
use crate::{Item, frag};

#[test]
fn interpolation_renders_each_marker_style() {
    let f = frag!("a" {1} "b");
    assert_eq!(f.sql(), "a?b");
    assert_eq!(f.values().len(), 1);

    let two = frag!("a" {1} "b" {2} "c");
    assert_eq!(two.sql(), "a?b?c");
    assert_eq!(two.statement(), "a:1b:2c");
    assert_eq!(two.text(), "a$1b$2c");
}

#[test]
fn raw_has_no_placeholders() {
    let f = raw("SELECT 1");
    assert_eq!(f.sql(), "SELECT 1");
    assert_eq!(f.statement(), "SELECT 1");
    assert_eq!(f.text(), "SELECT 1");
    assert!(f.values().is_empty());
    assert_eq!(f.segments().len(), 1);
}

#[test]
fn empty_is_neutral_when_spliced() {
    let e = Fragment::empty();
    assert_eq!(e.sql(), "");

    let f = frag!("a" (Fragment::empty()) "b");
    assert_eq!(f.sql(), "ab");
    assert_eq!(f.segments().len(), 1);
    assert!(f.values().is_empty());
}

#[test]
fn segments_always_outnumber_values_by_one() {
    let shapes = [
        Fragment::empty(),
        raw("SELECT 1"),
        frag!("a" {1} "b"),
        frag!("a" {1} "b" {2} "c"),
        frag!("x" (frag!("y" {3} "z")) "w"),
    ];
    for f in &shapes {
        assert_eq!(f.segments().len(), f.values().len() + 1);
    }
}

#[test]
fn nested_fragment_merges_at_both_seams() {
    let child = frag!("c" {5} "d");
    let parent = frag!("a" (child) "b");

    let segments: Vec<&str> = parent.segments().iter().map(String::as_str).collect();
    assert_eq!(segments, ["ac", "db"]);
    assert_eq!(parent.sql(), "ac?db");
    assert_eq!(format!("{:?}", parent.values()), "[5]");
}

#[test]
fn zero_placeholder_child_is_pure_text_splice() {
    let soft_delete = raw(" AND deleted_at IS NULL");
    let f = frag!("SELECT * FROM users WHERE id = " {1} "" (soft_delete) "");
    assert_eq!(f.sql(), "SELECT * FROM users WHERE id = ? AND deleted_at IS NULL");
    assert_eq!(f.values().len(), 1);
    assert_eq!(f.segments().len(), 2);
}

#[test]
fn numbering_continues_across_spliced_fragments() {
    let cond = frag!("b = " {2} " AND c = " {3} "");
    let f = frag!("a = " {1} " AND " (cond) " AND d = " {4} "");
    assert_eq!(f.sql(), "a = ? AND b = ? AND c = ? AND d = ?");
    assert_eq!(f.statement(), "a = :1 AND b = :2 AND c = :3 AND d = :4");
    assert_eq!(f.text(), "a = $1 AND b = $2 AND c = $3 AND d = $4");
    assert_eq!(format!("{:?}", f.values()), "[1, 2, 3, 4]");
}

#[test]
fn deep_nesting_keeps_left_to_right_value_order() {
    let inner = frag!("y = " {2} "");
    let middle = frag!("(x = " {1} " OR " (inner) ")");
    let outer = frag!("WHERE " (middle) " AND z = " {3} "");
    assert_eq!(outer.sql(), "WHERE (x = ? OR y = ?) AND z = ?");
    assert_eq!(format!("{:?}", outer.values()), "[1, 2, 3]");
}

#[test]
fn wrapping_a_value_in_a_trivial_fragment_is_equivalent() {
    let direct = frag!("id = " {7} "");
    let nested = frag!("id = " (frag!("" {7} "")) "");
    assert_eq!(direct.sql(), nested.sql());
    assert_eq!(direct.segments(), nested.segments());
    assert_eq!(direct.values().len(), nested.values().len());
}

#[test]
fn marker_count_matches_value_count() {
    let f = frag!("a" {1} "b" {2} "c" {3} "");
    assert_eq!(f.sql().matches('?').count(), f.values().len());
    assert_eq!(f.statement().matches(':').count(), f.values().len());
    assert_eq!(f.text().matches('$').count(), f.values().len());
}

#[test]
fn renders_two_digit_placeholder_numbers() {
    let items: Vec<Item> = (1..=12).map(|i| Item::bind(i as i64)).collect();
    let f = join(items, ",").unwrap();
    assert!(f.text().ends_with("$10,$11,$12"));
    assert!(f.statement().ends_with(":10,:11,:12"));
    assert_eq!(f.sql(), "?,?,?,?,?,?,?,?,?,?,?,?");
}

#[test]
fn a_fragment_can_be_spliced_more_than_once() {
    let cond = frag!("status = " {"active"} "");
    let q1 = frag!("SELECT * FROM a WHERE " (&cond) "");
    let q2 = frag!("SELECT * FROM b WHERE " (&cond) "");
    assert_eq!(q1.sql(), "SELECT * FROM a WHERE status = ?");
    assert_eq!(q2.sql(), "SELECT * FROM b WHERE status = ?");
    assert_eq!(cond.values().len(), 1);
}

#[test]
fn new_rejects_mismatched_shapes() {
    let err = Fragment::new(Vec::<String>::new(), Vec::<Item>::new()).unwrap_err();
    assert_eq!(err, FragError::NoSegments);

    let err = Fragment::new(vec!["a", "b", "c"], vec![Item::bind(1)]).unwrap_err();
    assert_eq!(
        err,
        FragError::SegmentMismatch {
            segments: 3,
            values: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "Expected 3 literal segments to carry 2 values, got 1"
    );
}

#[test]
fn inspect_reports_every_rendering() {
    let f = frag!("a" {1} "b" {2} "c");
    let report = f.inspect();
    assert_eq!(report.sql, "a?b?c");
    assert_eq!(report.statement, "a:1b:2c");
    assert_eq!(report.text, "a$1b$2c");
    assert_eq!(report.values.len(), 2);
}

#[test]
fn binds_driver_types() {
    let when = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let id = uuid::Uuid::nil();
    let f = frag!("SELECT * FROM events WHERE id = " {id} " AND at < " {when} "");
    assert_eq!(f.text(), "SELECT * FROM events WHERE id = $1 AND at < $2");
    assert_eq!(f.params_ref().len(), 2);
}

#[test]
fn fragments_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Fragment>();
}
