// File: crates/chart-core/tests/params.rs
// Purpose: Locator query decoding: separators, percent/plus decoding, malformed pairs.

use chart_core::ScriptParams;
use chart_core::ChartError;

#[test]
fn decodes_percent_and_plus() {
    let p = ScriptParams::parse("/assets/scripts/histogram.js?a=1&b=two%20words");
    assert_eq!(p.get("a"), Some("1"));
    assert_eq!(p.get("b"), Some("two words"));
    assert_eq!(p.len(), 2);

    let p = ScriptParams::parse("chart.js?c=x+y");
    assert_eq!(p.get("c"), Some("x y"));
}

#[test]
fn plus_substitution_runs_after_decoding() {
    // %2B decodes to '+', which then becomes a space.
    let p = ScriptParams::parse("chart.js?c=1%2B1");
    assert_eq!(p.get("c"), Some("1 1"));
    // Keys keep their '+'.
    let p = ScriptParams::parse("chart.js?a+b=1");
    assert_eq!(p.get("a+b"), Some("1"));
}

#[test]
fn no_query_yields_empty_map() {
    assert!(ScriptParams::parse("/assets/scripts/histogram.js").is_empty());
    assert!(ScriptParams::parse("/assets/scripts/histogram.js?").is_empty());
    assert!(ScriptParams::parse("").is_empty());
}

#[test]
fn malformed_pairs_are_dropped() {
    let p = ScriptParams::parse("x.js?a=1;bad;c=3");
    assert_eq!(p.get("a"), Some("1"));
    assert_eq!(p.get("c"), Some("3"));
    assert_eq!(p.get("bad"), None);
    assert_eq!(p.len(), 2);

    let p = ScriptParams::parse("x.js?a=b=c&&d=4&e=");
    assert_eq!(p.get("a"), None);
    assert_eq!(p.get("d"), Some("4"));
    assert_eq!(p.get("e"), Some(""));
    assert_eq!(p.len(), 2);
}

#[test]
fn invalid_utf8_escape_drops_only_that_pair() {
    let p = ScriptParams::parse("x.js?a=%FF&b=ok");
    assert_eq!(p.get("a"), None);
    assert_eq!(p.get("b"), Some("ok"));
}

#[test]
fn later_duplicates_overwrite() {
    let p = ScriptParams::parse("x.js?id=first&id=second");
    assert_eq!(p.element_id(), Some("second"));
}

#[test]
fn only_first_question_mark_separates() {
    let p = ScriptParams::parse("x.js?endpoint=/fetch?sim&id=hist");
    assert_eq!(p.endpoint(), Some("/fetch?sim"));
    assert_eq!(p.element_id(), Some("hist"));

    // An unencoded query inside a value adds a second '=' and drops the pair.
    let p = ScriptParams::parse("x.js?endpoint=/fetch?sim=3&id=hist");
    assert_eq!(p.endpoint(), None);
    assert_eq!(p.element_id(), Some("hist"));
}

#[test]
fn endpoints_split_on_commas() {
    let p = ScriptParams::parse("x.js?endpoints=%2Fa%2C%20%2Fb%2C%2C%2Fc&id=h");
    assert_eq!(p.endpoints(), vec!["/a", "/b", "/c"]);

    let none = ScriptParams::parse("x.js?id=h");
    assert!(none.endpoints().is_empty());
}

#[test]
fn require_reports_missing_key() {
    let p = ScriptParams::parse("x.js?endpoint=/a");
    assert_eq!(p.require("endpoint").unwrap(), "/a");
    match p.require("id") {
        Err(ChartError::MissingParameter(key)) => assert_eq!(key, "id"),
        other => panic!("expected MissingParameter, got {other:?}"),
    }
}
