use agrimarket_model::coerce::{
    bool_value, int_value, number_value, parse_float_prefix, parse_int_prefix,
    string_list_value, string_value,
};
use serde_json::json;

// ── Integer prefix ───────────────────────────────────────────────

#[test]
fn int_prefix_plain() {
    assert_eq!(parse_int_prefix("30"), Some(30));
    assert_eq!(parse_int_prefix("  42"), Some(42));
    assert_eq!(parse_int_prefix("-7"), Some(-7));
    assert_eq!(parse_int_prefix("+7"), Some(7));
}

#[test]
fn int_prefix_stops_at_first_non_digit() {
    assert_eq!(parse_int_prefix("30 years"), Some(30));
    assert_eq!(parse_int_prefix("4.9"), Some(4));
    assert_eq!(parse_int_prefix("1e3"), Some(1));
}

#[test]
fn int_prefix_rejects_non_numeric() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix(".5"), None);
}

#[test]
fn int_prefix_overflow_is_none() {
    assert_eq!(parse_int_prefix("99999999999999999999999"), None);
}

// ── Float prefix ─────────────────────────────────────────────────

#[test]
fn float_prefix_plain() {
    assert_eq!(parse_float_prefix("500"), Some(500.0));
    assert_eq!(parse_float_prefix("12.5kg"), Some(12.5));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("5."), Some(5.0));
    assert_eq!(parse_float_prefix("-2.25"), Some(-2.25));
}

#[test]
fn float_prefix_exponent_needs_digits() {
    assert_eq!(parse_float_prefix("2e3"), Some(2000.0));
    assert_eq!(parse_float_prefix("2e"), Some(2.0));
    assert_eq!(parse_float_prefix("2e+"), Some(2.0));
    assert_eq!(parse_float_prefix("1.5E-1x"), Some(0.15));
}

#[test]
fn float_prefix_rejects_non_numeric() {
    assert_eq!(parse_float_prefix(""), None);
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix("price"), None);
}

// ── JSON values ──────────────────────────────────────────────────

#[test]
fn int_value_accepts_numbers_and_strings() {
    assert_eq!(int_value(Some(&json!(30))), Some(30));
    assert_eq!(int_value(Some(&json!(30.7))), Some(30));
    assert_eq!(int_value(Some(&json!("30"))), Some(30));
    assert_eq!(int_value(Some(&json!(""))), None);
    assert_eq!(int_value(Some(&json!(true))), None);
    assert_eq!(int_value(Some(&json!(null))), None);
    assert_eq!(int_value(None), None);
}

#[test]
fn number_value_accepts_numbers_and_strings() {
    assert_eq!(number_value(Some(&json!(499.5))), Some(499.5));
    assert_eq!(number_value(Some(&json!("499.5"))), Some(499.5));
    assert_eq!(number_value(Some(&json!([1]))), None);
    assert_eq!(number_value(None), None);
}

#[test]
fn string_value_defaults_to_empty() {
    assert_eq!(string_value(Some(&json!("Rampur"))), "Rampur");
    assert_eq!(string_value(Some(&json!(9876543210u64))), "9876543210");
    assert_eq!(string_value(Some(&json!(null))), "");
    assert_eq!(string_value(None), "");
}

#[test]
fn bool_value_accepts_string_forms() {
    assert_eq!(bool_value(Some(&json!(true))), Some(true));
    assert_eq!(bool_value(Some(&json!("false"))), Some(false));
    assert_eq!(bool_value(Some(&json!("TRUE"))), Some(true));
    assert_eq!(bool_value(Some(&json!("yes"))), None);
    assert_eq!(bool_value(None), None);
}

#[test]
fn string_list_keeps_order_and_drops_blanks() {
    let v = json!(["Ploughing", "", "  Sowing ", null, 3]);
    assert_eq!(
        string_list_value(Some(&v)),
        Some(vec!["Ploughing".to_string(), "Sowing".to_string(), "3".to_string()])
    );
}

#[test]
fn string_list_splits_comma_strings() {
    let v = json!("Rice, Wheat,,Maize");
    assert_eq!(
        string_list_value(Some(&v)),
        Some(vec!["Rice".to_string(), "Wheat".to_string(), "Maize".to_string()])
    );
}

#[test]
fn string_list_missing_vs_empty() {
    assert_eq!(string_list_value(None), None);
    assert_eq!(string_list_value(Some(&json!(null))), None);
    assert_eq!(string_list_value(Some(&json!([]))), Some(vec![]));
}
