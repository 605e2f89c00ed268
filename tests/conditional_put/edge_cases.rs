//! Edge Case Tests
//!
//! Tests for contract violations and unusual conditions:
//! - Items without usable key attributes
//! - Empty, duplicated and null-valued conditions
//! - Expression strings outside the supported grammar

use crate::*;

#[test]
fn test_missing_key_attribute_is_contract_violation() {
    test_across_key_schemas(|table| {
        let schema = table.schema().clone();
        let only_pk = Item::new().with(schema.partition_key.as_str(), "1");
        let only_sk = Item::new().with(schema.sort_key.as_str(), "1");

        for item in [only_pk, only_sk, Item::new()] {
            let err = table.put_item(item, &Condition::none()).unwrap_err();
            assert!(matches!(err, Error::MissingKeyAttribute { .. }), "got {:?}", err);
            assert!(err.is_contract_violation());
        }
        assert!(table.is_empty());
        assert_eq!(table.metrics().contract_violations, 3);
    });
}

#[test]
fn test_non_string_key_attribute_is_contract_violation() {
    test_across_key_schemas(|table| {
        let schema = table.schema().clone();
        let item = Item::new()
            .with(schema.partition_key.as_str(), 1i64)
            .with(schema.sort_key.as_str(), "1");

        let err = table.put_item(item, &Condition::none()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidKeyAttribute {
                attribute: schema.partition_key.clone(),
                actual: "Int",
            }
        );
        assert!(table.is_empty());
    });
}

#[test]
fn test_empty_strings_are_valid_key_components() {
    let table = Table::new();
    table
        .put_item(row(&table, "", "", &[]), &Condition::attribute_not_exists("pk"))
        .unwrap();
    assert!(table.contains(&Key::new("", "")));
}

#[test]
fn test_empty_condition_never_fails() {
    test_across_key_schemas(|table| {
        for i in 0..3 {
            let value = i.to_string();
            table
                .put_item(row(&table, "1", "1", &[("n", value.as_str())]), &Condition::none())
                .unwrap();
        }
        assert_eq!(table.metrics().puts_rejected, 0);
        assert_eq!(table.metrics().vacuous_passes, 0);
    });
}

#[test]
fn test_duplicate_names_repeat_in_message() {
    let table = Table::new();
    let condition = Condition::from(vec!["pk", "pk"]);
    table.put_item(row(&table, "1", "1", &[]), &condition).unwrap();

    let err = table
        .put_item(row(&table, "1", "1", &[]), &condition)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed attribute_not_exists(pk) AND attribute_not_exists(pk)"
    );
}

#[test]
fn test_null_valued_attribute_counts_as_present() {
    let table = Table::new();
    let item = row(&table, "1", "1", &[]).with("deleted_at", Value::Null);
    table.put_item(item, &Condition::none()).unwrap();

    assert!(table
        .put_item(
            row(&table, "1", "1", &[]),
            &Condition::attribute_not_exists("deleted_at"),
        )
        .unwrap_err()
        .is_conditional_check_failed());
}

#[test]
fn test_attribute_names_are_case_sensitive() {
    let table = Table::new();
    table
        .put_item(row(&table, "1", "1", &[]), &Condition::none())
        .unwrap();

    table
        .put_item(row(&table, "1", "1", &[]), &Condition::attribute_not_exists("PK"))
        .unwrap();
}

#[test]
fn test_unsupported_expressions_are_rejected_before_lookup() {
    let table = Table::new();
    table
        .put_item(row(&table, "1", "1", &[]), &Condition::none())
        .unwrap();

    for expression in [
        "attribute_not_exists(pk) OR attribute_not_exists(sk)",
        "attribute_exists(pk)",
        "pk <> :v",
    ] {
        let err = table
            .put_item_with_expression(row(&table, "1", "1", &[("x", "y")]), expression)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExpression { .. }));
    }

    assert_eq!(
        table.get_item(&Key::new("1", "1")),
        Some(row(&table, "1", "1", &[]))
    );
}

#[test]
fn test_blank_expression_is_unconditional() {
    let table = Table::new();
    table
        .put_item(row(&table, "1", "1", &[]), &Condition::none())
        .unwrap();
    table
        .put_item_with_expression(row(&table, "1", "1", &[("v", "2")]), "  ")
        .unwrap();
    assert!(table.get_item(&Key::new("1", "1")).unwrap().contains("v"));
}
