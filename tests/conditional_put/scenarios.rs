//! Scenario Tests
//!
//! Multi-step sequences taken from runs against a real table with a
//! `pk` (HASH, S) / `sk` (RANGE, S) key schema.

use crate::*;

/// The (1, 1) item exists, so the put loads it, finds "pk" and fails.
/// (1, 2) does not exist, so the same condition passes there.
#[test]
fn test_pk_not_exists_sequence() {
    init_tracing();
    let table = Table::new();
    let original = row(&table, "1", "1", &[]);

    table.put_item(original.clone(), &Condition::none()).unwrap();
    table
        .put_item_with_expression(row(&table, "1", "2", &[]), "attribute_not_exists(pk)")
        .unwrap();

    let err = table
        .put_item_with_expression(row(&table, "1", "1", &[]), "attribute_not_exists(pk)")
        .unwrap_err();
    assert!(err.is_conditional_check_failed());

    assert_eq!(table.get_item(&Key::new("1", "1")), Some(original));
    assert_eq!(table.len(), 2);
}

/// Same as above with the partition key varied instead of the sort key.
#[test]
fn test_sk_not_exists_sequence() {
    init_tracing();
    let table = Table::new();

    table
        .put_item(row(&table, "1", "1", &[]), &Condition::none())
        .unwrap();
    table
        .put_item_with_expression(row(&table, "2", "1", &[]), "attribute_not_exists(sk)")
        .unwrap();

    let err = table
        .put_item_with_expression(row(&table, "1", "1", &[]), "attribute_not_exists(sk)")
        .unwrap_err();
    assert!(err.is_conditional_check_failed());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_pk_and_sk_not_exists_sequence() {
    init_tracing();
    let table = Table::new();

    table
        .put_item(row(&table, "1", "1", &[]), &Condition::none())
        .unwrap();

    let err = table
        .put_item_with_expression(
            row(&table, "1", "1", &[]),
            "attribute_not_exists(pk) AND attribute_not_exists(sk)",
        )
        .unwrap_err();
    assert!(err.is_conditional_check_failed());
}

/// End-to-end: only the original (1, 1) item and the vacuously accepted
/// (1, 2) item remain, and the rejected write left no trace.
#[test]
fn test_end_to_end() {
    init_tracing();
    let table = Table::new();
    let first = row(&table, "1", "1", &[]);
    let second = row(&table, "1", "2", &[]);

    table.put_item(first.clone(), &Condition::none()).unwrap();
    let outcome = table
        .put_item(second.clone(), &Condition::attribute_not_exists("pk"))
        .unwrap();
    assert!(outcome.is_insert());

    let rejected = row(&table, "1", "1", &[("attempt", "second")]);
    assert!(table
        .put_item(rejected, &Condition::attribute_not_exists("pk"))
        .unwrap_err()
        .is_conditional_check_failed());

    assert_eq!(table.get_item(&Key::new("1", "1")), Some(first));
    assert_eq!(table.get_item(&Key::new("1", "2")), Some(second));

    let metrics = table.metrics();
    assert_eq!(metrics.puts_committed, 2);
    assert_eq!(metrics.puts_rejected, 1);
    assert_eq!(metrics.vacuous_passes, 1);
    assert_eq!(metrics.items, 2);
}

#[test]
fn test_items_from_json() {
    init_tracing();
    let table = Table::new();
    let doc: Item =
        serde_json::from_str(r#"{"pk": "1", "sk": "1", "tags": ["a", "b"], "count": 2}"#).unwrap();
    let same = match serde_json::json!({"pk": "1", "sk": "1", "tags": ["a", "b"], "count": 2}) {
        serde_json::Value::Object(o) => Item::from(o),
        _ => unreachable!(),
    };
    assert_eq!(doc, same);

    table.put_item(doc.clone(), &Condition::attribute_not_exists("count")).unwrap();
    let err = table
        .put_item(doc, &Condition::attribute_not_exists("count"))
        .unwrap_err();
    assert_eq!(err.to_string(), "failed attribute_not_exists(count)");
}
