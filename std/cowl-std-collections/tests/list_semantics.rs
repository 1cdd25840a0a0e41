///
/// # List Semantics Integration Tests
///
/// End-to-end checks of list behavior as generated code sees it: indexing
/// with numbers, bools and the `last` keyword, soft failures, and the fatal
/// path for string indices.
///

use std::process::Command;

use cowl_std_collections::List;
use cowl_std_core::config::DEFAULT_FATAL_STATUS;
use cowl_std_core::{Any, coerce_to_display, concat};

const CHILD_ENV: &str = "COWL_FATAL_CHILD";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn render(list: &List) -> String {
    let parts: Vec<Any> = list
        .iter()
        .flat_map(|v| [Any::static_str("["), v.clone(), Any::static_str("]")])
        .collect();
    concat(parts).to_string()
}

#[test]
fn test_shopping_list_workflow() {
    init_tracing();
    let mut list = List::new();
    list.append(Any::static_str("eggs"));
    list.append(Any::owned_str(b"milk".to_vec()));
    list.append(Any::Num(12.0));
    list.append(Any::Bool(true));
    insta::assert_snapshot!(render(&list), @"[eggs][milk][12][true]");

    list.delete(Any::Num(2.0));
    list.replace(Any::static_str("LAST"), Any::static_str("bread"));
    list.append(Any::Num(0.5));
    insta::assert_snapshot!(render(&list), @"[eggs][12][bread][0.5]");

    list.delete(Any::static_str("last"));
    list.delete(Any::Num(10.0));
    list.replace(Any::Num(0.0), Any::static_str("ignored"));
    insta::assert_snapshot!(render(&list), @"[eggs][12][bread]");

    assert_eq!(list.length(), 3.0);
    assert_eq!(list.capacity(), 7);
}

#[test]
fn test_three_element_indexing() {
    let list: List = ["x", "y", "z"].into_iter().map(Any::static_str).collect();
    assert_eq!(list.get(Any::static_str("LAST")), list.get(Any::Num(3.0)));
    assert_eq!(coerce_to_display(list.get(Any::Num(0.0))).len(), 0);
    assert_eq!(coerce_to_display(list.get(Any::Num(4.0))).len(), 0);
}

#[test]
fn test_get_from_owned_element_survives_delete_all() {
    let mut list = List::new();
    list.append(Any::owned_str(b"kept".to_vec()));
    let copy = list.get(Any::Num(1.0));
    list.delete_all();
    assert!(list.is_empty());
    assert_eq!(copy.to_string(), "kept");
}

#[test]
fn test_string_index_is_fatal() {
    if std::env::var_os(CHILD_ENV).is_some() {
        let list: List = [Any::Num(1.0)].into_iter().collect();
        let _ = list.get(Any::static_str("1"));
        std::process::exit(0);
    }
    let status = Command::new(std::env::current_exe().expect("Failed to locate test binary"))
        .args(["--exact", "test_string_index_is_fatal", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .status()
        .expect("Failed to spawn child test process");
    assert_eq!(status.code(), Some(DEFAULT_FATAL_STATUS));
}
