//! Behavioural properties of `TodoList` operations.

use pretty_assertions::assert_eq;
use rstest::rstest;
use todo_core::item::PLACEHOLDER_TEXT;
use todo_core::{TodoError, TodoList};

fn list_of(texts: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for text in texts {
        list.add(text);
    }
    list
}

fn texts(list: &TodoList) -> Vec<String> {
    list.items().iter().map(|item| item.text().to_string()).collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn delete_preserves_order_of_remaining_items(#[case] position: usize) {
    let original = ["a", "b", "c", "d", "e"];
    let mut list = list_of(&original);

    let removed = list.delete(position).expect("position is valid");

    let mut expected: Vec<String> = original.iter().map(ToString::to_string).collect();
    let expected_removed = expected.remove(position);
    assert_eq!(removed.text(), expected_removed);
    assert_eq!(list.count(), original.len() - 1);
    assert_eq!(texts(&list), expected);
}

#[test]
fn completing_twice_keeps_first_timestamp() {
    let mut list = list_of(&["task"]);
    list.complete(0).unwrap();
    let first = list.get(0).unwrap().completed_at();
    assert!(first.is_some());

    list.complete(0).unwrap();
    assert_eq!(list.get(0).unwrap().completed_at(), first);
}

#[test]
fn uncomplete_reverses_complete() {
    let mut list = list_of(&["task"]);
    list.complete(0).unwrap();
    list.uncomplete(0).unwrap();

    let item = list.get(0).unwrap();
    assert!(!item.is_done());
    assert_eq!(item.completed_at(), None);
}

#[test]
fn counts_stay_consistent_through_mutations() {
    let mut list = TodoList::new();
    let check = |list: &TodoList| {
        assert_eq!(list.count_completed() + list.count_pending(), list.count());
    };

    check(&list);
    assert_eq!(list.count(), 0);
    assert_eq!(list.count_completed(), 0);
    assert_eq!(list.count_pending(), 0);

    for text in ["a", "b", "c", "d"] {
        list.add(text);
        check(&list);
    }
    list.complete(0).unwrap();
    list.complete(2).unwrap();
    check(&list);
    assert_eq!(list.count_completed(), 2);

    list.delete(0).unwrap();
    check(&list);
    assert_eq!(list.count_completed(), 1);

    list.uncomplete(1).unwrap();
    check(&list);
    assert_eq!(list.count_pending(), 3);

    list.clear();
    check(&list);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn edit_rejects_blank_text(#[case] text: &str) {
    let mut list = list_of(&["original"]);

    let err = list.edit(0, text).unwrap_err();

    assert!(matches!(err, TodoError::EmptyText));
    assert_eq!(list.get(0).unwrap().text(), "original");
}

#[rstest]
#[case("")]
#[case("   ")]
fn add_blank_text_uses_placeholder(#[case] text: &str) {
    let mut list = TodoList::new();
    let position = list.add(text);
    assert_eq!(list.get(position).unwrap().text(), PLACEHOLDER_TEXT);
}

#[test]
fn index_operations_reject_out_of_range_positions() {
    let mut list = list_of(&["a", "b"]);
    let before = list.clone();

    assert!(matches!(
        list.complete(2),
        Err(TodoError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        list.uncomplete(9),
        Err(TodoError::IndexOutOfRange { index: 9, len: 2 })
    ));
    assert!(matches!(
        list.delete(2),
        Err(TodoError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        list.edit(3, "text"),
        Err(TodoError::IndexOutOfRange { index: 3, len: 2 })
    ));
    assert_eq!(list, before);
}

#[test]
fn buy_milk_scenario() {
    let mut list = TodoList::new();
    assert_eq!(list.add("Buy milk"), 0);
    assert_eq!(list.add("Write report"), 1);
    list.complete(0).expect("first item exists");

    let rendered = list.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Todo List (1/2 completed):");
    assert_eq!(lines[1], "1. [✓] Buy milk");
    assert_eq!(lines[2], "2. [ ] Write report");

    list.delete(0).unwrap();
    assert_eq!(list.count(), 1);
    assert_eq!(list.get(0).unwrap().text(), "Write report");

    let err = list.complete(5).unwrap_err();
    assert!(matches!(err, TodoError::IndexOutOfRange { index: 5, len: 1 }));
    assert!(err.to_string().contains("0-0"));
}
