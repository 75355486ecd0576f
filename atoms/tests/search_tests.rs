use atoms::Atoms;

#[test]
fn test_index_of_tie_break() {
    let atoms = Atoms::from(vec!["a", "b", "a"]);

    assert_eq!(atoms.index_of(&"a"), Some(0));
    assert_eq!(atoms.last_index_of(&"a"), Some(2));
    assert_eq!(atoms.index_of(&"b"), Some(1));
    assert_eq!(atoms.last_index_of(&"b"), Some(1));
}

#[test]
fn test_not_found_matches_contains() {
    let atoms = Atoms::from(vec![1, 2, 3]);

    for value in 0..5 {
        assert_eq!(atoms.index_of(&value).is_none(), !atoms.contains(&value));
        assert_eq!(atoms.last_index_of(&value).is_none(), !atoms.contains(&value));
    }
}

#[test]
fn test_search_on_empty() {
    let atoms: Atoms<i32> = Atoms::new();

    assert_eq!(atoms.index_of(&1), None);
    assert_eq!(atoms.last_index_of(&1), None);
    assert_eq!(atoms.count(&1), 0);
    assert!(!atoms.contains(&1));
}

#[test]
fn test_count_and_count_if() {
    let atoms = Atoms::from(vec![1, 2, 2, 3, 2, 4]);

    assert_eq!(atoms.count(&2), 3);
    assert_eq!(atoms.count(&9), 0);
    assert_eq!(atoms.count_if(|value| value % 2 == 0), 4);
    assert_eq!(atoms.count_if(|_| false), 0);
}

#[test]
fn test_replace_first_and_last() {
    let mut first = Atoms::from(vec!["a", "b", "a"]);
    let mut last = first.clone();

    assert_eq!(first.replace_first(&"a", "c"), Some(0));
    assert_eq!(first.as_slice(), &["c", "b", "a"]);

    assert_eq!(last.replace_last(&"a", "c"), Some(2));
    assert_eq!(last.as_slice(), &["a", "b", "c"]);
}

#[test]
fn test_replace_missing_is_noop() {
    let mut atoms = Atoms::from(vec!["a", "b"]);

    assert_eq!(atoms.replace_first(&"z", "c"), None);
    assert_eq!(atoms.replace_last(&"z", "c"), None);
    assert_eq!(atoms.replace_all(&"z", "c"), 0);
    assert_eq!(atoms.as_slice(), &["a", "b"]);
}

#[test]
fn test_replace_all_counts() {
    let mut atoms = Atoms::from(vec!["x", "y", "x", "x"]);

    assert_eq!(atoms.replace_all(&"x", "XX"), 3);
    assert_eq!(atoms.as_slice(), &["XX", "y", "XX", "XX"]);
}

#[test]
fn test_remove_item_first_and_last() {
    let mut first = Atoms::from(vec![1, 2, 1, 3]);
    let mut last = first.clone();

    assert!(first.remove_item(&1));
    assert_eq!(first.as_slice(), &[2, 1, 3]);

    assert!(last.remove_last_item(&1));
    assert_eq!(last.as_slice(), &[1, 2, 3]);

    assert!(!first.remove_item(&9));
    assert!(!last.remove_last_item(&9));
}

#[test]
fn test_remove_all_and_remove_if() {
    let mut atoms = Atoms::from(vec![1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(atoms.remove_if(|value| value % 2 == 0), 4);
    assert_eq!(atoms.as_slice(), &[1, 3, 5, 7]);
    assert_eq!(atoms.remove_all(&9), 0);
}

#[test]
fn test_remove_if_adjacent_matches() {
    // Consecutive matches must all go; a shifted element is still tested
    let mut atoms = Atoms::from(vec!["y", "y", "x", "y", "y", "y", "x", "y"]);

    assert_eq!(atoms.remove_if(|name| *name == "y"), 6);
    assert_eq!(atoms.as_slice(), &["x", "x"]);
    assert_eq!(atoms.count_if(|name| *name == "y"), 0);
}

#[test]
fn test_remove_if_tests_each_element_once() {
    let mut atoms = Atoms::from(vec![1, 1, 2, 1]);
    let mut tested = Vec::new();

    atoms.remove_if(|value| {
        tested.push(*value);
        *value == 1
    });

    assert_eq!(tested, vec![1, 1, 2, 1]);
    assert_eq!(atoms.as_slice(), &[2]);
}

#[test]
fn test_absent_elements_are_comparable() {
    let mut atoms = Atoms::from(vec![Some("x"), None, Some("y"), None]);

    assert_eq!(atoms.count(&None), 2);
    assert_eq!(atoms.index_of(&None), Some(1));
    assert_eq!(atoms.last_index_of(&None), Some(3));
    assert!(!atoms.contains(&Some("z")));

    assert_eq!(atoms.replace_first(&None, Some("filled")), Some(1));
    assert_eq!(atoms.remove_all(&None), 1);
    assert_eq!(atoms.as_slice(), &[Some("x"), Some("filled"), Some("y")]);
}

#[test]
fn test_absent_never_matches_present() {
    let atoms = Atoms::from(vec![Some(0), Some(1)]);

    assert_eq!(atoms.index_of(&None), None);
    assert_eq!(atoms.count(&None), 0);
}

#[test]
fn test_structural_equality() {
    #[derive(Debug, Clone, PartialEq)]
    struct Atom {
        name: String,
        number: u32,
    }

    let atom = |name: &str, number| Atom {
        name: name.to_string(),
        number,
    };

    let mut atoms = Atoms::from(vec![atom("x", 0), atom("x", 4), atom("x", 0)]);

    // A freshly built value finds stored ones
    assert_eq!(atoms.count(&atom("x", 0)), 2);
    assert_eq!(atoms.index_of(&atom("x", 4)), Some(1));
    assert!(atoms.remove_last_item(&atom("x", 0)));
    assert_eq!(atoms.len(), 2);
}
