use atoms::{Atoms, GrowthStrategy, MIN_CAPACITY};

#[test]
fn test_first_add_allocates_minimum() {
    let mut atoms = Atoms::new();
    atoms.add(1);

    assert_eq!(atoms.capacity(), MIN_CAPACITY);
}

#[test]
fn test_capacity_doubles_on_overflow() {
    let mut atoms = Atoms::new();
    for value in 0..MIN_CAPACITY {
        atoms.add(value);
    }
    assert_eq!(atoms.capacity(), MIN_CAPACITY);

    atoms.add(MIN_CAPACITY);
    assert_eq!(atoms.capacity(), MIN_CAPACITY * 2);

    for value in 0..MIN_CAPACITY {
        atoms.add(value);
    }
    assert_eq!(atoms.len(), 21);
    assert_eq!(atoms.capacity(), MIN_CAPACITY * 4);
}

#[test]
fn test_large_block_grows_past_double() {
    let mut atoms = Atoms::new();
    atoms.add_all(0..35);

    assert_eq!(atoms.len(), 35);
    assert_eq!(atoms.capacity(), 35);
}

#[test]
fn test_capacity_halves_when_underused() {
    let mut atoms: Atoms<usize> = (0..40).collect();
    assert_eq!(atoms.capacity(), 40);

    // Dropping to 19 of 40 halves the capacity once
    for _ in 0..21 {
        atoms.remove_last();
    }
    assert_eq!(atoms.len(), 19);
    assert_eq!(atoms.capacity(), 20);

    // Removing many at once halves repeatedly down to the minimum
    atoms.remove_if(|value| *value > 0);
    assert_eq!(atoms.len(), 1);
    assert_eq!(atoms.capacity(), MIN_CAPACITY);
}

#[test]
fn test_capacity_never_below_length() {
    let mut atoms = Atoms::new();
    for value in 0..100 {
        atoms.add(value);
        assert!(atoms.len() <= atoms.capacity());
    }
    for _ in 0..100 {
        atoms.remove(0).unwrap();
        assert!(atoms.len() <= atoms.capacity());
    }
}

#[test]
fn test_clear_resets_to_baseline() {
    let mut atoms: Atoms<usize> = (0..50).collect();
    atoms.clear();
    assert_eq!(atoms.capacity(), MIN_CAPACITY);

    let mut exact = Atoms::with_strategy(GrowthStrategy::ExactFit);
    exact.add_all(0..5);
    exact.clear();
    assert_eq!(exact.capacity(), 0);
}

#[test]
fn test_with_capacity_holds_until_exceeded() {
    let mut atoms = Atoms::with_capacity(5);
    for value in 0..5 {
        atoms.add(value);
    }
    assert_eq!(atoms.capacity(), 5);

    atoms.add(5);
    assert_eq!(atoms.capacity(), MIN_CAPACITY);
}

#[test]
fn test_exact_fit_tracks_length() {
    let mut atoms = Atoms::with_strategy(GrowthStrategy::ExactFit);

    atoms.add("a");
    assert_eq!(atoms.capacity(), 1);

    atoms.add_all(vec!["b", "c", "d"]);
    assert_eq!(atoms.capacity(), 4);

    atoms.insert(0, "z").unwrap();
    atoms.insert_all(2, vec!["m", "n"]).unwrap();
    assert_eq!(atoms.capacity(), atoms.len());

    atoms.remove(0).unwrap();
    atoms.remove_item(&"m");
    atoms.remove_last();
    assert_eq!(atoms.len(), 4);
    assert_eq!(atoms.capacity(), 4);

    atoms.remove_if(|atom| *atom != "a");
    assert_eq!(atoms.as_slice(), &["a"]);
    assert_eq!(atoms.capacity(), 1);
}

#[test]
fn test_clone_keeps_capacity_and_strategy() {
    let mut atoms = Atoms::with_strategy(GrowthStrategy::ExactFit);
    atoms.add_all(vec![1, 2, 3]);

    let copy = atoms.clone();
    assert_eq!(copy.capacity(), 3);
    assert_eq!(copy.strategy(), GrowthStrategy::ExactFit);
}
