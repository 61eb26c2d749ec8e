use listdb::{IndexSet, List, Result, ScalarType, Value};

fn letters(values: &str) -> Result<List> {
    let mut list = List::new(ScalarType::String, false);
    list.extend_from(values.chars().map(|c| Value::from(c.to_string())))?;
    Ok(list)
}

fn joined(values: impl IntoIterator<Item = Value>) -> String {
    values
        .into_iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

// ============================================================================
// Snapshot iteration
// ============================================================================

#[test]
fn test_iterator_ignores_later_mutations() -> Result<()> {
    let mut list = letters("abc")?;

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(Value::from("a")));

    list.remove(0)?;
    list.push("d".into())?;
    list.replace(0, "z".into())?;

    assert_eq!(joined(iter), "bc");
    assert_eq!(joined(&list), "zcd");

    Ok(())
}

#[test]
fn test_iterating_while_mutating() -> Result<()> {
    let mut list = letters("abc")?;

    for value in list.iter() {
        list.push(value)?;
    }
    assert_eq!(joined(&list), "abcabc");

    for (index, _) in list.iter().enumerate().filter(|(i, _)| i % 2 == 0) {
        list.replace(index, "-".into())?;
    }
    assert_eq!(joined(&list), "-b-a-c");

    Ok(())
}

#[test]
fn test_iterator_is_double_ended_and_exact() -> Result<()> {
    let list = letters("abcde")?;

    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next_back(), Some(Value::from("e")));
    assert_eq!(iter.next(), Some(Value::from("a")));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.remaining(), &["b", "c", "d"].map(Value::from));

    assert_eq!(joined(iter.rev()), "dcb");
    assert_eq!(joined(list.iter().skip(1).step_by(2)), "bd");

    let mut empty = List::new(ScalarType::Int, false).iter();
    assert_eq!(empty.next(), None);
    assert_eq!(empty.next_back(), None);

    Ok(())
}

#[test]
fn test_to_vec_copies_out() -> Result<()> {
    let mut list = letters("ab")?;
    let copy = list.to_vec();
    list.clear();

    assert_eq!(copy, vec![Value::from("a"), Value::from("b")]);
    assert!(list.is_empty());

    Ok(())
}

// ============================================================================
// Index sets
// ============================================================================

#[test]
fn test_index_set_merges_adjacent_indexes() {
    let mut set = IndexSet::new();
    assert!(set.is_empty());

    for index in [5, 1, 3, 2, 7] {
        assert!(set.insert(index));
    }
    assert!(!set.insert(2));
    assert_eq!(set.ranges(), &[1..4, 5..6, 7..8]);

    assert!(set.insert(6));
    assert_eq!(set.ranges(), &[1..4, 5..8]);
    assert!(set.insert(0));
    assert_eq!(set.ranges(), &[0..4, 5..8]);

    assert_eq!(set.len(), 7);
    assert_eq!(set.first(), Some(0));
    assert_eq!(set.last(), Some(7));
    assert!(set.contains(3));
    assert!(!set.contains(4));
    assert!(!set.contains(8));
}

#[test]
fn test_index_set_construction() {
    assert_eq!(IndexSet::from_range(2..2), IndexSet::new());
    assert_eq!(IndexSet::from_inclusive(3, 3), IndexSet::from([3]));
    assert_eq!(IndexSet::from([4, 2, 3]), IndexSet::from(2..5));
    assert_eq!(
        IndexSet::from_iter([9, 0]).iter().rev().collect::<Vec<_>>(),
        vec![9, 0]
    );
}
