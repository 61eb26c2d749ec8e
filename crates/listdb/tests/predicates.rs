use std::cell::Cell;

use listdb::{
    CompareOp, Comparison, Error, List, Object, ObjectSchema, Property, Result, ScalarType,
    Schema, SchemaResolver, Value,
};

fn ints(values: &[i64]) -> Result<List> {
    let mut list = List::new(ScalarType::Int, true);
    list.extend_from(values.iter().map(|&v| Value::Int(v)))?;
    Ok(list)
}

fn people(schema: &Schema) -> Result<List> {
    let person = schema.require("Person")?;
    let mut list = List::of_objects(schema, "Person")?;
    for (name, age) in [("Ada", Some(36)), ("Bo", None), ("Cy", Some(12))] {
        let object = Object::with_values(
            person.clone(),
            [("name", Value::from(name)), ("age", Value::from(age))],
        )?;
        list.push(object.into())?;
    }
    Ok(list)
}

fn schema() -> Result<Schema> {
    Schema::new().with(
        ObjectSchema::new("Person")
            .with_property(Property::new("name", ScalarType::String))
            .with_property(Property::new("age", ScalarType::Int).with_optional(true)),
    )
}

// ============================================================================
// Closures
// ============================================================================

#[test]
fn test_index_where_with_closure() -> Result<()> {
    let list = ints(&[3, 8, 5, 8])?;

    let even = |v: &Value| v.as_int().is_some_and(|n| n % 2 == 0);
    assert_eq!(list.index_where(&even)?, Some(1));
    assert_eq!(list.index_where(&|v: &Value| v.is_null())?, None);

    Ok(())
}

#[test]
fn test_filter_keeps_order() -> Result<()> {
    let list = ints(&[3, 8, 5, 10, 1])?;

    let big = list.filter(&|v: &Value| v.as_int().is_some_and(|n| n > 4))?;
    assert_eq!(big, vec![Value::Int(8), Value::Int(5), Value::Int(10)]);

    Ok(())
}

#[test]
fn test_empty_list_never_evaluates_predicate() -> Result<()> {
    let list = List::new(ScalarType::Int, false);
    let calls = Cell::new(0);
    let counting = |_: &Value| {
        calls.set(calls.get() + 1);
        true
    };

    assert_eq!(list.index_where(&counting)?, None);
    assert!(list.filter(&counting)?.is_empty());
    assert_eq!(calls.get(), 0);

    let list = ints(&[1, 2])?;
    assert_eq!(list.index_where(&counting)?, Some(0));
    assert_eq!(calls.get(), 1);

    Ok(())
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparison_on_self() -> Result<()> {
    let list = ints(&[4, 7, 2, 9])?;

    assert_eq!(
        list.filter(&Comparison::new("self", CompareOp::Ge, 7))?,
        vec![Value::Int(7), Value::Int(9)]
    );
    assert_eq!(
        list.index_where(&Comparison::new("self", CompareOp::Eq, 2))?,
        Some(2)
    );
    assert_eq!(
        list.index_where(&Comparison::new("self", CompareOp::Lt, 2.5))?,
        Some(2)
    );

    Ok(())
}

#[test]
fn test_comparison_against_null() -> Result<()> {
    let mut list = ints(&[1])?;
    list.push(Value::Null)?;

    assert_eq!(
        list.index_where(&Comparison::new("self", CompareOp::Eq, Value::Null))?,
        Some(1)
    );
    assert_eq!(
        list.filter(&Comparison::new("self", CompareOp::Le, Value::Null))?,
        Vec::<Value>::new()
    );
    assert_eq!(
        list.filter(&Comparison::new("self", CompareOp::Ne, Value::Null))?,
        vec![Value::Int(1)]
    );

    Ok(())
}

#[test]
fn test_comparison_on_field() -> Result<()> {
    let schema = schema()?;
    let list = people(&schema)?;

    let adults = list.filter(&Comparison::new("age", CompareOp::Gt, 18))?;
    assert_eq!(adults.len(), 1);
    let name = adults[0].as_object().map(|o| o.get("name")).transpose()?;
    assert_eq!(name, Some(Value::from("Ada")));

    assert_eq!(
        list.index_where(&Comparison::new("name", CompareOp::Eq, "Cy"))?,
        Some(2)
    );
    assert_eq!(
        list.index_where(&Comparison::new("age", CompareOp::Eq, Value::Null))?,
        Some(1)
    );

    Ok(())
}

#[test]
fn test_comparison_errors() -> Result<()> {
    let schema = schema()?;
    let list = people(&schema)?;

    assert!(matches!(
        list.filter(&Comparison::new("email", CompareOp::Eq, "x")),
        Err(Error::UnknownProperty { .. })
    ));
    assert!(matches!(
        list.filter(&Comparison::new("friend.age", CompareOp::Eq, 1)),
        Err(Error::UnresolvedNestedPath(_))
    ));
    assert!(matches!(
        ints(&[1])?.filter(&Comparison::new("age", CompareOp::Eq, 1)),
        Err(Error::UnsupportedOperation(_))
    ));

    Ok(())
}

#[test]
fn test_comparison_display() {
    assert_eq!(
        Comparison::new("age", CompareOp::Ge, 18).to_string(),
        "age >= 18"
    );
}

// ============================================================================
// Persisted-only operations
// ============================================================================

#[test]
fn test_persisted_only_operations_fail() -> Result<()> {
    let list = ints(&[1, 2, 3])?;

    assert!(matches!(
        list.objects_where(&Comparison::new("self", CompareOp::Gt, 1)),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        list.sorted_by("self", true),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        list.observe(|_| {}),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(list.freeze(), Err(Error::UnsupportedOperation(_))));

    assert!(!list.is_frozen());
    assert!(!list.is_invalidated());

    Ok(())
}
