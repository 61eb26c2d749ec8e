use listdb::{
    ElementKind, List, Object, ObjectSchema, Property, Result, ScalarType, Schema,
    SchemaResolver, Timestamp, Value,
};

#[test]
fn test_scalar_list_to_json() -> Result<()> {
    let mut list = List::new(ScalarType::Int, true);
    list.extend_from([Value::Int(1), Value::Null, Value::Int(3)])?;

    assert_eq!(list.to_json_string()?, "[1,null,3]");

    let mut buf = Vec::new();
    list.write_json(&mut buf)?;
    assert_eq!(buf, b"[1,null,3]");

    Ok(())
}

#[test]
fn test_mixed_scalars_to_json() -> Result<()> {
    let mut data = List::new(ScalarType::Data, false);
    data.push(vec![1_u8, 2].into())?;
    assert_eq!(data.to_json_string()?, "[[1,2]]");

    let mut dates = List::new(ScalarType::Date, false);
    dates.push(Timestamp::new(5, 7).into())?;
    assert_eq!(
        dates.to_json_string()?,
        r#"[{"seconds":5,"nanoseconds":7}]"#
    );

    let empty = List::new(ScalarType::String, false);
    assert_eq!(empty.to_json_string()?, "[]");

    Ok(())
}

#[test]
fn test_timestamp_to_json() -> Result<()> {
    assert_eq!(
        serde_json::to_string(&Timestamp::new(-2, -5))?,
        r#"{"seconds":-2,"nanoseconds":-5}"#
    );
    assert_eq!(
        serde_json::to_string(&Value::Date(Timestamp::EPOCH))?,
        r#"{"seconds":0,"nanoseconds":0}"#
    );

    Ok(())
}

#[test]
fn test_object_list_to_json() -> Result<()> {
    let schema = Schema::new().with(
        ObjectSchema::new("Node")
            .with_property(Property::new("label", ScalarType::String))
            .with_property(Property::new("next", ElementKind::object("Node"))),
    )?;
    let node = schema.require("Node")?;

    let leaf = Object::with_values(node.clone(), [("label", Value::from("leaf"))])?;
    let root = Object::with_values(
        node,
        [("label", Value::from("root")), ("next", leaf.into())],
    )?;

    let mut list = List::of_objects(&schema, "Node")?;
    list.push(root.into())?;

    assert_eq!(
        list.to_json_string()?,
        r#"[{"label":"root","next":{"label":"leaf","next":null}}]"#
    );

    Ok(())
}

#[test]
fn test_cyclic_objects_are_cut_off() -> Result<()> {
    let schema = Schema::new().with(
        ObjectSchema::new("Node")
            .with_property(Property::new("label", ScalarType::String))
            .with_property(Property::new("next", ElementKind::object("Node"))),
    )?;

    let node = Object::with_values(schema.require("Node")?, [("label", Value::from("n"))])?;
    node.set("next", node.clone().into())?;

    let json = serde_json::to_string(&Value::Object(node.clone()))?;
    assert_eq!(json.matches(r#""label":"n""#).count(), 5);
    assert!(json.ends_with(r#""next":null}}}}}"#));

    node.set("next", Value::Null)?;

    Ok(())
}
