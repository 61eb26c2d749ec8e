use listdb::{
    ElementKind, Error, List, Model, Property, Result, ScalarType, Schema, SchemaResolver,
    Timestamp, Value,
};

#[derive(Debug, Clone, PartialEq, Model)]
struct Person {
    #[primary_key]
    name: String,
    age: Option<i32>,
    height: f64,
    avatar: Vec<u8>,
    joined: Timestamp,
}

#[derive(Model)]
struct Reading {
    value: f32,
    valid: bool,
}

#[derive(Model)]
struct Empty {}

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        age: None,
        height: 1.65,
        avatar: vec![0xff],
        joined: Timestamp::from_seconds(1_000),
    }
}

#[test]
fn test_derive_model_schema() {
    let schema = Person::schema();

    assert_eq!(Person::NAME, "Person");
    assert_eq!(schema.name(), "Person");
    assert_eq!(schema.primary_key(), Some("name"));
    assert_eq!(
        schema.properties(),
        &[
            Property::new("name", ScalarType::String),
            Property::new("age", ScalarType::Int).with_optional(true),
            Property::new("height", ScalarType::Double),
            Property::new("avatar", ScalarType::Data),
            Property::new("joined", ScalarType::Date),
        ]
    );

    let reading = Reading::schema();
    assert_eq!(reading.primary_key(), None);
    assert_eq!(
        reading.property("value").map(|p| p.kind().clone()),
        Some(ElementKind::Scalar(ScalarType::Float))
    );

    assert!(Empty::schema().properties().is_empty());
}

#[test]
fn test_derive_model_into_object() -> Result<()> {
    let object = ada().into_object()?;

    assert!(object.is_resolved());
    assert_eq!(object.class_name(), "Person");
    assert_eq!(object.get("name")?, Value::from("Ada"));
    assert_eq!(object.get("age")?, Value::Null);
    assert_eq!(object.get("height")?, Value::Double(1.65));
    assert_eq!(object.get("avatar")?, Value::Data(vec![0xff]));
    assert_eq!(object.get("joined")?, Value::Date(Timestamp::from_seconds(1_000)));

    let reading = Reading {
        value: 0.5,
        valid: true,
    }
    .into_object()?;
    assert_eq!(reading.get("valid")?, Value::Bool(true));

    Ok(())
}

#[test]
fn test_derived_objects_in_lists() -> Result<()> {
    let schema = Schema::new();
    schema.register_model::<Person>()?;
    assert!(matches!(
        schema.register_model::<Person>(),
        Err(Error::DuplicateSchema(_))
    ));

    let mut list = List::of_objects(&schema, Person::NAME)?;
    list.push(ada().into_object()?.into())?;
    list.push(
        Person {
            name: "Bo".to_string(),
            age: Some(41),
            ..ada()
        }
        .into_object()?
        .into(),
    )?;

    assert_eq!(list.index_of(&ada().into_object()?.into())?, Some(0));
    assert_eq!(list.sum("age")?, Value::Int(41));
    assert_eq!(list.average("height")?, Some(Value::Double(1.65)));
    assert_eq!(
        schema.require(Person::NAME)?.as_ref(),
        &Person::schema()
    );

    Ok(())
}
