use std::{collections::BTreeMap, fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{DESCRIPTION_MAX_DEPTH, ObjectSchema, Result, SchemaResolver, Value};

/// Shared handle to an in-memory object of a named schema.
///
/// Cloning the handle shares the object. An object created with
/// [`Object::new`] has no resolved schema until [`Object::resolve`] succeeds;
/// until then it accepts any field and cannot be added to a list.
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

struct ObjectInner {
    class_name: String,
    schema: RwLock<Option<Arc<ObjectSchema>>>,
    fields: RwLock<BTreeMap<String, Value>>,
}

impl Object {
    /// Creates an object whose schema has not been resolved yet.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self(Arc::new(ObjectInner {
            class_name: class_name.into(),
            schema: RwLock::new(None),
            fields: RwLock::new(BTreeMap::new()),
        }))
    }

    pub fn with_schema(schema: Arc<ObjectSchema>) -> Self {
        Self(Arc::new(ObjectInner {
            class_name: schema.name().to_string(),
            schema: RwLock::new(Some(schema)),
            fields: RwLock::new(BTreeMap::new()),
        }))
    }

    /// Creates a resolved object and sets every given field, validating each.
    pub fn with_values<K, I>(schema: Arc<ObjectSchema>, values: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let object = Self::with_schema(schema);
        for (key, value) in values {
            object.set(&key.into(), value)?;
        }
        Ok(object)
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.0.class_name
    }

    pub fn schema(&self) -> Option<Arc<ObjectSchema>> {
        self.0.schema.read().clone()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.0.schema.read().is_some()
    }

    /// Resolves this object's schema by class name and validates the fields
    /// set so far against it.
    pub fn resolve(&self, resolver: &impl SchemaResolver) -> Result<Arc<ObjectSchema>> {
        if let Some(schema) = self.schema() {
            return Ok(schema);
        }

        let schema = resolver.require(self.class_name())?;
        for (key, value) in self.0.fields.read().iter() {
            schema.require_property(key)?.gate().validate(value)?;
        }

        *self.0.schema.write() = Some(schema.clone());
        Ok(schema)
    }

    /// Reads a field. Unset fields of a resolved object read as the property's
    /// default value.
    pub fn get(&self, key: &str) -> Result<Value> {
        let schema = self.schema();
        let fields = self.0.fields.read();
        match schema {
            Some(schema) => {
                let property = schema.require_property(key)?;
                Ok(fields
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| property.default_value()))
            }
            None => Ok(fields.get(key).cloned().unwrap_or_default()),
        }
    }

    /// Writes a field, validated against the schema once it is resolved.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        if let Some(schema) = self.schema() {
            schema.require_property(key)?.gate().validate(&value)?;
        }
        self.0.fields.write().insert(key.to_string(), value);
        Ok(())
    }

    /// Returns true if both handles point to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Field values in schema order (or key order while unresolved).
    pub fn fields(&self) -> Vec<(String, Value)> {
        let schema = self.schema();
        let fields = self.0.fields.read();
        match schema {
            Some(schema) => schema
                .properties()
                .iter()
                .map(|property| {
                    let value = fields
                        .get(property.name())
                        .cloned()
                        .unwrap_or_else(|| property.default_value());
                    (property.name().to_string(), value)
                })
                .collect(),
            None => fields.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    pub(crate) fn describe(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if depth >= DESCRIPTION_MAX_DEPTH {
            return write!(f, "<Maximum depth exceeded>");
        }

        let indent = "\t".repeat(depth + 1);
        writeln!(f, "{} {{", self.class_name())?;
        for (key, value) in self.fields() {
            write!(f, "{indent}{key} = ")?;
            value.describe(f, depth + 1)?;
            writeln!(f, ";")?;
        }
        write!(f, "{}}}", "\t".repeat(depth))
    }
}

/// Objects of the same schema are equal when their scalar primary keys are
/// equal; without one, only a handle is equal to itself.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.class_name() != other.class_name() {
            return false;
        }

        let (Some(schema), Some(other_schema)) = (self.schema(), other.schema()) else {
            return false;
        };
        let scalar_key = |key: &str| schema.property(key).is_some_and(|p| !p.kind().is_object());
        match (schema.primary_key(), other_schema.primary_key()) {
            (Some(key), Some(other_key)) if key == other_key && scalar_key(key) => {
                matches!((self.get(key), other.get(key)), (Ok(a), Ok(b)) if a == b)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class_name", &self.class_name())
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f, 0)
    }
}
