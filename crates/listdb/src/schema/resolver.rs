use std::{collections::BTreeMap, sync::Arc};

use log::debug;
use parking_lot::RwLock;

use crate::{Error, Model, ObjectSchema, Result};

/// Looks up object schemas by name.
///
/// Lists of objects resolve their schema once, when they are built; objects
/// resolve theirs before they can be added to a list.
pub trait SchemaResolver {
    fn resolve(&self, name: &str) -> Option<Arc<ObjectSchema>>;

    /// Like [`resolve`](Self::resolve), failing with [`Error::UnknownSchema`].
    fn require(&self, name: &str) -> Result<Arc<ObjectSchema>> {
        self.resolve(name)
            .ok_or_else(|| Error::UnknownSchema(name.to_string()))
    }
}

impl<R> SchemaResolver for &R
where
    R: SchemaResolver + ?Sized,
{
    fn resolve(&self, name: &str) -> Option<Arc<ObjectSchema>> {
        (**self).resolve(name)
    }
}

/// Thread-safe registry of object schemas.
#[derive(Debug, Default)]
pub struct Schema {
    schemas: RwLock<BTreeMap<String, Arc<ObjectSchema>>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema, failing if its name is already taken or its primary
    /// key is not a declared scalar property.
    pub fn register(&self, schema: ObjectSchema) -> Result<Arc<ObjectSchema>> {
        schema.validate()?;
        let mut schemas = self.schemas.write();
        if schemas.contains_key(schema.name()) {
            return Err(Error::DuplicateSchema(schema.name().to_string()));
        }
        debug!(
            "Registered schema '{}' with {} properties.",
            schema.name(),
            schema.properties().len()
        );
        let schema = Arc::new(schema);
        schemas.insert(schema.name().to_string(), schema.clone());
        Ok(schema)
    }

    pub fn register_model<M>(&self) -> Result<Arc<ObjectSchema>>
    where
        M: Model,
    {
        self.register(M::schema())
    }

    pub fn with(self, schema: ObjectSchema) -> Result<Self> {
        self.register(schema)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}

impl SchemaResolver for Schema {
    fn resolve(&self, name: &str) -> Option<Arc<ObjectSchema>> {
        self.schemas.read().get(name).cloned()
    }
}
