use crate::{ElementKind, Error, Result, ScalarType, Timestamp, Value, kind::TypeGate};

mod resolver;

pub use resolver::*;

/// A named, typed field of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    kind: ElementKind,
    optional: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, kind: impl Into<ElementKind>) -> Self {
        let kind = kind.into();
        // Links to other objects can always be cleared.
        let optional = kind.is_object();
        Self {
            name: name.into(),
            kind,
            optional,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional || self.kind.is_object();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Value an unset field reads as.
    pub fn default_value(&self) -> Value {
        if self.optional {
            return Value::Null;
        }
        match self.kind {
            ElementKind::Scalar(ScalarType::Bool) => Value::Bool(false),
            ElementKind::Scalar(ScalarType::Int) => Value::Int(0),
            ElementKind::Scalar(ScalarType::Float) => Value::Float(0.0),
            ElementKind::Scalar(ScalarType::Double) => Value::Double(0.0),
            ElementKind::Scalar(ScalarType::String) => Value::String(String::new()),
            ElementKind::Scalar(ScalarType::Data) => Value::Data(Vec::new()),
            ElementKind::Scalar(ScalarType::Date) => Value::Date(Timestamp::EPOCH),
            ElementKind::Object(_) => Value::Null,
        }
    }

    pub(crate) fn gate(&self) -> TypeGate {
        TypeGate::new(self.kind.clone(), self.optional)
    }
}

/// Description of an object type: its name, properties and optional primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSchema {
    name: String,
    properties: Vec<Property>,
    primary_key: Option<String>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            primary_key: None,
        }
    }

    /// Adds a property, replacing any previous one with the same name.
    pub fn with_property(mut self, property: Property) -> Self {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = Some(name.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Like [`property`](Self::property), failing with [`Error::UnknownProperty`].
    pub fn require_property(&self, name: &str) -> Result<&Property> {
        self.property(name).ok_or_else(|| Error::UnknownProperty {
            schema: self.name.clone(),
            property: name.to_string(),
        })
    }

    #[inline]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Checks that the primary key, if any, names a declared scalar property.
    pub fn validate(&self) -> Result<()> {
        let Some(key) = self.primary_key() else {
            return Ok(());
        };
        if self.require_property(key)?.kind().is_object() {
            return Err(Error::InvalidPrimaryKey {
                schema: self.name.clone(),
                property: key.to_string(),
            });
        }
        Ok(())
    }
}
