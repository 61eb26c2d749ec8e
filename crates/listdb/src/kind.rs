use std::{fmt, sync::Arc};

use crate::{Error, ObjectSchema, Result, Value};

/// Scalar element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Int,
    Float,
    Double,
    String,
    Data,
    Date,
}

impl ScalarType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Data => "data",
            Self::Date => "date",
        }
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Double)
    }

    #[inline]
    pub const fn is_timestamp(self) -> bool {
        matches!(self, Self::Date)
    }

    /// Predicate accepting exactly the non-null values of this type.
    fn validator(self) -> fn(&Value) -> bool {
        match self {
            Self::Bool => |v| matches!(v, Value::Bool(_)),
            Self::Int => |v| matches!(v, Value::Int(_)),
            Self::Float => |v| matches!(v, Value::Float(_)),
            Self::Double => |v| matches!(v, Value::Double(_)),
            Self::String => |v| matches!(v, Value::String(_)),
            Self::Data => |v| matches!(v, Value::Data(_)),
            Self::Date => |v| matches!(v, Value::Date(_)),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a list (or an object property) holds: a scalar type, or references to
/// objects of one named schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Scalar(ScalarType),
    Object(String),
}

impl ElementKind {
    pub fn object(schema_name: impl Into<String>) -> Self {
        Self::Object(schema_name.into())
    }

    pub fn as_scalar(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            Self::Object(_) => None,
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Object(name) => Some(name),
        }
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl From<ScalarType> for ElementKind {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => ty.fmt(f),
            Self::Object(name) => f.write_str(name),
        }
    }
}

/// Validation gate for one `(kind, optional)` pair.
///
/// The type check is resolved once when the gate is built, so validating a
/// value never re-dispatches on the kind for scalars. A gate bound to a
/// resolved schema only admits objects carrying that same schema.
#[derive(Debug, Clone)]
pub(crate) struct TypeGate {
    kind: ElementKind,
    optional: bool,
    accepts: fn(&Value) -> bool,
    schema: Option<Arc<ObjectSchema>>,
}

impl TypeGate {
    pub fn new(kind: ElementKind, optional: bool) -> Self {
        let accepts: fn(&Value) -> bool = match &kind {
            ElementKind::Scalar(ty) => ty.validator(),
            ElementKind::Object(_) => |v: &Value| matches!(v, Value::Object(_)),
        };
        Self {
            kind,
            optional,
            accepts,
            schema: None,
        }
    }

    /// Gate for non-null references to objects of `schema`.
    pub fn for_schema(schema: Arc<ObjectSchema>) -> Self {
        Self {
            schema: Some(schema.clone()),
            ..Self::new(ElementKind::object(schema.name()), false)
        }
    }

    #[inline]
    pub fn schema(&self) -> Option<&Arc<ObjectSchema>> {
        self.schema.as_ref()
    }

    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        if value.is_null() {
            return if self.optional {
                Ok(())
            } else {
                Err(Error::NullNotAllowed {
                    expected: self.kind.clone(),
                })
            };
        }

        if !(self.accepts)(value) {
            return Err(Error::TypeMismatch {
                expected: self.kind.clone(),
                found: value.type_name(),
            });
        }

        if let (ElementKind::Object(expected), Value::Object(object)) = (&self.kind, value) {
            let schema = object.schema().ok_or(Error::UninitializedSchema)?;
            let same = match &self.schema {
                Some(bound) => Arc::ptr_eq(bound, &schema) || **bound == *schema,
                None => schema.name() == expected,
            };
            if !same {
                return Err(Error::SchemaMismatch {
                    expected: expected.clone(),
                    found: schema.name().to_string(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for TypeGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}
