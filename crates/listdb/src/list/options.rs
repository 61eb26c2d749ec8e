use crate::{ElementKind, Owner, ScalarType, SchemaResolver};

/// Options for creating a [`List`](crate::List).
#[derive(Clone)]
pub struct ListOptions<'a> {
    /// Kind every element must satisfy.
    pub kind: ElementKind,
    /// Whether null elements are allowed. Ignored for lists of objects.
    pub optional: bool,
    /// Object this list is a field of, notified around every mutation.
    pub owner: Option<Owner>,
    /// Resolves the element schema of lists of objects.
    pub resolver: Option<&'a dyn SchemaResolver>,
}

impl<'a> ListOptions<'a> {
    pub fn new(kind: impl Into<ElementKind>) -> Self {
        Self {
            kind: kind.into(),
            optional: false,
            owner: None,
            resolver: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_resolver(mut self, resolver: &'a dyn SchemaResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

impl From<ElementKind> for ListOptions<'_> {
    fn from(value: ElementKind) -> Self {
        Self::new(value)
    }
}

impl From<ScalarType> for ListOptions<'_> {
    fn from(value: ScalarType) -> Self {
        Self::new(value)
    }
}

impl From<(ScalarType, bool)> for ListOptions<'_> {
    fn from((ty, optional): (ScalarType, bool)) -> Self {
        Self::new(ty).with_optional(optional)
    }
}
