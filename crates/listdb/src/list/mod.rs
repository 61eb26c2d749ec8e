use std::sync::Arc;

use log::debug;

use crate::{
    ChangeKind, ElementKind, Error, IndexSet, ObjectSchema, Owner, Result, ScalarType,
    SchemaResolver, Value, kind::TypeGate,
};

mod aggregate;
mod display;
mod iter;
#[cfg(feature = "serde_json")]
mod json;
mod mutate;
mod options;
mod query;

pub use aggregate::*;
pub use iter::*;
pub use options::*;

/// In-memory ordered collection of elements of one kind.
///
/// The kind (and whether nulls are allowed) is fixed at construction. Every
/// insertion is validated against it before the list is touched, so a failed
/// call never leaves a partial mutation behind. When the list is a field of a
/// larger object, every structural change is reported to the owner's
/// [`ChangeSink`](crate::ChangeSink).
#[derive(Debug)]
pub struct List {
    gate: TypeGate,
    items: Arc<Vec<Value>>,
    owner: Option<Owner>,
}

impl List {
    /// Creates an empty list of scalars.
    pub fn new(ty: ScalarType, optional: bool) -> Self {
        Self {
            gate: TypeGate::new(ElementKind::Scalar(ty), optional),
            items: Arc::default(),
            owner: None,
        }
    }

    /// Creates an empty list of references to objects of schema `name`.
    pub fn of_objects(resolver: &impl SchemaResolver, name: &str) -> Result<Self> {
        Self::with_options(ListOptions::new(ElementKind::object(name)).with_resolver(resolver))
    }

    pub fn with_options(options: ListOptions<'_>) -> Result<Self> {
        let ListOptions {
            kind,
            optional,
            owner,
            resolver,
        } = options;

        let gate = match kind {
            ElementKind::Scalar(ty) => TypeGate::new(ElementKind::Scalar(ty), optional),
            ElementKind::Object(name) => {
                let resolver = resolver.ok_or_else(|| Error::UnknownSchema(name.clone()))?;
                // Lists of objects never hold nulls.
                if optional {
                    debug!("Ignoring optional flag on list of '{name}'.");
                }
                TypeGate::for_schema(resolver.require(&name)?)
            }
        };

        Ok(Self {
            gate,
            items: Arc::default(),
            owner,
        })
    }

    #[inline]
    pub fn kind(&self) -> &ElementKind {
        self.gate.kind()
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.gate.is_optional()
    }

    /// Schema of the elements, for lists of objects.
    #[inline]
    pub fn object_schema(&self) -> Option<&Arc<ObjectSchema>> {
        self.gate.schema()
    }

    #[inline]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    #[inline]
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Position of the first element equal to `value`.
    ///
    /// `value` must itself be a valid element; objects compare by their
    /// schema's equality (primary key, else identity).
    pub fn index_of(&self, value: &Value) -> Result<Option<usize>> {
        self.gate.validate(value)?;
        Ok(self.items.iter().position(|item| item == value))
    }

    /// In-memory lists are never invalidated.
    #[inline]
    pub fn is_invalidated(&self) -> bool {
        false
    }

    /// In-memory lists are never frozen.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        false
    }

    #[inline]
    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        self.gate.validate(value)
    }

    pub(crate) fn validate_all<'a>(&self, values: impl IntoIterator<Item = &'a Value>) -> Result<()> {
        values.into_iter().try_for_each(|value| self.validate(value))
    }

    /// Applies `mutate` to the elements, bracketed by owner notifications.
    ///
    /// All structural mutations go through here.
    fn change<R>(
        &mut self,
        kind: ChangeKind,
        indexes: IndexSet,
        mutate: impl FnOnce(&mut Vec<Value>) -> R,
    ) -> R {
        let items = Arc::make_mut(&mut self.items);
        match &self.owner {
            Some(owner) => owner.bracket(kind, &indexes, || mutate(items)),
            None => mutate(items),
        }
    }
}
