use std::convert::Infallible;

use crate::{
    ChangeKind, Error, IndexSet, Object, ObjectSchema, Predicate, Result, Value, key_path::KeyPath,
};

use super::List;

impl List {
    pub(super) fn require_schema(&self) -> Result<&ObjectSchema> {
        self.object_schema().map(|schema| &**schema).ok_or(Error::UnsupportedOperation(
            "keys other than 'self' are only valid on lists of objects",
        ))
    }

    /// Value of field `field` of every element, in order.
    pub(crate) fn field_values(&self, field: &str) -> Result<Vec<Value>> {
        self.items
            .iter()
            .map(|item| match item {
                Value::Object(object) => object.get(field),
                _ => Ok(Value::Null),
            })
            .collect()
    }

    /// The elements (`"self"`), or field `key` of every element.
    pub fn values_for_key(&self, key: &str) -> Result<Vec<Value>> {
        match KeyPath::parse(key)? {
            KeyPath::Elements => Ok(self.items.to_vec()),
            KeyPath::Field(field) => {
                self.require_schema()?.require_property(field)?;
                self.field_values(field)
            }
        }
    }

    /// Sets every element to `value` (`"self"`), or sets field `key` of every
    /// element to `value`.
    pub fn set_value_for_key(&mut self, key: &str, value: Value) -> Result<()> {
        match KeyPath::parse(key)? {
            KeyPath::Elements => {
                self.validate(&value)?;
                if self.is_empty() {
                    return Ok(());
                }
                let len = self.len();
                self.change(ChangeKind::Replace, IndexSet::from_range(0..len), |items| {
                    items.fill(value)
                });
                Ok(())
            }
            KeyPath::Field(field) => {
                self.require_schema()?
                    .require_property(field)?
                    .gate()
                    .validate(&value)?;

                let objects: Vec<&Object> =
                    self.items.iter().filter_map(Value::as_object).collect();
                for object in &objects {
                    if let Some(schema) = object.schema() {
                        schema.require_property(field)?.gate().validate(&value)?;
                    }
                }
                objects
                    .into_iter()
                    .try_for_each(|object| object.set(field, value.clone()))
            }
        }
    }

    /// Index of the first element matching `predicate`.
    ///
    /// An empty list answers `None` without evaluating the predicate.
    pub fn index_where<P>(&self, predicate: &P) -> Result<Option<usize>>
    where
        P: Predicate + ?Sized,
    {
        if self.is_empty() {
            return Ok(None);
        }
        for (index, item) in self.items.iter().enumerate() {
            if predicate.evaluate(item)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Elements matching `predicate`, in order.
    ///
    /// An empty list answers without evaluating the predicate.
    pub fn filter<P>(&self, predicate: &P) -> Result<Vec<Value>>
    where
        P: Predicate + ?Sized,
    {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let mut matches = Vec::new();
        for item in self.items.iter() {
            if predicate.evaluate(item)? {
                matches.push(item.clone());
            }
        }
        Ok(matches)
    }

    /// Live query results. Always fails: only persisted lists can be queried.
    pub fn objects_where<P>(&self, _predicate: &P) -> Result<Infallible>
    where
        P: Predicate + ?Sized,
    {
        Err(Error::UnsupportedOperation(
            "objects_where() is only valid on persisted lists",
        ))
    }

    /// Live sorted results. Always fails: only persisted lists can be sorted.
    pub fn sorted_by(&self, _key: &str, _ascending: bool) -> Result<Infallible> {
        Err(Error::UnsupportedOperation(
            "sorted_by() is only valid on persisted lists",
        ))
    }

    /// Change subscriptions. Always fails: only persisted lists can be observed.
    pub fn observe<F>(&self, _callback: F) -> Result<Infallible>
    where
        F: FnMut(&List) + Send + 'static,
    {
        Err(Error::UnsupportedOperation(
            "observe() is only valid on persisted lists",
        ))
    }

    /// Frozen copies. Always fails: only persisted lists can be frozen.
    pub fn freeze(&self) -> Result<Infallible> {
        Err(Error::UnsupportedOperation(
            "freeze() is only valid on persisted lists",
        ))
    }
}
