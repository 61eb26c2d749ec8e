use std::mem;

use log::debug;

use crate::{ChangeKind, Error, IndexSet, Result, Value};

use super::List;

impl List {
    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::out_of_range(index, self.len()))
        }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` may be one past the end.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        self.validate(&value)?;
        if index > self.len() {
            return Err(Error::out_of_range(index, self.len() + 1));
        }

        self.change(ChangeKind::Insert, IndexSet::from([index]), |items| {
            items.insert(index, value)
        });
        Ok(())
    }

    /// Inserts `values[n]` at the `n`-th smallest index of `indexes`.
    ///
    /// Indexes refer to positions in the resulting list, so each one may be at
    /// most the length reached after the previous insertions. Everything is
    /// validated before the first element goes in.
    pub fn insert_many(
        &mut self,
        indexes: &IndexSet,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<()> {
        let values: Vec<Value> = values.into_iter().collect();
        if indexes.len() != values.len() {
            return Err(Error::CountMismatch {
                indexes: indexes.len(),
                values: values.len(),
            });
        }
        self.validate_all(&values)?;

        let len = self.len();
        for (inserted, index) in indexes.iter().enumerate() {
            if index > len + inserted {
                return Err(Error::out_of_range(index, len + inserted + 1));
            }
        }

        if values.is_empty() {
            return Ok(());
        }

        self.change(ChangeKind::Insert, indexes.clone(), |items| {
            for (index, value) in indexes.iter().zip(values) {
                items.insert(index, value);
            }
        });
        Ok(())
    }

    /// Appends `value` at the end.
    #[inline]
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.insert(self.len(), value)
    }

    /// Appends every value, or none of them if any fails validation.
    pub fn extend_from(&mut self, values: impl IntoIterator<Item = Value>) -> Result<()> {
        let values: Vec<Value> = values.into_iter().collect();
        self.validate_all(&values)?;

        if values.is_empty() {
            return Ok(());
        }

        let len = self.len();
        self.change(
            ChangeKind::Insert,
            IndexSet::from_range(len..len + values.len()),
            |items| items.extend(values),
        );
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        self.check_index(index)?;
        Ok(self.change(ChangeKind::Remove, IndexSet::from([index]), |items| {
            items.remove(index)
        }))
    }

    /// Removes every element whose index is in `indexes`.
    pub fn remove_many(&mut self, indexes: &IndexSet) -> Result<()> {
        let Some(last) = indexes.last() else {
            return Ok(());
        };
        self.check_index(last)?;

        self.change(ChangeKind::Remove, indexes.clone(), |items| {
            for range in indexes.ranges().iter().rev() {
                items.drain(range.clone());
            }
        });
        Ok(())
    }

    /// Removes the last element, if any.
    pub fn pop(&mut self) -> Option<Value> {
        let index = self.len().checked_sub(1)?;
        Some(self.change(ChangeKind::Remove, IndexSet::from([index]), |items| {
            items.remove(index)
        }))
    }

    /// Removes every element. Clearing an empty list notifies nobody.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.len();
        self.change(ChangeKind::Remove, IndexSet::from_range(0..len), |items| {
            items.clear()
        });
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, value: Value) -> Result<Value> {
        self.validate(&value)?;
        self.check_index(index)?;

        Ok(self.change(ChangeKind::Replace, IndexSet::from([index]), |items| {
            mem::replace(&mut items[index], value)
        }))
    }

    /// Moves the element at `from` so that it ends up at `to`.
    ///
    /// Reported as one replacement of every index between the two, inclusive.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let indexes = IndexSet::from_inclusive(from.min(to), from.max(to));
        self.change(ChangeKind::Replace, indexes, |items| {
            let value = items.remove(from);
            items.insert(to, value);
        });
        Ok(())
    }

    /// Exchanges the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;

        self.change(ChangeKind::Replace, IndexSet::from([a, b]), |items| {
            items.swap(a, b)
        });
        Ok(())
    }

    /// Replaces the whole content, or nothing if any value fails validation.
    ///
    /// Reported as a removal of the old elements followed by an insertion of
    /// the new ones; empty halves are not reported.
    pub fn replace_all(&mut self, values: impl IntoIterator<Item = Value>) -> Result<()> {
        let values: Vec<Value> = values.into_iter().collect();
        self.validate_all(&values)?;

        debug!(
            "Replacing {} elements of list<{}> with {}.",
            self.len(),
            self.gate,
            values.len()
        );

        self.clear();
        self.extend_from(values)
    }
}
