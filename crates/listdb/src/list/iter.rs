use std::{iter::FusedIterator, sync::Arc};

use crate::Value;

use super::List;

/// Iterator over a snapshot of a list.
///
/// Shares the elements as they were when the iterator was created; mutating
/// the list afterwards copies them out from under the iterator instead of
/// changing what it yields.
#[derive(Debug, Clone)]
pub struct ListIter {
    items: Arc<Vec<Value>>,
    front: usize,
    back: usize,
}

impl ListIter {
    /// Elements not yet yielded.
    pub fn remaining(&self) -> &[Value] {
        &self.items[self.front..self.back]
    }
}

impl Iterator for ListIter {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.items[self.front].clone();
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ListIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }
}

impl ExactSizeIterator for ListIter {}

impl FusedIterator for ListIter {}

impl List {
    /// Snapshot iterator over the current elements.
    pub fn iter(&self) -> ListIter {
        ListIter {
            items: self.items.clone(),
            front: 0,
            back: self.items.len(),
        }
    }

    /// Copies the current elements out.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.to_vec()
    }
}

impl IntoIterator for &List {
    type Item = Value;
    type IntoIter = ListIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
