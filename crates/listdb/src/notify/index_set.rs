use std::ops::Range;

/// Sorted set of list indexes, stored as disjoint half-open ranges.
///
/// Ranges are kept sorted, non-empty and non-adjacent, so two sets holding
/// the same indexes always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet {
    ranges: Vec<Range<usize>>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_range(range: Range<usize>) -> Self {
        if range.is_empty() {
            return Self::new();
        }
        Self {
            ranges: vec![range],
        }
    }

    /// Set covering the closed interval `[first, last]`.
    pub fn from_inclusive(first: usize, last: usize) -> Self {
        Self::from_range(first..last + 1)
    }

    /// Adds an index, returning false if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        let pos = self.ranges.partition_point(|r| r.end < index);

        let Some(range) = self.ranges.get_mut(pos) else {
            self.ranges.push(index..index + 1);
            return true;
        };

        if range.contains(&index) {
            return false;
        }

        if range.end == index {
            range.end += 1;
            let merge = self
                .ranges
                .get(pos + 1)
                .is_some_and(|next| next.start == index + 1);
            if merge {
                let next = self.ranges.remove(pos + 1);
                self.ranges[pos].end = next.end;
            }
        } else if range.start == index + 1 {
            range.start = index;
        } else {
            self.ranges.insert(pos, index..index + 1);
        }

        true
    }

    pub fn contains(&self, index: usize) -> bool {
        let pos = self.ranges.partition_point(|r| r.end <= index);
        self.ranges.get(pos).is_some_and(|r| r.contains(&index))
    }

    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.ranges.first().map(|r| r.start)
    }

    pub fn last(&self) -> Option<usize> {
        self.ranges.last().map(|r| r.end - 1)
    }

    /// The disjoint ranges making up the set, in ascending order.
    #[inline]
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Indexes in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(|r| r.clone())
    }
}

impl From<Range<usize>> for IndexSet {
    fn from(value: Range<usize>) -> Self {
        Self::from_range(value)
    }
}

impl<const N: usize> From<[usize; N]> for IndexSet {
    fn from(value: [usize; N]) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for IndexSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for index in iter {
            self.insert(index);
        }
    }
}
