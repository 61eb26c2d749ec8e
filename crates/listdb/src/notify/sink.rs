use std::{
    fmt,
    sync::{Arc, Weak},
};

use log::debug;

use crate::IndexSet;

/// What a structural mutation did to the affected indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insert,
    Remove,
    Replace,
}

/// Receives change notifications for a list embedded in a larger object.
///
/// Both hooks are called synchronously: `will_change` right before the list is
/// mutated and `did_change` right after, with the same kind and indexes.
pub trait ChangeSink: Send + Sync {
    fn will_change(&self, key: &str, kind: ChangeKind, indexes: &IndexSet);

    fn did_change(&self, key: &str, kind: ChangeKind, indexes: &IndexSet);
}

/// Back-reference from a list to the object it is a field of.
///
/// Holds the sink weakly: the list never keeps its owner alive, and once the
/// owner is gone mutations proceed without notifications.
#[derive(Clone)]
pub struct Owner {
    sink: Weak<dyn ChangeSink>,
    key: String,
}

impl Owner {
    pub fn new<S>(sink: &Arc<S>, key: impl Into<String>) -> Self
    where
        S: ChangeSink + 'static,
    {
        let sink: Weak<S> = Arc::downgrade(sink);
        Self {
            sink,
            key: key.into(),
        }
    }

    /// Property key of the list on its owner.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.sink.strong_count() > 0
    }

    /// Runs `mutate` between `will_change` and `did_change`.
    pub(crate) fn bracket<R>(
        &self,
        kind: ChangeKind,
        indexes: &IndexSet,
        mutate: impl FnOnce() -> R,
    ) -> R {
        let Some(sink) = self.sink.upgrade() else {
            debug!(
                "Owner of '{}' is gone, applying {kind:?} without notification.",
                self.key
            );
            return mutate();
        };

        sink.will_change(&self.key, kind, indexes);
        let result = mutate();
        sink.did_change(&self.key, kind, indexes);
        result
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("key", &self.key)
            .field("alive", &self.is_alive())
            .finish()
    }
}
