use crate::{Error, KEY_PATH_SEPARATOR, Result, SELF_KEY};

/// A single-segment key addressing either the elements or one of their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyPath<'a> {
    Elements,
    Field(&'a str),
}

impl<'a> KeyPath<'a> {
    pub fn parse(key: &'a str) -> Result<Self> {
        if key.contains(KEY_PATH_SEPARATOR) {
            return Err(Error::UnresolvedNestedPath(key.to_string()));
        }
        if key == SELF_KEY {
            Ok(Self::Elements)
        } else {
            Ok(Self::Field(key))
        }
    }
}
