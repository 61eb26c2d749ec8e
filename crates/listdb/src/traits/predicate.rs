use std::{cmp::Ordering, fmt};

use crate::{Error, Result, Value, key_path::KeyPath};

/// Decides whether a list element matches.
///
/// Closures `Fn(&Value) -> bool` are predicates; [`Comparison`] covers the
/// common `key <op> constant` form.
pub trait Predicate {
    fn evaluate(&self, candidate: &Value) -> Result<bool>;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool,
{
    #[inline]
    fn evaluate(&self, candidate: &Value) -> Result<bool> {
        Ok(self(candidate))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn holds(self, lhs: &Value, rhs: &Value) -> bool {
        // Ordering against null never matches.
        let ordering = || {
            if lhs.is_null() || rhs.is_null() {
                None
            } else {
                lhs.compare(rhs)
            }
        };
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => ordering() == Some(Ordering::Less),
            Self::Le => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)),
            Self::Gt => ordering() == Some(Ordering::Greater),
            Self::Ge => matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        })
    }
}

/// `key <op> operand`, where `key` is `"self"` or a field of object elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    key: String,
    op: CompareOp,
    operand: Value,
}

impl Comparison {
    pub fn new(key: impl Into<String>, op: CompareOp, operand: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            op,
            operand: operand.into(),
        }
    }
}

impl Predicate for Comparison {
    fn evaluate(&self, candidate: &Value) -> Result<bool> {
        let lhs = match KeyPath::parse(&self.key)? {
            KeyPath::Elements => candidate.clone(),
            KeyPath::Field(field) => match candidate {
                Value::Object(object) => object.get(field)?,
                Value::Null => Value::Null,
                _ => {
                    return Err(Error::UnsupportedOperation(
                        "field comparisons are only valid on lists of objects",
                    ));
                }
            },
        };
        Ok(self.op.holds(&lhs, &self.operand))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.op, self.operand)
    }
}
