use std::{cmp::Ordering, fmt};

use crate::{ElementKind, Error, Result, ScalarType, Value, key_path::KeyPath};

use super::List;

/// Reducing queries over elements or one field of object elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    Min,
    Max,
    Sum,
    Average,
}

impl AggregateOp {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Average => "average",
        }
    }

    /// Numbers support every operation, dates only `min` and `max`.
    pub const fn supports(self, ty: ScalarType) -> bool {
        ty.is_numeric() || (ty.is_timestamp() && matches!(self, Self::Min | Self::Max))
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl List {
    /// Computes `op` over the elements (`key == "self"`) or over field `key` of
    /// every element of a list of objects.
    ///
    /// Null values are skipped. `sum` of nothing is zero; `min`, `max` and
    /// `average` of nothing are `None`.
    pub fn aggregate(&self, key: &str, op: AggregateOp) -> Result<Option<Value>> {
        match KeyPath::parse(key)? {
            KeyPath::Elements => {
                let ty = aggregatable(self.kind(), op)?;
                Ok(reduce(self.items.iter(), ty, op))
            }
            KeyPath::Field(field) => {
                let property = self.require_schema()?.require_property(field)?;
                let ty = aggregatable(property.kind(), op)?;
                let values = self.field_values(field)?;
                Ok(reduce(values.iter(), ty, op))
            }
        }
    }

    pub fn min(&self, key: &str) -> Result<Option<Value>> {
        self.aggregate(key, AggregateOp::Min)
    }

    pub fn max(&self, key: &str) -> Result<Option<Value>> {
        self.aggregate(key, AggregateOp::Max)
    }

    pub fn sum(&self, key: &str) -> Result<Value> {
        self.aggregate(key, AggregateOp::Sum)
            .map(Option::unwrap_or_default)
    }

    pub fn average(&self, key: &str) -> Result<Option<Value>> {
        self.aggregate(key, AggregateOp::Average)
    }
}

fn aggregatable(kind: &ElementKind, op: AggregateOp) -> Result<ScalarType> {
    match kind {
        ElementKind::Scalar(ty) if op.supports(*ty) => Ok(*ty),
        _ => Err(Error::UnsupportedAggregate {
            op,
            ty: kind.to_string(),
        }),
    }
}

fn reduce<'a>(
    values: impl Iterator<Item = &'a Value>,
    ty: ScalarType,
    op: AggregateOp,
) -> Option<Value> {
    let values = values.filter(|value| !value.is_null());

    match op {
        AggregateOp::Min => extremum(values, Ordering::Less),
        AggregateOp::Max => extremum(values, Ordering::Greater),
        AggregateOp::Sum => Some(match ty {
            ScalarType::Int => Value::Int(
                values
                    .filter_map(Value::as_int)
                    .fold(0_i64, i64::wrapping_add),
            ),
            _ => Value::Double(values.filter_map(Value::as_f64).sum()),
        }),
        AggregateOp::Average => {
            let (sum, count) = values
                .filter_map(Value::as_f64)
                .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
            (count > 0).then(|| Value::Double(sum / count as f64))
        }
    }
}

fn extremum<'a>(values: impl Iterator<Item = &'a Value>, keep: Ordering) -> Option<Value> {
    values
        .fold(None::<&Value>, |best, value| match best {
            Some(best) if value.compare(best) != Some(keep) => Some(best),
            _ => Some(value),
        })
        .cloned()
}
