use crate::{Object, ObjectSchema, Result, ScalarType, Timestamp, Value};

/// A Rust type describing objects of one schema.
///
/// Usually derived with `#[derive(Model)]` (feature `derive`).
pub trait Model: Sized {
    /// Schema name.
    const NAME: &'static str;

    fn schema() -> ObjectSchema;

    /// Converts into a resolved object carrying every field of `self`.
    fn into_object(self) -> Result<Object>;
}

/// Rust field types usable as scalar properties of a [`Model`].
pub trait PropertyValue {
    const KIND: ScalarType;
    const OPTIONAL: bool = false;

    fn into_value(self) -> Value;
}

macro_rules! impl_property_value {
    ($kind:ident => $($t:ty),*) => {
        $(
            impl PropertyValue for $t {
                const KIND: ScalarType = ScalarType::$kind;

                #[inline]
                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_property_value!(Bool => bool);
impl_property_value!(Int => i8, i16, i32, i64, u8, u16, u32);
impl_property_value!(Float => f32);
impl_property_value!(Double => f64);
impl_property_value!(String => String);
impl_property_value!(Data => Vec<u8>);
impl_property_value!(Date => Timestamp);

impl<T> PropertyValue for Option<T>
where
    T: PropertyValue,
{
    const KIND: ScalarType = T::KIND;
    const OPTIONAL: bool = true;

    fn into_value(self) -> Value {
        self.map_or(Value::Null, PropertyValue::into_value)
    }
}
