//! Serde support: building [`Value`] trees from JSON text, and decoding Rust
//! types out of a [`Value`].
//!
//! Parsing is delegated to `serde_json`; this module only supplies the
//! [`Deserialize`] implementation that lets `serde_json` produce a [`Value`].
//! Decoding goes the other way: `&Value` implements [`serde::Deserializer`],
//! so any `T: Deserialize` can be read straight out of a tree without going
//! back through text.
//!
//! # Quick Start
//!
//! ```
//! use na_json::{Value, from_str, from_value};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let value: Value = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
//! let point: Point = from_value(&value).unwrap();
//! assert_eq!((point.x, point.y), (1, 2));
//! ```
//!
//! # JSON to Rust Type Mapping
//!
//! | JSON | Rust Types |
//! |------|------------|
//! | `null` | `()`, `Option::None`, unit structs |
//! | `true` / `false` | `bool` |
//! | number | integer types (when in range), `f32`, `f64` |
//! | string | `&str`, `String`, `char`, unit enum variants |
//! | array | `Vec<T>`, tuples, `[T; N]` |
//! | object | structs, maps with string keys, `{"Variant": ...}` enums |
//!
//! # Error Handling
//!
//! - A value of the wrong shape fails with [`Error::TypeNotConvertible`]
//!   naming what the target type expected.
//! - Anything the target type raises through
//!   [`serde::de::Error::custom`] fails with [`Error::Message`], unchanged.
//! - Malformed JSON text fails with [`Error::Parse`].
//!
//! [`Error::TypeNotConvertible`]: crate::Error::TypeNotConvertible
//! [`Error::Message`]: crate::Error::Message
//! [`Error::Parse`]: crate::Error::Parse

use std::{collections::btree_map, fmt, io::Read, slice};

use serde::{
    Deserialize,
    de::{
        self, DeserializeOwned, EnumAccess, IntoDeserializer, MapAccess, SeqAccess, VariantAccess,
        value::BorrowedStrDeserializer,
    },
};

use crate::{Error, Map, Result, Value, cold_path};

/// Parses JSON text into `T`, usually a [`Value`].
///
/// # Example
///
/// ```
/// use na_json::Value;
///
/// let value: Value = na_json::from_str("[1, 2, 3]").unwrap();
/// assert_eq!(value.get_i64(&[&2]).unwrap(), 3);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) for malformed input, and
/// also when `T` is not [`Value`] and the text does not fit `T`.
#[inline]
pub fn from_str<'a, T>(input: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(input)?)
}

/// Parses JSON bytes into `T`. The input must be UTF-8.
#[inline]
pub fn from_slice<'a, T>(input: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(input)?)
}

/// Parses JSON from any `std::io::Read` implementation.
///
/// # Example
/// ```no_run
/// use std::fs::File;
/// use na_json::Value;
///
/// let file = File::open("config.json").unwrap();
/// let config: Value = na_json::from_reader(file).unwrap();
/// ```
#[inline]
pub fn from_reader<T, R: Read>(reader: R) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes `T` out of a value tree. Borrowed types such as `&str` borrow
/// from `value`.
#[inline]
pub fn from_value<'de, T>(value: &'de Value) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(value)
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            array.push(element);
        }
        Ok(Value::Array(array))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Map::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}

impl<'de> de::Deserializer<'de> for &'de Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(value) => visitor.visit_bool(*value),
            Value::Number(number) => number.visit(visitor),
            Value::String(value) => visitor.visit_borrowed_str(value),
            Value::Array(array) => visit_array(array, visitor),
            Value::Object(object) => visit_object(object, visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            // Unit variant: "Variant"
            Value::String(variant) => visitor.visit_enum(variant.as_str().into_deserializer()),
            // Newtype, tuple or struct variant: {"Variant": <content>}
            Value::Object(object) => {
                let mut entries = object.iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => visitor.visit_enum(VariantDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    _ => {
                        cold_path();
                        Err(Error::not_convertible("single-key object"))
                    }
                }
            }
            _ => {
                cold_path();
                Err(Error::not_convertible("string or single-key object"))
            }
        }
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier
    }
}

fn visit_array<'de, V>(array: &'de [Value], visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let len = array.len();
    let mut deserializer = ArrayDeserializer { iter: array.iter() };
    let value = visitor.visit_seq(&mut deserializer)?;
    if deserializer.iter.len() == 0 {
        Ok(value)
    } else {
        cold_path();
        Err(de::Error::invalid_length(len, &"fewer elements in array"))
    }
}

fn visit_object<'de, V>(object: &'de Map, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let len = object.len();
    let mut deserializer = ObjectDeserializer {
        iter: object.iter(),
        value: None,
    };
    let value = visitor.visit_map(&mut deserializer)?;
    if deserializer.iter.len() == 0 {
        Ok(value)
    } else {
        cold_path();
        Err(de::Error::invalid_length(len, &"fewer elements in object"))
    }
}

struct ArrayDeserializer<'de> {
    iter: slice::Iter<'de, Value>,
}

impl<'de> SeqAccess<'de> for &mut ArrayDeserializer<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct ObjectDeserializer<'de> {
    iter: btree_map::Iter<'de, String, Value>,
    value: Option<&'de Value>,
}

impl<'de> MapAccess<'de> for &mut ObjectDeserializer<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => {
                cold_path();
                Err(de::Error::custom("value is missing"))
            }
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

// For newtype, tuple and struct enum variants
struct VariantDeserializer<'de> {
    variant: &'de str,
    value: Option<&'de Value>,
}

impl<'de> EnumAccess<'de> for VariantDeserializer<'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(BorrowedStrDeserializer::<Error>::new(self.variant))?;
        Ok((variant, self))
    }
}

impl<'de> VariantAccess<'de> for VariantDeserializer<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None | Some(Value::Null) => Ok(()),
            Some(_) => {
                cold_path();
                Err(Error::not_convertible("unit variant"))
            }
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => {
                cold_path();
                Err(Error::not_convertible("newtype variant"))
            }
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(array)) => visit_array(array, visitor),
            _ => {
                cold_path();
                Err(Error::not_convertible("tuple variant"))
            }
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(object)) => visit_object(object, visitor),
            _ => {
                cold_path();
                Err(Error::not_convertible("struct variant"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::de::{EnumAccess, VariantAccess};

    use super::*;

    #[test]
    fn variant_name_is_read_before_content() {
        let content = Value::from(vec![1, 2]);
        let access = VariantDeserializer {
            variant: "Pair",
            value: Some(&content),
        };
        let (name, variant) = access.variant_seed(std::marker::PhantomData::<&str>).unwrap();
        assert_eq!(name, "Pair");
        let pair: (u8, u8) = variant.newtype_variant().unwrap();
        assert_eq!(pair, (1, 2));
    }

    #[test]
    fn struct_variant_from_single_key_object() {
        #[derive(Deserialize, Debug, PartialEq)]
        enum Shape {
            Rect { w: u32, h: u32 },
        }

        let value: Value = from_str(r#"{"Rect": {"w": 2, "h": 3}}"#).unwrap();
        assert_eq!(from_value::<Shape>(&value).unwrap(), Shape::Rect { w: 2, h: 3 });
    }

    #[test]
    fn object_keys_are_borrowed() {
        let value: Value = from_str(r#"{"k": "v"}"#).unwrap();
        let map: std::collections::BTreeMap<&str, &str> = from_value(&value).unwrap();
        assert_eq!(map["k"], "v");
    }
}
