//! Typed accessors over a path.
//!
//! Every accessor comes in three forms:
//!
//! - `get_*` / [`decode`](Value::decode) resolve the path and coerce the
//!   value found there. Any failure is returned as an [`Error`].
//! - `*_opt` take [`SubscriptingOptions`] and return `Ok(None)` for the
//!   failures the options select, and `Err` for everything else.
//! - `*_or` take a fallback that is returned wherever the `*_opt` form
//!   with [`SubscriptingOptions::all`] would return `None`.
//!
//! ```
//! use na_json::{SubscriptingOptions, Value};
//!
//! let value: Value = na_json::from_str(r#"{"a": {"b": [1, 2, 3], "c": null}}"#).unwrap();
//!
//! assert_eq!(value.get_i64(&[&"a", &"b", &1]).unwrap(), 2);
//! assert!(value.get_i64(&[&"a", &"c"]).is_err());
//! assert_eq!(
//!     value.get_i64_opt(&[&"a", &"c"], SubscriptingOptions::NULL_BECOMES_NONE).unwrap(),
//!     None
//! );
//! assert_eq!(value.get_i64_or(&[&"a", &"missing"], 7).unwrap(), 7);
//! ```

use std::collections::BTreeMap;

use log::trace;
use serde::Deserialize;

use crate::{
    Error, Kind, Map, Number, Path, Result, SubscriptingOptions, Value,
    traverse::{Failure, resolve},
};

impl Value {
    fn required<'v, T>(
        &'v self,
        path: &Path<'_>,
        coerce: impl FnOnce(&'v Value) -> Result<T>,
    ) -> Result<T> {
        let value = resolve(self, path, false).map_err(Failure::into_error)?;
        coerce(value)
    }

    fn optional<'v, T>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
        coerce: impl FnOnce(&'v Value) -> Result<T>,
    ) -> Result<Option<T>> {
        let detect_null = options.contains(SubscriptingOptions::NULL_BECOMES_NONE);
        let detect_missing = options.contains(SubscriptingOptions::MISSING_KEY_BECOMES_NONE);

        let value = match resolve(self, path, detect_null) {
            Ok(value) => value,
            Err(Failure::SubscriptIntoNull(segment_type)) if detect_null => {
                trace!("null met before segment of type `{segment_type}`, reporting none");
                return Ok(None);
            }
            Err(Failure::Error(error)) if detect_missing && error.is_missing() => {
                trace!("{error}, reporting none");
                return Ok(None);
            }
            Err(failure) => return Err(failure.into_error()),
        };

        match coerce(value) {
            Ok(value) => Ok(Some(value)),
            // A null that survives to the end of the path is rejected by the
            // coercion rather than by the traversal.
            Err(Error::TypeNotConvertible(expected)) if detect_null && value.is_null() => {
                trace!("null where {expected} was required, reporting none");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn fallback<'v, T>(
        &'v self,
        path: &Path<'_>,
        fallback: T,
        coerce: impl FnOnce(&'v Value) -> Result<T>,
    ) -> Result<T> {
        Ok(self
            .optional(path, SubscriptingOptions::all(), coerce)?
            .unwrap_or(fallback))
    }

    /// Resolves `path` without coercing the result.
    ///
    /// An empty path resolves to `self`.
    #[inline]
    pub fn get_value<'v>(&'v self, path: &Path<'_>) -> Result<&'v Value> {
        self.required(path, Ok)
    }

    /// Optional form of [`get_value`](Value::get_value).
    ///
    /// A null at the end of the path is a value like any other and is
    /// returned as `Some(&Value::Null)`.
    #[inline]
    pub fn get_value_opt<'v>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<&'v Value>> {
        self.optional(path, options, Ok)
    }

    /// Like [`get_value_opt`](Value::get_value_opt) with every flag set, returning `fallback` when absent.
    #[inline]
    pub fn get_value_or<'v>(&'v self, path: &Path<'_>, fallback: &'v Value) -> Result<&'v Value> {
        self.fallback(path, fallback, Ok)
    }

    /// Resolves `path` and decodes the value found there as `T`.
    ///
    /// Errors raised by `T`'s [`Deserialize`] implementation through
    /// [`serde::de::Error::custom`] come back unchanged as
    /// [`Error::Message`].
    ///
    /// # Example
    ///
    /// ```
    /// use na_json::Value;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct User<'a> {
    ///     name: &'a str,
    ///     age: u8,
    /// }
    ///
    /// let value: Value = na_json::from_str(r#"{"users": [{"name": "ada", "age": 36}]}"#).unwrap();
    /// let user: User = value.decode(&[&"users", &0]).unwrap();
    /// assert_eq!(user, User { name: "ada", age: 36 });
    /// ```
    #[inline]
    pub fn decode<'v, T: Deserialize<'v>>(&'v self, path: &Path<'_>) -> Result<T> {
        self.required(path, |value| T::deserialize(value))
    }

    /// Decodes the value at `path`, or `None` when `options` absorb the failure.
    #[inline]
    pub fn decode_opt<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<T>> {
        self.optional(path, options, |value| T::deserialize(value))
    }

    /// Decodes the value at `path`, or returns `fallback` when it is null or missing.
    #[inline]
    pub fn decode_or<'v, T: Deserialize<'v>>(&'v self, path: &Path<'_>, fallback: T) -> Result<T> {
        self.fallback(path, fallback, |value| T::deserialize(value))
    }

    /// Resolves `path` to a boolean.
    #[inline]
    pub fn get_bool(&self, path: &Path<'_>) -> Result<bool> {
        self.required(path, coerce_bool)
    }

    /// Optional form of [`get_bool`](Value::get_bool).
    #[inline]
    pub fn get_bool_opt(
        &self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<bool>> {
        self.optional(path, options, coerce_bool)
    }

    /// Fallback form of [`get_bool`](Value::get_bool).
    #[inline]
    pub fn get_bool_or(&self, path: &Path<'_>, fallback: bool) -> Result<bool> {
        self.fallback(path, fallback, coerce_bool)
    }

    /// Resolves `path` to an integer.
    ///
    /// Floats with no fractional part are accepted when they fit an `i64`;
    /// any other float fails with [`Error::TypeNotConvertible`].
    #[inline]
    pub fn get_i64(&self, path: &Path<'_>) -> Result<i64> {
        self.required(path, coerce_i64)
    }

    /// Optional form of [`get_i64`](Value::get_i64).
    #[inline]
    pub fn get_i64_opt(
        &self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<i64>> {
        self.optional(path, options, coerce_i64)
    }

    /// Fallback form of [`get_i64`](Value::get_i64).
    #[inline]
    pub fn get_i64_or(&self, path: &Path<'_>, fallback: i64) -> Result<i64> {
        self.fallback(path, fallback, coerce_i64)
    }

    /// Resolves `path` to a non-negative integer, with the same float rules
    /// as [`get_i64`](Value::get_i64).
    #[inline]
    pub fn get_u64(&self, path: &Path<'_>) -> Result<u64> {
        self.required(path, coerce_u64)
    }

    /// Optional form of [`get_u64`](Value::get_u64).
    #[inline]
    pub fn get_u64_opt(
        &self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<u64>> {
        self.optional(path, options, coerce_u64)
    }

    /// Fallback form of [`get_u64`](Value::get_u64).
    #[inline]
    pub fn get_u64_or(&self, path: &Path<'_>, fallback: u64) -> Result<u64> {
        self.fallback(path, fallback, coerce_u64)
    }

    /// Resolves `path` to a float. Integers are widened and may lose
    /// precision above 2^53.
    #[inline]
    pub fn get_f64(&self, path: &Path<'_>) -> Result<f64> {
        self.required(path, coerce_f64)
    }

    /// Optional form of [`get_f64`](Value::get_f64).
    #[inline]
    pub fn get_f64_opt(
        &self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<f64>> {
        self.optional(path, options, coerce_f64)
    }

    /// Fallback form of [`get_f64`](Value::get_f64).
    #[inline]
    pub fn get_f64_or(&self, path: &Path<'_>, fallback: f64) -> Result<f64> {
        self.fallback(path, fallback, coerce_f64)
    }

    /// Resolves `path` to a string slice borrowed from `self`.
    #[inline]
    pub fn get_str<'v>(&'v self, path: &Path<'_>) -> Result<&'v str> {
        self.required(path, coerce_str)
    }

    /// Optional form of [`get_str`](Value::get_str).
    #[inline]
    pub fn get_str_opt<'v>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<&'v str>> {
        self.optional(path, options, coerce_str)
    }

    /// Fallback form of [`get_str`](Value::get_str).
    #[inline]
    pub fn get_str_or<'v>(&'v self, path: &Path<'_>, fallback: &'v str) -> Result<&'v str> {
        self.fallback(path, fallback, coerce_str)
    }

    /// Resolves `path` to the elements of an array.
    #[inline]
    pub fn get_array<'v>(&'v self, path: &Path<'_>) -> Result<&'v [Value]> {
        self.required(path, coerce_array)
    }

    /// Optional form of [`get_array`](Value::get_array).
    #[inline]
    pub fn get_array_opt<'v>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<&'v [Value]>> {
        self.optional(path, options, coerce_array)
    }

    /// Fallback form of [`get_array`](Value::get_array).
    #[inline]
    pub fn get_array_or<'v>(
        &'v self,
        path: &Path<'_>,
        fallback: &'v [Value],
    ) -> Result<&'v [Value]> {
        self.fallback(path, fallback, coerce_array)
    }

    /// Resolves `path` to an array and decodes every element as `T`.
    ///
    /// The first element that fails to decode fails the whole call; no
    /// partial list is returned.
    #[inline]
    pub fn get_array_of<'v, T: Deserialize<'v>>(&'v self, path: &Path<'_>) -> Result<Vec<T>> {
        self.required(path, coerce_array_of)
    }

    /// Optional form of [`get_array_of`](Value::get_array_of).
    #[inline]
    pub fn get_array_of_opt<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<Vec<T>>> {
        self.optional(path, options, coerce_array_of)
    }

    /// Fallback form of [`get_array_of`](Value::get_array_of).
    #[inline]
    pub fn get_array_of_or<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
        fallback: Vec<T>,
    ) -> Result<Vec<T>> {
        self.fallback(path, fallback, coerce_array_of)
    }

    /// Resolves `path` to the entries of an object.
    #[inline]
    pub fn get_object<'v>(&'v self, path: &Path<'_>) -> Result<&'v Map> {
        self.required(path, coerce_object)
    }

    /// Optional form of [`get_object`](Value::get_object).
    #[inline]
    pub fn get_object_opt<'v>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<&'v Map>> {
        self.optional(path, options, coerce_object)
    }

    /// Fallback form of [`get_object`](Value::get_object).
    #[inline]
    pub fn get_object_or<'v>(&'v self, path: &Path<'_>, fallback: &'v Map) -> Result<&'v Map> {
        self.fallback(path, fallback, coerce_object)
    }

    /// Resolves `path` to an object and decodes every entry's value as `T`,
    /// all or nothing like [`get_array_of`](Value::get_array_of).
    #[inline]
    pub fn get_object_of<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
    ) -> Result<BTreeMap<String, T>> {
        self.required(path, coerce_object_of)
    }

    /// Optional form of [`get_object_of`](Value::get_object_of).
    #[inline]
    pub fn get_object_of_opt<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
        options: SubscriptingOptions,
    ) -> Result<Option<BTreeMap<String, T>>> {
        self.optional(path, options, coerce_object_of)
    }

    /// Fallback form of [`get_object_of`](Value::get_object_of).
    #[inline]
    pub fn get_object_of_or<'v, T: Deserialize<'v>>(
        &'v self,
        path: &Path<'_>,
        fallback: BTreeMap<String, T>,
    ) -> Result<BTreeMap<String, T>> {
        self.fallback(path, fallback, coerce_object_of)
    }
}

fn coerce_bool(value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| Error::not_convertible(Kind::Bool))
}

fn coerce_i64(value: &Value) -> Result<i64> {
    value
        .as_number()
        .and_then(Number::as_integral_i64)
        .ok_or_else(|| Error::not_convertible("i64"))
}

fn coerce_u64(value: &Value) -> Result<u64> {
    value
        .as_number()
        .and_then(Number::as_integral_u64)
        .ok_or_else(|| Error::not_convertible("u64"))
}

fn coerce_f64(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| Error::not_convertible("f64"))
}

fn coerce_str(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| Error::not_convertible(Kind::String))
}

fn coerce_array(value: &Value) -> Result<&[Value]> {
    value.as_array().ok_or_else(|| Error::not_convertible(Kind::Array))
}

fn coerce_object(value: &Value) -> Result<&Map> {
    value.as_object().ok_or_else(|| Error::not_convertible(Kind::Object))
}

fn coerce_array_of<'v, T: Deserialize<'v>>(value: &'v Value) -> Result<Vec<T>> {
    coerce_array(value)?
        .iter()
        .map(|element| T::deserialize(element))
        .collect()
}

fn coerce_object_of<'v, T: Deserialize<'v>>(value: &'v Value) -> Result<BTreeMap<String, T>> {
    coerce_object(value)?
        .iter()
        .map(|(key, value)| Ok((key.clone(), T::deserialize(value)?)))
        .collect()
}
