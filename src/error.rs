//! Error types for path traversal and typed access.
//!
//! This module contains the [`Error`] type which represents every failure a
//! caller of the accessor families can observe.
//!
//! # Example
//!
//! ```
//! use na_json::{Error, Result, Value};
//!
//! fn read_port(config: &Value) -> Result<i64> {
//!     match config.get_i64(&[&"server", &"port"]) {
//!         Ok(port) => Ok(port),
//!         Err(Error::KeyNotFound(key)) => {
//!             println!("missing key: {key}");
//!             Ok(8080)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::fmt::Display;

use serde::de;
use thiserror::Error;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when navigating
/// a [`Value`](crate::Value) or coercing the value found at the end of a path.
///
/// # Variants
///
/// - [`KeyNotFound`](Error::KeyNotFound) - A key segment had no entry in an object
/// - [`IndexOutOfBounds`](Error::IndexOutOfBounds) - An index segment fell outside an array
/// - [`UnexpectedSubscript`](Error::UnexpectedSubscript) - A segment cannot navigate the value it met
/// - [`TypeNotConvertible`](Error::TypeNotConvertible) - The resolved value has the wrong shape
/// - [`Message`](Error::Message) - A decodable type rejected the value
/// - [`Parse`](Error::Parse) - The input text was not valid JSON
#[derive(Debug, Error)]
pub enum Error {
    /// A key segment had no corresponding entry in an object.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// An index segment fell outside `[0, len)` of an array.
    ///
    /// Indices that do not fit an `i64` are reported as `i64::MAX`.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(i64),

    /// A segment was applied to a value it cannot navigate, such as an
    /// integer into an object or anything into a number.
    ///
    /// Carries the type name of the offending segment.
    #[error("unexpected subscript with segment of type `{0}`")]
    UnexpectedSubscript(&'static str),

    /// The resolved value is not of the expected type.
    ///
    /// Carries a description of what was expected.
    #[error("value is not convertible to {0}")]
    TypeNotConvertible(String),

    /// A custom message raised by a type's [`Deserialize`](serde::Deserialize)
    /// implementation. Passed through verbatim.
    #[error("{0}")]
    Message(String),

    /// The JSON parser rejected the input.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for the failures that report a missing entry, i.e.
    /// [`KeyNotFound`](Error::KeyNotFound) and
    /// [`IndexOutOfBounds`](Error::IndexOutOfBounds).
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::KeyNotFound(_) | Error::IndexOutOfBounds(_))
    }

    pub(crate) fn not_convertible(expected: impl Display) -> Self {
        Error::TypeNotConvertible(expected.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    fn invalid_type(_unexpected: de::Unexpected<'_>, expected: &dyn de::Expected) -> Self {
        Error::not_convertible(expected)
    }

    fn invalid_value(_unexpected: de::Unexpected<'_>, expected: &dyn de::Expected) -> Self {
        Error::not_convertible(expected)
    }
}
