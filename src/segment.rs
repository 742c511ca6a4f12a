//! Path segments: the steps a path takes through a [`Value`].
//!
//! A path is a slice of [`PathSegment`] trait objects, so a single path can
//! mix keys and indices:
//!
//! ```
//! use na_json::{Path, Value};
//!
//! let value: Value = na_json::from_str(r#"{"users": [{"name": "ada"}]}"#).unwrap();
//! let path: &Path = &[&"users", &0, &"name"];
//! assert_eq!(value.get_str(path).unwrap(), "ada");
//! ```
//!
//! Custom types take part by implementing whichever half of the trait they
//! need. The other half keeps its default, which fails with
//! [`Error::UnexpectedSubscript`]:
//!
//! ```
//! use na_json::{Map, PathSegment, Result, Value};
//!
//! #[derive(Debug)]
//! enum Field {
//!     Name,
//!     Email,
//! }
//!
//! impl PathSegment for Field {
//!     fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value> {
//!         match self {
//!             Field::Name => "name".lookup_in_object(object),
//!             Field::Email => "email".lookup_in_object(object),
//!         }
//!     }
//! }
//!
//! let value: Value = na_json::from_str(r#"{"name": "ada"}"#).unwrap();
//! assert_eq!(value.get_str(&[&Field::Name]).unwrap(), "ada");
//! assert!(value.get_str(&[&Field::Email]).is_err());
//! ```

use std::borrow::Cow;

use crate::{Error, Map, Value, cold_path, saturating_index};

/// An ordered sequence of segments, outermost first.
pub type Path<'p> = [&'p dyn PathSegment];

/// A single navigation step.
///
/// Both lookups default to failing with
/// [`Error::UnexpectedSubscript`] naming [`segment_type`](PathSegment::segment_type),
/// so an implementer only writes the half it supports.
pub trait PathSegment {
    /// Looks the segment up in an object.
    fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value, Error> {
        let _ = object;
        cold_path();
        Err(Error::UnexpectedSubscript(self.segment_type()))
    }

    /// Looks the segment up in an array.
    fn lookup_in_array<'v>(&self, array: &'v [Value]) -> Result<&'v Value, Error> {
        let _ = array;
        cold_path();
        Err(Error::UnexpectedSubscript(self.segment_type()))
    }

    /// The name reported by [`Error::UnexpectedSubscript`].
    fn segment_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl PathSegment for str {
    #[inline]
    fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value, Error> {
        match object.get(self) {
            Some(value) => Ok(value),
            None => {
                cold_path();
                Err(Error::KeyNotFound(self.to_owned()))
            }
        }
    }
}

impl PathSegment for String {
    #[inline]
    fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value, Error> {
        self.as_str().lookup_in_object(object)
    }

    fn segment_type(&self) -> &'static str {
        self.as_str().segment_type()
    }
}

impl PathSegment for Cow<'_, str> {
    #[inline]
    fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value, Error> {
        self.as_ref().lookup_in_object(object)
    }

    fn segment_type(&self) -> &'static str {
        self.as_ref().segment_type()
    }
}

macro_rules! index_segment {
    ($($t:ty)*) => {
        $(
            impl PathSegment for $t {
                #[inline]
                #[allow(irrefutable_let_patterns)]
                fn lookup_in_array<'v>(&self, array: &'v [Value]) -> Result<&'v Value, Error> {
                    if let Ok(index) = usize::try_from(*self) {
                        if let Some(value) = array.get(index) {
                            return Ok(value);
                        }
                    }
                    cold_path();
                    Err(Error::IndexOutOfBounds(saturating_index(*self)))
                }
            }
        )*
    };
}

index_segment!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl<T: ?Sized + PathSegment> PathSegment for &T {
    #[inline]
    fn lookup_in_object<'v>(&self, object: &'v Map) -> Result<&'v Value, Error> {
        (**self).lookup_in_object(object)
    }

    #[inline]
    fn lookup_in_array<'v>(&self, array: &'v [Value]) -> Result<&'v Value, Error> {
        (**self).lookup_in_array(array)
    }

    fn segment_type(&self) -> &'static str {
        (**self).segment_type()
    }
}
