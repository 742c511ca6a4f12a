use log::trace;

use crate::{Error, Path, Value, cold_path};

/// Why a traversal stopped.
///
/// `SubscriptIntoNull` is only produced when null detection is on, and only
/// the optional accessors turn it on. It never leaves the crate: the one
/// way out is [`Failure::into_error`].
#[derive(Debug)]
pub(crate) enum Failure {
    Error(Error),
    SubscriptIntoNull(&'static str),
}

impl Failure {
    pub(crate) fn into_error(self) -> Error {
        match self {
            Failure::Error(error) => error,
            Failure::SubscriptIntoNull(segment_type) => Error::UnexpectedSubscript(segment_type),
        }
    }
}

impl From<Error> for Failure {
    #[inline]
    fn from(error: Error) -> Self {
        Failure::Error(error)
    }
}

/// Walks `path` from `root`, one segment at a time.
///
/// With `detect_null` set, reaching a null before the path is exhausted
/// stops with [`Failure::SubscriptIntoNull`]; without it, a null is just
/// another value that cannot be subscripted.
pub(crate) fn resolve<'v>(
    root: &'v Value,
    path: &Path<'_>,
    detect_null: bool,
) -> Result<&'v Value, Failure> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let next = match current {
            Value::Null if detect_null => {
                cold_path();
                trace!("subscript into null at depth {depth}");
                return Err(Failure::SubscriptIntoNull(segment.segment_type()));
            }
            Value::Object(object) => segment.lookup_in_object(object),
            Value::Array(array) => segment.lookup_in_array(array),
            _ => {
                cold_path();
                Err(Error::UnexpectedSubscript(segment.segment_type()))
            }
        };
        match next {
            Ok(value) => current = value,
            Err(error) => {
                trace!("traversal stopped at depth {depth}: {error}");
                return Err(error.into());
            }
        }
    }
    Ok(current)
}
