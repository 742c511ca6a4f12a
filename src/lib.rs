//! Typed, path-based access into JSON value trees.
//!
//! A [`Value`] is navigated with a [`Path`]: a slice of [`PathSegment`]s
//! mixing object keys and array indices. The accessors on [`Value`] resolve
//! the path and coerce what they find, either failing with a precise
//! [`Error`] or, in their `_opt` form, reporting selected failures as
//! absence according to [`SubscriptingOptions`].
//!
//! ```
//! use na_json::{SubscriptingOptions, Value};
//!
//! let doc: Value = na_json::from_str(r#"{"a": {"b": [1, 2, 3], "c": null}}"#).unwrap();
//!
//! assert_eq!(doc.get_i64(&[&"a", &"b", &1]).unwrap(), 2);
//! assert_eq!(
//!     doc.get_str_opt(&[&"a", &"d"], SubscriptingOptions::MISSING_KEY_BECOMES_NONE).unwrap(),
//!     None
//! );
//! ```

mod access;
pub mod de;
mod error;
mod kind;
mod number;
mod options;
mod segment;
mod traverse;
mod util;
mod value;

pub use de::{from_reader, from_slice, from_str, from_value};
pub use error::*;
pub use kind::*;
pub use number::*;
pub use options::*;
pub use segment::*;
pub use value::*;

use util::*;
