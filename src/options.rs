use std::{fmt, ops};

/// Selects which failures the optional accessors report as `None` instead
/// of an error.
///
/// Flags combine with `|`. The default is the empty set, under which the
/// optional accessors fail exactly like the required ones and only ever
/// return `Some`.
///
/// # Example
///
/// ```
/// use na_json::{SubscriptingOptions, Value};
///
/// let value: Value = na_json::from_str(r#"{"a": null}"#).unwrap();
/// let options = SubscriptingOptions::NULL_BECOMES_NONE | SubscriptingOptions::MISSING_KEY_BECOMES_NONE;
///
/// assert_eq!(value.get_i64_opt(&[&"a", &"b"], options).unwrap(), None);
/// assert_eq!(value.get_i64_opt(&[&"z"], options).unwrap(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubscriptingOptions(u8);

impl SubscriptingOptions {
    /// A null met anywhere along the path, or at its end where a non-null
    /// value was required, yields `None`.
    pub const NULL_BECOMES_NONE: SubscriptingOptions = SubscriptingOptions(1 << 0);
    /// A missing object key or an out-of-bounds array index yields `None`.
    pub const MISSING_KEY_BECOMES_NONE: SubscriptingOptions = SubscriptingOptions(1 << 1);

    /// No flags: every failure is reported as an error.
    #[inline]
    pub const fn empty() -> Self {
        SubscriptingOptions(0)
    }

    /// Every flag: null and missing entries both become `None`.
    #[inline]
    pub const fn all() -> Self {
        SubscriptingOptions(Self::NULL_BECOMES_NONE.0 | Self::MISSING_KEY_BECOMES_NONE.0)
    }

    /// Returns `true` if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: SubscriptingOptions) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl ops::BitOr for SubscriptingOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        SubscriptingOptions(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for SubscriptingOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SubscriptingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Self::NULL_BECOMES_NONE) {
            set.entry(&format_args!("NULL_BECOMES_NONE"));
        }
        if self.contains(Self::MISSING_KEY_BECOMES_NONE) {
            set.entry(&format_args!("MISSING_KEY_BECOMES_NONE"));
        }
        set.finish()
    }
}
