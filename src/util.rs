#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Converts an index of any integer type into the `i64` carried by
/// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds).
#[inline]
pub(crate) fn saturating_index<T: TryInto<i64>>(index: T) -> i64 {
    index.try_into().unwrap_or(i64::MAX)
}
