/// Largest integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
/// Smallest integer exactly representable as an `f64` (`-(2^53 - 1)`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Returns `true` when `value` lies inside the safe integer range.
///
/// ## Example
/// ```
/// use safecalc::util::num::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, is_safe_integer};
///
/// assert!(is_safe_integer(MAX_SAFE_INTEGER));
/// assert!(is_safe_integer(MIN_SAFE_INTEGER));
/// assert!(!is_safe_integer(MAX_SAFE_INTEGER + 1));
/// assert!(!is_safe_integer(MIN_SAFE_INTEGER - 1));
/// ```
#[must_use]
pub const fn is_safe_integer(value: i64) -> bool {
    value >= MIN_SAFE_INTEGER && value <= MAX_SAFE_INTEGER
}

/// Passes `value` through if it is a safe integer, otherwise returns the
/// error built by `error`.
///
/// ## Errors
/// Returns `Err(error())` if `value` is outside
/// `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`.
///
/// ## Example
/// ```
/// use safecalc::util::num::{MAX_SAFE_INTEGER, safe_integer_or_else};
///
/// assert_eq!(safe_integer_or_else(42, || "too big!"), Ok(42));
/// assert_eq!(safe_integer_or_else(MAX_SAFE_INTEGER + 1, || "too big!"), Err("too big!"));
/// ```
pub fn safe_integer_or_else<E, F>(value: i64, error: F) -> Result<i64, E>
    where F: FnOnce() -> E
{
    if is_safe_integer(value) {
        Ok(value)
    } else {
        Err(error())
    }
}
