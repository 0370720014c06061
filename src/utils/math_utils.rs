#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Truncating conversion of an already floored value into a (possibly negative) cell index.
///
/// Values outside of the `isize` range saturate.
#[must_use]
pub const fn f64_to_isize(value: f64) -> isize {
    #[allow(clippy::cast_possible_truncation)]
    let newval = value as isize;
    newval
}
