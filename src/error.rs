/// Errors produced by the windowing calculators.
///
/// Degenerate-but-finite inputs (negative offsets, zero item sizes) are clamped, never
/// rejected; only inputs for which clamping cannot give a meaningful answer become errors.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric argument was NaN or infinite.
    #[error("non-finite argument `{name}`: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Validates that `value` is finite, naming the offending parameter on failure.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}
