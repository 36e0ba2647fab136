use thiserror::Error;

/// The target function returned NaN or an infinity.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("non-finite residual {residual} at x = {x}")]
pub struct NonFiniteResidual {
    pub x: f64,
    pub residual: f64,
}

/// Evaluates the target function at `x`.
///
/// # Errors
///
/// Returns an error if the residual is not finite.
pub fn evaluate<F>(f: &mut F, x: f64) -> Result<f64, NonFiniteResidual>
where
    F: FnMut(f64) -> f64,
{
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(NonFiniteResidual { x, residual })
    }
}
