use crate::equation::{NonFiniteResidual, evaluate};

/// Offset used for every central difference.
pub const STEP: f64 = 1e-5;

/// Estimates `f'(x)` as `(f(x + h) - f(x - h)) / 2h` with `h = STEP`.
///
/// # Errors
///
/// Returns an error if either offset evaluation is not finite.
pub fn central_difference<F>(f: &mut F, x: f64) -> Result<f64, NonFiniteResidual>
where
    F: FnMut(f64) -> f64,
{
    let forward = evaluate(f, x + STEP)?;
    let backward = evaluate(f, x - STEP)?;
    Ok((forward - backward) / (2.0 * STEP))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_for_quadratics() {
        let mut f = |x: f64| 3.0 * x * x - 2.0 * x + 1.0;
        let slope = central_difference(&mut f, 2.0).expect("finite");
        assert_relative_eq!(slope, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn near_zero_for_cube_at_origin() {
        let mut f = |x: f64| x * x * x;
        let slope = central_difference(&mut f, 0.0).expect("finite");
        assert!(slope.abs() < 1e-9);
    }

    #[test]
    fn evaluates_twice() {
        let mut points = Vec::new();
        let mut f = |x: f64| {
            points.push(x);
            x
        };
        let _ = central_difference(&mut f, 1.0);
        assert_eq!(points, vec![1.0 + STEP, 1.0 - STEP]);
    }

    #[test]
    fn propagates_non_finite_offsets() {
        // ln is undefined just left of zero.
        let mut f = |x: f64| x.ln();
        let err = central_difference(&mut f, 0.0).expect_err("ln(-h) is NaN");
        assert_relative_eq!(err.x, -STEP);
    }
}
