//! Bisection: repeated halving of an interval whose endpoints bracket a
//! sign change.
//!
//! Each iteration evaluates the midpoint and keeps the half that still
//! brackets the sign change. The solve succeeds when a midpoint residual
//! falls below the tolerance or when the interval width shrinks to it.

mod bracket;
mod error;
mod event;

pub use bracket::{Bracket, Sign};
pub use error::Error;
pub use event::{Action, Event};

use log::{debug, trace};

use crate::equation::{Config, Criterion, Observer, Solution, evaluate};

use bracket::Bounds;

/// Finds a root of `f` between `lower` and `upper`.
///
/// Runs [`solve_unobserved`] and returns only the root estimate.
///
/// # Errors
///
/// See [`solve`].
pub fn find_root<F>(f: F, lower: f64, upper: f64, config: &Config) -> Result<f64, Error>
where
    F: FnMut(f64) -> f64,
{
    solve_unobserved(f, [lower, upper], config).map(|solution| solution.x)
}

/// Finds a root of `f` using the bisection method.
/// Observers see each midpoint evaluation and the bracket it came from.
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// - [`Error::NonFiniteBracket`] if an endpoint is NaN or infinite.
/// - [`Error::NoRootInInterval`] if `f` does not have strictly opposite
///   signs at the endpoints. No midpoint is evaluated in that case.
/// - [`Error::NonFiniteResidual`] if `f` returns NaN or an infinity.
/// - [`Error::MaxIterationsReached`] if the iteration limit is hit while
///   the bracket is still wider than the tolerance.
/// - [`Error::StoppedByObserver`] if the observer requests a stop.
pub fn solve<F, Obs>(
    mut f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let tol = config.tol();

    let bounds = Bounds::new(bracket).map_err(|value| Error::NonFiniteBracket { value })?;

    let left_residual = evaluate(&mut f, bounds.left)?;
    let right_residual = evaluate(&mut f, bounds.right)?;
    let left_sign = Sign::of(left_residual);

    if !left_sign.is_opposite(Sign::of(right_residual)) {
        debug!(
            "bisection: no sign change on [{}, {}] (f = {left_residual}, {right_residual})",
            bounds.left, bounds.right
        );
        return Err(Error::NoRootInInterval {
            left: bounds.left,
            right: bounds.right,
            left_residual,
            right_residual,
        });
    }

    let mut bracket = Bracket::new(bounds, left_sign);
    let mut iters = 0;

    while bracket.width() > tol && iters < config.max_iters() {
        let mid = bracket.midpoint();
        let residual = evaluate(&mut f, mid)?;

        let event = Event {
            iter: iters + 1,
            bracket: &bracket,
            x: mid,
            residual,
        };
        trace!(
            "bisection iter {}: bracket {:?}, f({mid}) = {residual}",
            event.iter,
            bracket.as_array()
        );

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    debug!("bisection: stopped by observer after {iters} iterations");
                    return Err(Error::StoppedByObserver { iters });
                }
            }
        }

        iters += 1;

        if residual.abs() < tol {
            debug!("bisection: residual converged at x = {mid} after {iters} iterations");
            return Ok(Solution {
                x: mid,
                iters,
                criterion: Criterion::Residual,
            });
        }

        bracket.shrink(mid, Sign::of(residual));
    }

    if bracket.width() <= tol {
        let x = bracket.midpoint();
        debug!("bisection: width converged at x = {x} after {iters} iterations");
        return Ok(Solution {
            x,
            iters,
            criterion: Criterion::Width,
        });
    }

    let [left, right] = bracket.as_array();
    debug!("bisection: hit {iters} iterations with bracket [{left}, {right}]");
    Err(Error::MaxIterationsReached { iters, left, right })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    solve(f, bracket, config, ())
}
