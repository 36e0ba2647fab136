//! Newton-Raphson iteration with a central-difference derivative.
//!
//! From the current estimate `x`, each iteration steps to
//! `x - f(x) / f'(x)`, where `f'(x)` is estimated numerically with
//! [`derivative::central_difference`]. That costs three evaluations of `f`
//! per iteration. The solve succeeds once a step is smaller than the
//! tolerance; the residual itself is not checked.

pub mod derivative;

mod error;
mod event;

pub use error::Error;
pub use event::{Action, Event};

use log::{debug, trace};

use crate::equation::{Config, Criterion, Observer, Solution, evaluate};

/// Finds a root of `f` starting from `initial_guess`.
///
/// Runs [`solve_unobserved`] and returns only the root estimate.
///
/// # Errors
///
/// See [`solve`].
pub fn find_root<F>(f: F, initial_guess: f64, config: &Config) -> Result<f64, Error>
where
    F: FnMut(f64) -> f64,
{
    solve_unobserved(f, initial_guess, config).map(|solution| solution.x)
}

/// Finds a root of `f` using the Newton-Raphson method.
/// Observers see each step before its convergence check.
///
/// # Errors
///
/// - [`Error::NonFiniteGuess`] if `initial_guess` is NaN or infinite.
/// - [`Error::DerivativeTooCloseToZero`] if the derivative estimate at a
///   visited point has magnitude below the tolerance. No step is taken.
/// - [`Error::NonFiniteResidual`], [`Error::NonFiniteDerivative`] or
///   [`Error::NonFiniteStep`] if an intermediate value is NaN or infinite.
/// - [`Error::MaxIterationsReached`] if no step falls below the tolerance
///   within the iteration limit.
/// - [`Error::StoppedByObserver`] if the observer requests a stop.
pub fn solve<F, Obs>(
    mut f: F,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let tol = config.tol();

    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess {
            value: initial_guess,
        });
    }

    let mut x = initial_guess;

    for iter in 1..=config.max_iters() {
        let residual = evaluate(&mut f, x)?;
        let derivative = derivative::central_difference(&mut f, x)?;

        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }
        if derivative.abs() < tol {
            debug!("newton-raphson: derivative {derivative} at x = {x} is below {tol}");
            return Err(Error::DerivativeTooCloseToZero { x, derivative });
        }

        let next_x = x - residual / derivative;
        if !next_x.is_finite() {
            return Err(Error::NonFiniteStep { x });
        }

        let event = Event {
            iter,
            x,
            residual,
            derivative,
            next_x,
        };
        trace!(
            "newton-raphson iter {iter}: f({x}) = {residual}, f' = {derivative}, next x = {next_x}"
        );

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    debug!("newton-raphson: stopped by observer after {} iterations", iter - 1);
                    return Err(Error::StoppedByObserver { iters: iter - 1 });
                }
            }
        }

        if (next_x - x).abs() < tol {
            debug!("newton-raphson: converged at x = {next_x} after {iter} iterations");
            return Ok(Solution {
                x: next_x,
                iters: iter,
                criterion: Criterion::Step,
            });
        }

        x = next_x;
    }

    let iters = config.max_iters();
    debug!("newton-raphson: hit {iters} iterations, last x = {x}");
    Err(Error::MaxIterationsReached { iters, last_x: x })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: F, initial_guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    solve(f, initial_guess, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn finds_square_root_of_two() {
        let solution =
            solve_unobserved(|x| x * x - 2.0, 1.5, &Config::default()).expect("should solve");

        assert_eq!(solution.criterion, Criterion::Step);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn finds_sine_root_near_origin() {
        let root = find_root(f64::sin, 0.5, &Config::default()).expect("should solve");
        assert_relative_eq!(root, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn flat_cube_at_origin_is_rejected() {
        let mut calls = 0;
        let f = |x: f64| {
            calls += 1;
            x * x * x
        };

        let result = solve_unobserved(f, 0.0, &Config::default());

        let Err(Error::DerivativeTooCloseToZero { x, derivative }) = result else {
            panic!("expected DerivativeTooCloseToZero, got {result:?}");
        };
        assert_eq!(x, 0.0);
        assert!(derivative.abs() < 1e-6);
        // One residual and two derivative evaluations, no step.
        assert_eq!(calls, 3);
    }

    #[test]
    fn three_evaluations_per_iteration() {
        let mut calls = 0;
        let f = |x: f64| {
            calls += 1;
            x * x - 2.0
        };

        let solution = solve_unobserved(f, 1.5, &Config::default()).expect("should solve");

        assert_eq!(calls, 3 * solution.iters);
    }

    #[test]
    fn errors_when_iterations_run_out() {
        // Newton cycles between 0 and 1 on this cubic.
        let f = |x: f64| x * x * x - 2.0 * x + 2.0;
        let config = Config::new(1e-6, 10).expect("valid config");

        let result = solve_unobserved(f, 0.0, &config);

        let Err(Error::MaxIterationsReached { iters, last_x }) = result else {
            panic!("expected MaxIterationsReached, got {result:?}");
        };
        assert_eq!(iters, 10);
        assert_relative_eq!(last_x, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn errors_on_non_finite_guess() {
        let result = solve_unobserved(|x| x, f64::NAN, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn errors_on_non_finite_residual() {
        let result = solve_unobserved(|x| x.sqrt() - 1.0, -4.0, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteResidual(_))));
    }

    #[test]
    fn errors_on_non_finite_derivative() {
        // The jump at zero is too large for the difference to stay finite.
        let f = |x: f64| if x > 0.0 { 1e308 } else { -1e308 };

        let result = solve_unobserved(f, 0.0, &Config::default());

        let Err(Error::NonFiniteDerivative { x, derivative }) = result else {
            panic!("expected NonFiniteDerivative, got {result:?}");
        };
        assert_eq!(x, 0.0);
        assert!(derivative.is_infinite());
    }

    #[test]
    fn errors_on_non_finite_step() {
        // A huge residual over a modest slope overflows the step.
        let f = |x: f64| if x == 0.0 { 1e308 } else { 1e-3 * x };

        let result = solve_unobserved(f, 0.0, &Config::default());

        assert_eq!(result, Err(Error::NonFiniteStep { x: 0.0 }));
    }

    #[test]
    fn observer_sees_each_step() {
        let mut events = Vec::new();
        let observer = |event: &Event| {
            events.push(*event);
            None
        };

        let solution =
            solve(|x| x * x - 2.0, 1.5, &Config::default(), observer).expect("should solve");

        assert_eq!(events.len(), solution.iters);
        assert_relative_eq!(events[0].x, 1.5);
        for pair in events.windows(2) {
            assert_eq!(pair[0].next_x, pair[1].x);
        }
        let last = events.last().expect("at least one event");
        assert_eq!(last.next_x, solution.x);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

        let result = solve(|x| x * x - 2.0, 10.0, &Config::default(), observer);

        assert_eq!(result, Err(Error::StoppedByObserver { iters: 1 }));
    }
}
