use thiserror::Error;

use crate::equation::NonFiniteResidual;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("derivative {derivative} at x = {x} is too close to zero")]
    DerivativeTooCloseToZero { x: f64, derivative: f64 },

    #[error("maximum iterations reached ({iters}), last estimate x = {last_x}")]
    MaxIterationsReached { iters: usize, last_x: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("non-finite step from x = {x}")]
    NonFiniteStep { x: f64 },

    #[error("stopped by observer after {iters} iterations")]
    StoppedByObserver { iters: usize },
}
