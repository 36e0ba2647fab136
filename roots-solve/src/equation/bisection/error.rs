use thiserror::Error;

use crate::equation::NonFiniteResidual;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in interval: f({left})={left_residual}, f({right})={right_residual}")]
    NoRootInInterval {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("maximum iterations reached ({iters}) with bracket [{left}, {right}]")]
    MaxIterationsReached { iters: usize, left: f64, right: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),

    #[error("stopped by observer after {iters} iterations")]
    StoppedByObserver { iters: usize },
}
