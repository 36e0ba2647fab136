//! Solvers for scalar equations, finding `x` where a function crosses zero.
//!
//! The target function is any `FnMut(f64) -> f64`. Its value at `x` is
//! called the residual, and solvers drive it toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`newton_raphson`] — fast local convergence from an initial guess

mod config;
mod evaluate;
mod observe;
mod solution;

pub use config::{Config, ConfigError};
pub use evaluate::{NonFiniteResidual, evaluate};
pub use observe::Observer;
pub use solution::{Criterion, Solution};

pub mod bisection;
pub mod newton_raphson;
