//! Scalar root finding.
//!
//! Two solvers look for `x` such that `f(x) ≈ 0`:
//!
//! - [`equation::bisection`] halves a bracketing interval with a sign change.
//! - [`equation::newton_raphson`] follows a numerically estimated derivative
//!   from an initial guess.
//!
//! Both share the same [`Config`] shape and report failures as explicit
//! error values.

pub mod equation;

pub use equation::{Config, ConfigError, Criterion, Observer, Solution};
