use thiserror::Error;

/// Configuration shared by the equation solvers.
///
/// The tolerance is used for every convergence check a solver makes,
/// and `max_iters` bounds the number of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tol must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    /// Tolerance of `1e-6` and at most 100 iterations.
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance(tol));
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { tol, max_iters })
    }

    /// Returns a copy of this config with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive.
    pub fn with_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Self::new(tol, self.max_iters)
    }

    /// Returns a copy of this config with a different iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        Self::new(self.tol, max_iters)
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
