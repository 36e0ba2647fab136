/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the solve with [`super::Error::StoppedByObserver`].
    StopEarly,
}

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current estimate.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Central-difference derivative estimate at `x`.
    pub derivative: f64,
    /// Estimate the step leads to.
    pub next_x: f64,
}
