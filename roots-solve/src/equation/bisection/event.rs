use super::Bracket;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the solve with [`super::Error::StoppedByObserver`].
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket before this iteration shrinks it.
    pub bracket: &'a Bracket,
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}
