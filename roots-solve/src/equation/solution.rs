/// The convergence check that accepted the root estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// The residual magnitude fell below the tolerance.
    Residual,
    /// The bracket width shrank to the tolerance.
    Width,
    /// The step between successive estimates fell below the tolerance.
    Step,
}

/// A converged root estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Root estimate.
    pub x: f64,
    /// Number of completed iterations.
    pub iters: usize,
    /// Which check accepted `x`.
    pub criterion: Criterion,
}
