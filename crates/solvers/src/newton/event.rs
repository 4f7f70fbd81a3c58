/// Event emitted by the Newton solver after each step is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The current iterate.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative value at `x`.
    pub dfx: f64,

    /// The next iterate, `x - fx / dfx`.
    pub x_next: f64,
}

impl Event {
    /// Returns the Newton step taken from `x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.x_next - self.x
    }
}
