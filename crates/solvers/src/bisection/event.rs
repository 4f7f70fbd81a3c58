/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,

    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],

    /// The evaluated midpoint.
    pub x: f64,

    /// Function value at the midpoint.
    pub fx: f64,
}
