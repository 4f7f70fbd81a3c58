//! Recording observer for convergence analysis.

use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasResidual};

/// A single recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Records every iteration a solver reports.
///
/// Pass `&mut History` as the observer so the records can be read after the
/// solve returns. Optionally stops the solver once the residual magnitude
/// drops below a threshold.
///
/// # Example
///
/// ```rust
/// use rootfind_core::from_fn;
/// use rootfind_observers::History;
/// use rootfind_solvers::{Config, newton};
///
/// let f = from_fn(|x: f64| x * x - 2.0);
/// let df = from_fn(|x: f64| 2.0 * x);
///
/// let mut history = History::new();
/// newton::solve(&f, &df, 1.0, &Config::default(), &mut history)?;
///
/// assert_eq!(history.records()[0].x, 1.0);
/// # Ok::<(), rootfind_solvers::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
    stop_below: Option<f64>,
}

impl History {
    /// Creates an empty history that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the solver once `|residual| < threshold`.
    #[must_use]
    pub fn stop_when_residual_below(mut self, threshold: f64) -> Self {
        self.stop_below = Some(threshold);
        self
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn push<E: HasIterate + HasResidual>(&mut self, event: &E) -> bool {
        let residual = event.residual();
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual,
        });
        self.stop_below
            .is_some_and(|threshold| residual.abs() < threshold)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.push(event).then(A::stop_early)
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
