use log::{Level, log};

use rootfind_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// Log target used for every iteration record.
pub const TARGET: &str = "rootfind::iterations";

/// Writes one log record per solver iteration.
///
/// Never requests an action, so the solver runs exactly as it would with no
/// observer. Records are emitted through the [`log`] facade; install any
/// logger implementation to see them.
///
/// ```rust
/// use rootfind_core::from_fn;
/// use rootfind_observers::LogObserver;
/// use rootfind_solvers::{Config, bisection};
///
/// let f = from_fn(|x: f64| x * x - 2.0);
/// let solution = bisection::solve(
///     &f,
///     [0.0, 2.0],
///     &Config::default(),
///     LogObserver::new("sqrt2"),
/// )?;
/// assert!(solution.is_converged());
/// # Ok::<(), rootfind_solvers::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Debug`].
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Debug,
        }
    }

    /// Sets the level records are written at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn write<E: HasIterate + HasResidual>(&self, event: &E) {
        log!(
            target: TARGET,
            self.level,
            "{}: iter {} x = {:e} residual = {:e}",
            self.label,
            event.iter(),
            event.x(),
            event.residual(),
        );
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.write(event);
        None
    }
}

impl<E, A> Observer<E, A> for &mut LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.write(event);
        None
    }
}
