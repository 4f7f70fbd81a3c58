/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, early stopping, or convergence recording.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick(usize);

    #[derive(Debug, PartialEq)]
    enum Halt {
        Now,
    }

    fn drive<Obs: Observer<Tick, Halt>>(mut observer: Obs, ticks: usize) -> Option<usize> {
        for i in 1..=ticks {
            if observer.observe(&Tick(i)).is_some() {
                return Some(i);
            }
        }
        None
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let stopped = drive(
            |tick: &Tick| {
                seen.push(tick.0);
                (tick.0 == 3).then_some(Halt::Now)
            },
            10,
        );

        assert_eq!(stopped, Some(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
