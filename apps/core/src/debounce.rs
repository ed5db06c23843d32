use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(140);

pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug)]
struct Pending<T> {
    due_at: Duration,
    payload: T,
}

/// Holds at most one scheduled payload. Scheduling again replaces the pending
/// payload and restarts the quiet interval.
#[derive(Debug)]
pub struct Debouncer<T, C: Clock = SystemClock> {
    clock: C,
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T, C: Clock> Debouncer<T, C> {
    pub fn new(clock: C, delay: Duration) -> Self {
        Self {
            clock,
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, payload: T) {
        self.pending = Some(Pending {
            due_at: self.clock.now() + self.delay,
            payload,
        });
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn time_until_due(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.due_at.saturating_sub(self.clock.now()))
    }

    /// Takes the payload once its quiet interval has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.due_at <= self.clock.now());
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.payload)
    }

    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }
}
