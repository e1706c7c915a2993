//! Time source injected into the arrivals pipeline.

use chrono::{DateTime, Utc};

/// Supplies the current instant.
///
/// Any `Fn() -> DateTime<Utc>` is a clock, which lets tests pin time with a
/// closure.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
