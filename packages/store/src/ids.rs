//! Time source and record identifier generation.

use chrono::{DateTime, Utc};

use crate::models::RecordId;
use crate::timestamp;

/// Source of "now" for record timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        timestamp::truncate(Utc::now())
    }
}

/// Hands out timestamp-shaped ids (milliseconds since the epoch) that never
/// repeat: each id is the current millisecond or one past the last id issued,
/// whichever is larger.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than `id` (an id read back from storage).
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> RecordId {
        let id = now.timestamp_millis().max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::Clock;

    /// A clock that only moves when told to. Clones share the same time.
    #[derive(Clone, Debug)]
    pub struct ManualClock {
        now: Rc<Cell<DateTime<Utc>>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }
}
