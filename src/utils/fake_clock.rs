use crate::reference_time::{Clock, ClockTrait};
use chrono::Duration;
use parking_lot::Mutex;
use std::sync::Arc;

/// Manually advanced clock for deterministic tests. Clones share the same
/// time so a test can keep a handle while the tracker owns another.
#[derive(Clone, Default)]
pub struct FakeClock {
	now: Arc<Mutex<Duration>>,
}

impl FakeClock {
	pub fn set(&self, now: Duration) {
		*self.now.lock() = now;
	}

	pub fn advance(&self, by: Duration) {
		*self.now.lock() += by;
	}
}

impl ClockTrait for FakeClock {
	fn now(&self) -> Duration {
		*self.now.lock()
	}
}

impl From<FakeClock> for Clock {
	fn from(fake_clock: FakeClock) -> Self {
		Arc::new(fake_clock)
	}
}
