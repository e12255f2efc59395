use chrono::Duration;
use std::sync::Arc;
use std::time::Instant;

pub type Clock = Arc<dyn ClockTrait + Send + Sync>;

/// Source of "now" for position extrapolation. All timestamps handed to the
/// tracker must come from the same clock.
pub trait ClockTrait {
	/// Time elapsed since the clock's reference point.
	fn now(&self) -> Duration;
}

#[derive(Clone, Copy)]
pub struct ReferenceTimer(Instant);

impl ClockTrait for ReferenceTimer {
	fn now(&self) -> Duration {
		Duration::from_std(self.0.elapsed())
			.expect("More elapsed time than chrono can represent. This shouldn't happen unless the process was running for about 292 million years.")
	}
}

impl Default for ReferenceTimer {
	fn default() -> Self {
		Self(Instant::now())
	}
}

impl From<ReferenceTimer> for Clock {
	fn from(reference_timer: ReferenceTimer) -> Self {
		Arc::new(reference_timer)
	}
}
