use chrono::Duration;
use typed_builder::TypedBuilder;

/// Positions this close to the end of the medium are reported as the end,
/// inclusive. Absorbs rounding and measurement jitter near the end of
/// playback.
pub const SNAP_TO_END_TOLERANCE: std::time::Duration = std::time::Duration::from_millis(100);

/// Snapshot of where playback stood as of a specific reference-clock time.
/// Immutable once taken; the tracker retains at most one at a time.
#[derive(Clone, Copy, Debug, PartialEq, TypedBuilder)]
pub struct MediaPositionSample {
	pub duration: Duration,
	pub position: Duration,
	#[builder(default = 1.0)]
	pub playback_rate: f64,
	/// Reference-clock time at which `position` was measured.
	pub last_updated: Duration,
}

impl MediaPositionSample {
	/// Where playback would be at `now`, assuming it kept advancing at
	/// `playback_rate` since the sample was taken. Clamped to
	/// `[0, duration]`, with positions within `snap_tolerance` of the end
	/// reported as the end.
	#[must_use]
	pub fn extrapolate(&self, now: Duration, snap_tolerance: std::time::Duration) -> Duration {
		let elapsed = now - self.last_updated;
		#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
		let advanced = Duration::milliseconds((elapsed.num_milliseconds() as f64 * self.playback_rate) as i64);

		let position = (self.position + advanced).max(Duration::zero()).min(self.duration);

		let remaining = self.duration - position;
		if u128::from(remaining.num_milliseconds().unsigned_abs()) <= snap_tolerance.as_millis() {
			self.duration
		} else {
			position
		}
	}

	/// Whether playback had already run to the end of the medium as of `now`.
	pub(crate) fn has_ended(&self, now: Duration, snap_tolerance: std::time::Duration) -> bool {
		self.extrapolate(now, snap_tolerance) == self.duration
	}
}
