use chrono::Duration;

/// Fraction of the medium beyond which playback counts as watched.
pub const WATCH_COMPLETION_RATIO: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WatchState {
	/// No playback has been observed yet.
	#[default]
	Initial,
	Playing,
	Paused,
	/// Playback ran to the end of the medium.
	Ended,
	/// Playback failed. Declared for the observer surface; no transition in
	/// this crate currently produces it.
	// TODO: Wire this up once the media session surfaces an explicit error signal.
	Error,
}

/// How far into the medium playback has come. Replaced wholesale on reset,
/// never partially cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WatchStateInfo {
	pub state: WatchState,
	/// Length of the medium, from the most recent position sample.
	pub video_length: Duration,
	/// Extrapolated playback position, always within `[0, video_length]`.
	pub current_position: Duration,
}

impl WatchStateInfo {
	#[must_use]
	pub fn video_watched(&self) -> bool {
		self.watched_beyond(WATCH_COMPLETION_RATIO)
	}

	/// Strictly more than `ratio` of the medium has been played.
	#[must_use]
	pub fn watched_beyond(&self, ratio: f64) -> bool {
		#[allow(clippy::cast_precision_loss)]
		let threshold = self.video_length.num_milliseconds() as f64 * ratio;
		#[allow(clippy::cast_precision_loss)]
		let position = self.current_position.num_milliseconds() as f64;
		position > threshold
	}
}
