use crate::configuration::Configuration;
use crate::reference_time::Clock;
use crate::watch::observer::WatchObserver;
use crate::watch::playback_state::{WatchState, WatchStateInfo};
use crate::watch::position::MediaPositionSample;
use tracing::debug;

pub mod observer;
pub mod playback_state;
pub mod position;

/// Tracks how much of a media item has been watched, based on the position
/// and controllability callbacks of a media session.
///
/// All methods must be called from the same logical thread, the tracker does
/// no locking of its own.
pub struct PlaybackWatchTracker {
	observer: WatchObserver,
	clock: Clock,
	configuration: Configuration,
	info: WatchStateInfo,
	last_sample: Option<MediaPositionSample>,
	is_controllable: bool,
	is_suspended: bool,
}

impl PlaybackWatchTracker {
	pub fn new(observer: WatchObserver, clock: Clock) -> Self {
		Self::with_configuration(observer, clock, Configuration::default())
	}

	pub fn with_configuration(observer: WatchObserver, clock: Clock, configuration: Configuration) -> Self {
		Self {
			observer,
			clock,
			configuration,
			info: WatchStateInfo::default(),
			last_sample: None,
			is_controllable: false,
			is_suspended: false,
		}
	}

	/// A new position report from the session, or `None` once the session no
	/// longer reports a determinable position.
	pub fn on_position_changed(&mut self, sample: Option<MediaPositionSample>) {
		if let Some(sample) = &sample {
			self.info.video_length = sample.duration;
		}

		// The retained sample decides the transition before it is replaced.
		let next = self.next_state(sample.is_none());
		self.last_sample = sample;
		self.refresh_position();
		self.apply(next);
	}

	/// Session-level flags: controllable means a play/pause surface exists,
	/// suspended means paused while controllable.
	pub fn on_controllability_changed(&mut self, is_controllable: bool, is_suspended: bool) {
		self.is_controllable = is_controllable;
		self.is_suspended = is_suspended;

		let next = self.next_state(false);
		self.refresh_position();
		self.apply(next);
	}

	/// Snapshot of the current watch state, with the position extrapolated
	/// to the current clock reading.
	#[must_use]
	pub fn watch_state_info(&self) -> WatchStateInfo {
		let mut info = self.info;
		if let Some(sample) = &self.last_sample {
			info.current_position = sample.extrapolate(self.clock.now(), self.configuration.snap_to_end_tolerance);
		}
		info
	}

	/// Prepare the tracker for the next media item. Never notifies the
	/// observer; the next update fires whatever transition applies.
	pub fn reset(&mut self) {
		self.last_sample = None;
		self.is_controllable = false;
		self.is_suspended = false;
		self.info = WatchStateInfo::default();
	}

	fn next_state(&self, position_just_cleared: bool) -> WatchState {
		if self.is_controllable {
			return if self.is_suspended {
				WatchState::Paused
			} else {
				WatchState::Playing
			};
		}

		if position_just_cleared {
			return match &self.last_sample {
				None => WatchState::Initial,
				Some(sample) if sample.has_ended(self.clock.now(), self.configuration.snap_to_end_tolerance) => {
					WatchState::Ended
				}
				// Not controllable and not at the end: not enough information
				// to decide, leave the state alone.
				Some(_) => self.info.state,
			};
		}

		self.info.state
	}

	fn refresh_position(&mut self) {
		if let Some(sample) = &self.last_sample {
			self.info.current_position = sample.extrapolate(self.clock.now(), self.configuration.snap_to_end_tolerance);
		}
	}

	fn apply(&mut self, next: WatchState) {
		let previous = self.info.state;
		if previous == next {
			return;
		}

		self.info.state = next;
		debug!("Playback state changed from {previous:?} to {next:?}");
		match next {
			WatchState::Initial => {}
			WatchState::Playing => self.observer.on_play(),
			WatchState::Paused => self.observer.on_pause(),
			WatchState::Ended => self.observer.on_ended(),
			WatchState::Error => self.observer.on_error(),
		}
	}
}
