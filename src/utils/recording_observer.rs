use crate::watch::observer::{WatchObserver, WatchObserverTrait};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchEvent {
	Play,
	Pause,
	Ended,
	Error,
}

/// Observer that records every notification, in order. Clones share the same
/// event log.
#[derive(Clone, Default)]
pub struct RecordingObserver {
	events: Arc<Mutex<Vec<WatchEvent>>>,
}

impl RecordingObserver {
	#[must_use]
	pub fn events(&self) -> Vec<WatchEvent> {
		self.events.lock().clone()
	}
}

impl WatchObserverTrait for RecordingObserver {
	fn on_play(&self) {
		self.events.lock().push(WatchEvent::Play);
	}

	fn on_pause(&self) {
		self.events.lock().push(WatchEvent::Pause);
	}

	fn on_ended(&self) {
		self.events.lock().push(WatchEvent::Ended);
	}

	fn on_error(&self) {
		self.events.lock().push(WatchEvent::Error);
	}
}

impl From<RecordingObserver> for WatchObserver {
	fn from(recording_observer: RecordingObserver) -> Self {
		Arc::new(recording_observer)
	}
}
