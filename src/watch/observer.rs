use std::sync::Arc;

pub type WatchObserver = Arc<dyn WatchObserverTrait + Send + Sync>;

/// Edge-triggered playback notifications. Exactly one method is invoked per
/// observed state change, synchronously within the triggering update.
pub trait WatchObserverTrait {
	fn on_play(&self);
	fn on_pause(&self);
	fn on_ended(&self);
	fn on_error(&self);
}
