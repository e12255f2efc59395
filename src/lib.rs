//! Watch-state tracking for media playback sessions.
//!
//! [`PlaybackWatchTracker`] consumes the position and controllability
//! callbacks of a media session, keeps an extrapolated playback position and
//! notifies an observer of discrete play/pause/ended transitions.

pub mod configuration;
pub mod reference_time;
pub mod utils;
pub mod watch;

pub use watch::PlaybackWatchTracker;
