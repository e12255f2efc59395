pub mod fake_clock;
pub mod recording_observer;
