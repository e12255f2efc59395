use crate::watch::playback_state::WATCH_COMPLETION_RATIO;
use crate::watch::position::SNAP_TO_END_TOLERANCE;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Tunables of the watch tracker. Embedding applications can merge these
/// keys into their own TOML configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
	/// Positions this close to the end of the medium are reported as the end.
	#[serde(with = "humantime_serde")]
	pub snap_to_end_tolerance: Duration,
	/// Fraction of the medium beyond which playback counts as watched.
	pub watch_completion_ratio: f64,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			snap_to_end_tolerance: SNAP_TO_END_TOLERANCE,
			watch_completion_ratio: WATCH_COMPLETION_RATIO,
		}
	}
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}
