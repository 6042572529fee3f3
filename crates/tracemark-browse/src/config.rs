// crates/tracemark-browse/src/config.rs
//
// Session configuration and its validation. Every error here is fatal to
// session setup: Session::new refuses to construct any mutable state until
// the whole config checks out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tracemark_core::planner::Segment;
use tracemark_core::scale::ScalePolicy;

use crate::commands::SelectMode;

/// How the initial vertical limits are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum VerticalSpec {
    /// Estimate from the first displayed block under this policy.
    Policy(ScalePolicy),
    Fixed { lo: f64, hi: f64 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sampling rate in Hz, shared by every entity in the session.
    pub fs: f64,
    /// Channel indices into the sample source.
    pub channels: Vec<usize>,
    /// Display labels, parallel to `channels`.
    pub channel_labels: Vec<String>,
    /// Artifact type labels; one boolean annotation channel per entry.
    pub artifact_types: Vec<String>,
    /// Original segmentation (trial definitions). For continuous data this
    /// is typically a single entry spanning the recording.
    pub trials: Vec<Segment>,
    /// Treat the recording as one logical trial walked in window steps.
    pub continuous: bool,
    #[serde(default = "default_window")]
    pub window_secs: f64,
    #[serde(default)]
    pub select_mode: SelectMode,
    pub vertical: VerticalSpec,
    /// Dispatch-mode selections forward the full recording instead of only
    /// the active segment.
    #[serde(default)]
    pub dispatch_full_recording: bool,
}

fn default_window() -> f64 {
    1.0
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no channels selected")]
    NoChannels,
    #[error("no trials defined")]
    NoTrials,
    #[error("{labels} channel labels for {channels} selected channels")]
    LabelMismatch { labels: usize, channels: usize },
    #[error("duplicate artifact type `{0}`")]
    DuplicateArtifactType(String),
    #[error("trial {index} has begin {begin} > end {end}")]
    MalformedTrial { index: usize, begin: usize, end: usize },
    #[error("vertical limits lo {lo} must be below hi {hi}")]
    BadVerticalLimits { lo: f64, hi: f64 },
    #[error("sampling rate must be positive and finite, got {0}")]
    BadSamplingRate(f64),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionConfig {
    /// Parse and validate in one step — a config that deserializes but
    /// fails validation never reaches the caller.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fs.is_finite() && self.fs > 0.0) {
            return Err(ConfigError::BadSamplingRate(self.fs));
        }
        if self.channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        if self.trials.is_empty() {
            return Err(ConfigError::NoTrials);
        }
        if self.channel_labels.len() != self.channels.len() {
            return Err(ConfigError::LabelMismatch {
                labels:   self.channel_labels.len(),
                channels: self.channels.len(),
            });
        }
        for (i, ty) in self.artifact_types.iter().enumerate() {
            if self.artifact_types[..i].contains(ty) {
                return Err(ConfigError::DuplicateArtifactType(ty.clone()));
            }
        }
        for (index, t) in self.trials.iter().enumerate() {
            if t.begin > t.end {
                return Err(ConfigError::MalformedTrial {
                    index,
                    begin: t.begin,
                    end:   t.end,
                });
            }
        }
        if let VerticalSpec::Fixed { lo, hi } = self.vertical {
            if !(lo < hi) {
                return Err(ConfigError::BadVerticalLimits { lo, hi });
            }
        }
        Ok(())
    }
}
