//! Training progress logging.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Verbosity level for training output.
///
/// Levels are ordered: a logger emits every event at or below its level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Errors and warnings only.
    Warning,
    /// Progress and important information.
    Info,
    /// Detailed debugging information.
    Debug,
}

impl Verbosity {
    /// Map a repeated `-v` flag count to a level (0 = warnings only).
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Warning,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            Verbosity::Silent => "off",
            Verbosity::Warning => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Emits training events through `tracing`, gated by [`Verbosity`].
#[derive(Debug, Clone, Copy)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn start_training(&self, n_samples: usize, n_features: usize, n_outputs: usize, lambda: f64) {
        if self.verbosity >= Verbosity::Info {
            info!(n_samples, n_features, n_outputs, lambda, "training ridge model");
        }
    }

    pub fn log_system(&self, size: usize, regularized_diagonal: usize) {
        if self.verbosity >= Verbosity::Debug {
            debug!(size, regularized_diagonal, "assembled normal equations");
        }
    }

    pub fn log_underdetermined(&self, n_samples: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Warning {
            warn!(
                n_samples,
                n_features,
                "fewer samples than features; solution relies on regularization"
            );
        }
    }

    pub fn finish_training(&self, elapsed: Duration) {
        if self.verbosity >= Verbosity::Info {
            info!(elapsed_ms = elapsed.as_millis() as u64, "training finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels_are_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn flag_count_maps_to_level() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Warning);
        assert_eq!(Verbosity::from_count(1), Verbosity::Info);
        assert_eq!(Verbosity::from_count(5), Verbosity::Debug);
        assert_eq!(Verbosity::Debug.as_filter_directive(), "debug");
    }
}
