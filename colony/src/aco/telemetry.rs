//! A module which provides the logic to report ant colony progress.

#[cfg(test)]
#[path = "../../tests/unit/aco/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger, Timer};
use std::sync::Arc;

/// Keeps information about a finished iteration.
#[derive(Clone, Debug)]
pub struct IterationProgress {
    /// Iteration sequence number, starting from 1.
    pub iteration: usize,
    /// Iteration budget.
    pub total: usize,
    /// Distance of the best tour found so far.
    pub best_distance: Option<Float>,
    /// True if a new best tour was found on this iteration.
    pub is_improvement: bool,
    /// Amount of ants which failed to build a complete tour on this iteration.
    pub failed_ants: usize,
}

/// An observer type which is called after each iteration.
pub type ProgressObserver = Arc<dyn Fn(&IterationProgress) + Send + Sync>;

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in iterations) the best tour is logged.
        log_best: usize,
    },
    /// Only progress observing.
    OnlyObserver {
        /// A progress observer.
        observer: ProgressObserver,
    },
    /// Both logging and progress observing.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in iterations) the best tour is logged.
        log_best: usize,
        /// A progress observer.
        observer: ProgressObserver,
    },
}

/// Provides way to report iteration progress and write information into log.
pub(crate) struct Telemetry {
    mode: TelemetryMode,
    timer: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, timer: Timer::start() }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.timer = Timer::start();
    }

    /// Returns elapsed time since telemetry was started.
    pub fn elapsed_millis(&self) -> u128 {
        self.timer.elapsed_millis()
    }

    /// Reports iteration progress.
    pub fn on_iteration(&self, progress: &IterationProgress) {
        let (logger, log_best, observer) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { logger, log_best } => (Some(logger), *log_best, None),
            TelemetryMode::OnlyObserver { observer } => (None, usize::MAX, Some(observer)),
            TelemetryMode::All { logger, log_best, observer } => (Some(logger), *log_best, Some(observer)),
        };

        if let Some(logger) = logger {
            let should_log_best = progress.iteration % log_best.max(1) == 0;

            if progress.is_improvement || should_log_best {
                let best = progress.best_distance.map_or_else(|| "none".to_string(), |best| format!("{best:.2}"));

                (logger)(&format!(
                    "[{}s] iteration {}/{}: best distance {}{}, failed ants: {}",
                    self.timer.elapsed_secs(),
                    progress.iteration,
                    progress.total,
                    best,
                    if progress.is_improvement { " (improved)" } else { "" },
                    progress.failed_ants
                ));
            }
        }

        if let Some(observer) = observer {
            (observer)(progress);
        }
    }

    /// Writes a message into the log.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}
