//! This module reimports a common used types.

pub use crate::aco::AntColony;
pub use crate::aco::ColonyConfig;
pub use crate::aco::ColonyError;
pub use crate::aco::ColonySolution;
pub use crate::aco::ColonyStatistics;
pub use crate::aco::IterationProgress;
pub use crate::aco::ProgressObserver;
pub use crate::aco::StartSelection;
pub use crate::aco::TelemetryMode;
pub use crate::aco::TransitionCost;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
