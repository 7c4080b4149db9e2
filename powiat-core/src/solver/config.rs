//! Route solver configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::models::Coordinate;
use crate::simplification::SimplificationConfig;
use colony::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A route solver configuration. Every section is optional.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies ant colony parameters.
    pub colony: Option<AntColonyConfig>,
    /// Specifies graph simplification parameters.
    pub simplification: Option<SimplifierConfig>,
    /// Specifies random and parallelism settings.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies a start location.
    pub start: Option<StartConfig>,
    /// Specifies whether tour legs should be expanded into road paths. Default is false.
    pub expand_path: Option<bool>,
}

/// Ant colony parameters.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AntColonyConfig {
    /// Ants per iteration. Default is 10.
    pub ants: Option<usize>,
    /// Iteration budget. Default is 100.
    pub iterations: Option<usize>,
    /// Pheromone exponent. Default is 1.
    pub alpha: Option<Float>,
    /// Heuristic exponent. Default is 3.
    pub beta: Option<Float>,
    /// Evaporation rate. Default is 0.8.
    pub evaporation_rate: Option<Float>,
    /// A fixed start node index.
    pub start_node_index: Option<usize>,
    /// Initial pheromone. Default is 0.01.
    pub initial_pheromone: Option<Float>,
    /// Deposit factor. Default is 1.
    pub deposit_factor: Option<Float>,
    /// Elite deposit weight. Default is 0.
    pub elite_weight: Option<Float>,
    /// Pheromone floor. Default is 1E-12.
    pub min_pheromone: Option<Float>,
}

#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SimplifierConfig {
    /// Node budget. Default is 500.
    pub max_nodes: Option<usize>,
    /// Junction degree. Default is 3.
    pub junction_degree_threshold: Option<usize>,
}

#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Random seed. If omitted, entropy is used.
    pub seed: Option<u64>,
    /// Specifies whether ants are constructed in parallel. Default is true.
    pub parallel: Option<bool>,
}

#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often (in iterations) the best tour is logged. Default is 10.
    pub log_best: Option<usize>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct StartConfig {
    pub lat: Float,
    pub lon: Float,
}

const LOG_BEST: usize = 10;

/// Reads config from a reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates and validates ant colony config.
pub fn create_colony_config(config: &Option<AntColonyConfig>) -> GenericResult<ColonyConfig> {
    let default = ColonyConfig::default();

    let colony = match config {
        Some(config) => ColonyConfig {
            num_ants: config.ants.unwrap_or(default.num_ants),
            num_iterations: config.iterations.unwrap_or(default.num_iterations),
            alpha: config.alpha.unwrap_or(default.alpha),
            beta: config.beta.unwrap_or(default.beta),
            evaporation_rate: config.evaporation_rate.unwrap_or(default.evaporation_rate),
            initial_pheromone: config.initial_pheromone.unwrap_or(default.initial_pheromone),
            deposit_factor: config.deposit_factor.unwrap_or(default.deposit_factor),
            elite_weight: config.elite_weight.unwrap_or(default.elite_weight),
            min_pheromone: config.min_pheromone.unwrap_or(default.min_pheromone),
            start_index: config.start_node_index,
        },
        None => default,
    };

    colony.validate()?;

    Ok(colony)
}

/// Creates and validates simplification config.
pub fn create_simplification_config(config: &Option<SimplifierConfig>) -> GenericResult<SimplificationConfig> {
    let default = SimplificationConfig::default();

    let simplification = SimplificationConfig {
        max_nodes: config.as_ref().and_then(|config| config.max_nodes).unwrap_or(default.max_nodes),
        junction_degree_threshold: config
            .as_ref()
            .and_then(|config| config.junction_degree_threshold)
            .unwrap_or(default.junction_degree_threshold),
    };

    if simplification.max_nodes < 2 {
        return Err(format!(
            "invalid simplification config: max nodes should be at least 2, got {}",
            simplification.max_nodes
        )
        .into());
    }

    Ok(simplification)
}

/// Creates environment. Logging is enabled unless explicitly disabled in telemetry config.
pub fn create_environment(config: &Option<EnvironmentConfig>, telemetry: &Option<TelemetryConfig>) -> Environment {
    let environment = match config.as_ref().and_then(|config| config.seed) {
        Some(seed) => Environment::new_with_seed(seed),
        None => Environment::default(),
    };

    let environment = match config.as_ref().and_then(|config| config.parallel) {
        Some(parallel) => Environment { parallel, ..environment },
        None => environment,
    };

    if is_logging_enabled(telemetry) { environment } else { environment.silent() }
}

/// Creates telemetry mode which writes to the given logger.
pub fn create_telemetry_mode(config: &Option<TelemetryConfig>, logger: InfoLogger) -> TelemetryMode {
    match config.as_ref().and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled: false, .. }) => TelemetryMode::None,
        Some(LoggingConfig { log_best, .. }) => {
            TelemetryMode::OnlyLogging { logger, log_best: log_best.unwrap_or(LOG_BEST) }
        }
        None => TelemetryMode::OnlyLogging { logger, log_best: LOG_BEST },
    }
}

/// Creates start coordinate.
pub fn create_start(config: &Option<StartConfig>) -> GenericResult<Option<Coordinate>> {
    match config {
        Some(StartConfig { lat, lon }) if !lat.is_finite() || !lon.is_finite() => {
            Err(format!("invalid start coordinate: ({lat}, {lon})").into())
        }
        Some(StartConfig { lat, lon }) => Ok(Some(Coordinate::new(*lat, *lon))),
        None => Ok(None),
    }
}

fn is_logging_enabled(telemetry: &Option<TelemetryConfig>) -> bool {
    telemetry.as_ref().and_then(|config| config.logging.as_ref()).is_none_or(|logging| logging.enabled)
}

