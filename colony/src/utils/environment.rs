use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether independent work (e.g. ant construction) can run on a thread pool.
    pub parallel: bool,
}

impl Environment {
    /// Creates an instance of `Environment` using a seeded random generator.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Creates an instance of `Environment` which does not log anything.
    pub fn silent(self) -> Self {
        Self { logger: Arc::new(|_| {}), ..self }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|msg| println!("{msg}")), parallel: true }
    }
}
