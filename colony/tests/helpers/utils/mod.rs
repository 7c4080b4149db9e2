use crate::utils::{Environment, Random};
use std::sync::Arc;


pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_seed(0)
}

pub fn create_test_environment_with_seed(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new_with_seed(seed).silent())
}

pub fn create_test_environment_with_random(random: Arc<dyn Random + Send + Sync>) -> Arc<Environment> {
    Arc::new(Environment { random, ..Environment::default().silent() })
}
