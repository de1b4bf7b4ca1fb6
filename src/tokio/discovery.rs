//! Discover accessories without blocking the async runtime
//!
use std::time::Duration;

use tokio::{task::spawn_blocking, time::timeout as tokio_timeout};

use crate::{
    datatypes::Accessory,
    discovery::{discover_with, Environment, SystemEnvironment},
};

/// Discover accessories on the blocking pool, giving up after `timeout`
pub async fn with_timeout_in<E>(env: E, timeout: Duration) -> Vec<Accessory>
where
    E: Environment + Send + 'static,
{
    match tokio_timeout(timeout, spawn_blocking(move || discover_with(&env))).await {
        Ok(Ok(accessories)) => accessories,
        Ok(Err(err)) => {
            log::warn!("Discovery task failed: {}", err);
            vec![]
        }
        Err(_) => {
            log::warn!("Discovery timed out after {:?}", timeout);
            vec![]
        }
    }
}

/// Discover accessories Control Center knows about
pub async fn with_timeout(timeout: Duration) -> Vec<Accessory> {
    with_timeout_in(SystemEnvironment, timeout).await
}

/// Discover accessories Control Center knows about
///
/// Uses the default timeout of 3 seconds.
pub async fn discover() -> Vec<Accessory> {
    with_timeout(Duration::from_secs(3)).await
}
