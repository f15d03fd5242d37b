// Shared application state

use std::sync::Arc;
use tokio::sync::Mutex;

use super::config::GatewayConfig;

/// State shared across requests.
///
/// `launch_lock` serializes every invocation of the external launcher: at
/// most one launch is in flight at any time. Handlers take it with
/// `.lock().await`; the guard drops on every exit path, so release is
/// guaranteed however the launch ends.
pub struct AppState {
    pub config: GatewayConfig,
    pub launch_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            launch_lock: Mutex::new(()),
        }
    }
}

pub type SharedState = Arc<AppState>;
