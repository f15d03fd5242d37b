// Web server modules for the ROM launch gateway

pub mod config;
pub mod launcher;
pub mod logger;
pub mod models;
pub mod request_parsing;
pub mod response_helpers;
pub mod routes;

// Re-export commonly used types
pub use config::GatewayConfig;
pub use launcher::LaunchResult;
pub use models::{AppState, SharedState};
