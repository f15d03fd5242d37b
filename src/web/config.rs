// Gateway configuration loaded from a JSON file with sensible defaults

use serde::{Deserialize, Serialize};
use std::fs;

/// Default config location; override with the GATEWAY_CONFIG env var.
const CONFIG_PATH: &str = "assets/gateway.json";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// External launcher executable. Invoked with the ROM identifier as its
    /// sole argument; expected to speak the line protocol on stdout.
    #[serde(default = "default_launcher_path")]
    pub launcher_path: String,

    /// Hard cap on a single launch (spawn + read + wait). The child is
    /// killed when it expires so a hung launcher can't pin the lock forever.
    #[serde(default = "default_launch_timeout_secs")]
    pub launch_timeout_secs: u64,

    /// Scheme used when redirecting to the reported game server address.
    #[serde(default = "default_redirect_scheme")]
    pub redirect_scheme: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_launcher_path() -> String {
    "/var/lib/rom-launch/start_game.py".to_string()
}

fn default_launch_timeout_secs() -> u64 {
    120
}

fn default_redirect_scheme() -> String {
    "http".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            launcher_path: default_launcher_path(),
            launch_timeout_secs: default_launch_timeout_secs(),
            redirect_scheme: default_redirect_scheme(),
        }
    }
}

/// Load configuration from disk, falling back to defaults if the file is
/// missing or unparsable. A parse error is reported but never fatal.
pub fn load_config() -> GatewayConfig {
    let config_path =
        std::env::var("GATEWAY_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());

    match fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str::<GatewayConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to parse config file {config_path}: {e}, using defaults");
                GatewayConfig::default()
            }
        },
        Err(_) => {
            // Config file doesn't exist, use defaults
            GatewayConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.launch_timeout_secs, 120);
        assert_eq!(config.redirect_scheme, "http");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"launcher_path":"/opt/start_game.py"}"#).unwrap();
        assert_eq!(config.launcher_path, "/opt/start_game.py");
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.launch_timeout_secs, 120);
    }

    #[test]
    fn test_full_json() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"listen_addr":"127.0.0.1:9090","launcher_path":"/opt/start_game.py","launch_timeout_secs":30,"redirect_scheme":"https"}"#,
        )
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9090");
        assert_eq!(config.launch_timeout_secs, 30);
        assert_eq!(config.redirect_scheme, "https");
    }
}
