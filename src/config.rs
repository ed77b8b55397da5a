use std::env;

use log::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `MISTRAL_SERVER_HOST` and `MISTRAL_SERVER_PORT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MISTRAL_SERVER_HOST").ok(),
            env::var("MISTRAL_SERVER_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("Invalid MISTRAL_SERVER_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }
}

/// Base URL the client talks to, from `MISTRAL_SERVER_URL`.
pub fn server_url_from_env() -> String {
    env::var("MISTRAL_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}
