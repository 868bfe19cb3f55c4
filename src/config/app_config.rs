use std::{str::FromStr, time::Duration};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub workspace_grpc_endpoint: String,
    pub workspace_grpc_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: parse_or(std::env::var("PORT").ok(), 8081),
            workspace_grpc_endpoint: std::env::var("WORKSPACE_GRPC_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:50051".to_string()),
            workspace_grpc_timeout: Duration::from_millis(parse_or(
                std::env::var("WORKSPACE_GRPC_TIMEOUT_MS").ok(),
                3000,
            )),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
