// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Configuration module for holded-bridge

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PROJECTS_URL: &str = "https://api.holded.com/api/projects/v1";
pub const DEFAULT_TEAM_URL: &str = "https://api.holded.com/api/team/v1";

/// Holded projects and time tracking bridge for host automation platforms
#[derive(Parser, Debug, Clone)]
#[command(name = "holded-bridge")]
#[command(version)]
#[command(about = "Holded projects and time tracking bridge", long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value = "8090", env = "HOLDED_BRIDGE_PORT")]
    pub port: u16,

    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "HOLDED_BRIDGE_HOST")]
    pub host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "HOLDED_BRIDGE_LOG_LEVEL")]
    pub log_level: String,

    /// Base URL of the Holded projects API
    #[arg(long, default_value = DEFAULT_PROJECTS_URL, env = "HOLDED_PROJECTS_URL")]
    pub projects_url: String,

    /// Base URL of the Holded team API
    #[arg(long, default_value = DEFAULT_TEAM_URL, env = "HOLDED_TEAM_URL")]
    pub team_url: String,

    /// JSON file mapping key names to values, consulted before the environment
    #[arg(long, env = "HOLDED_BRIDGE_KEYS_FILE")]
    pub keys_file: Option<PathBuf>,

    /// Base URL of the host key store
    #[arg(long, env = "HOLDED_BRIDGE_KEY_STORE_URL")]
    pub key_store_url: Option<String>,

    /// Service token attached to registered actions and host calls
    #[arg(long, env = "HOLDED_BRIDGE_SERVICE_TOKEN")]
    pub service_token: Option<String>,

    /// Base URL of the host action/card registry; descriptors are pushed there at startup
    #[arg(long, env = "HOLDED_BRIDGE_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// Prefix prepended to endpoint paths inside descriptors
    #[arg(long, env = "HOLDED_BRIDGE_PUBLIC_URL")]
    pub public_url: Option<String>,
}

impl Config {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Service token, or an empty string when none is configured
    pub fn token(&self) -> String {
        self.service_token.clone().unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        port: 8090,
        host: "127.0.0.1".to_string(),
        log_level: "info".to_string(),
        projects_url: DEFAULT_PROJECTS_URL.to_string(),
        team_url: DEFAULT_TEAM_URL.to_string(),
        keys_file: None,
        key_store_url: None,
        service_token: None,
        registry_url: None,
        public_url: None,
    }
}
