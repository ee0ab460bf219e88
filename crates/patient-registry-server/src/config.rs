//! Environment-driven configuration.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_PATH: &str = "patients.json";

/// Service configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`PATIENT_REGISTRY_ADDR`)
    pub listen_addr: SocketAddr,
    /// Path of the backing JSON file (`PATIENT_REGISTRY_DATA`)
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw_addr =
            env::var("PATIENT_REGISTRY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .with_context(|| format!("invalid listen address: {raw_addr}"))?;

        let data_path = env::var_os("PATIENT_REGISTRY_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            listen_addr,
            data_path,
        })
    }
}
