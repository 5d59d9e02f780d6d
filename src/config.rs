//! Startup Configuration
//!
//! Reads all tunables from environment variables once at process start.
//! Every value has a default so the service comes up with no environment
//! at all; the only hard failure is an unparseable bind address.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub dataset_csv: PathBuf,
    pub system_prompt_path: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("BIND", "127.0.0.1:8000")
            .parse()
            .context("BIND must be an addr:port pair")?;

        Ok(Self {
            bind_addr,
            dataset_csv: PathBuf::from(env_string("DATASET_CSV", "SB_publication_PMC.csv")),
            system_prompt_path: PathBuf::from(env_string("SYS_PROMPT_PATH", "sys_prompt.json")),
            gemini_api_key: env_optional("GEMINI_API_KEY"),
            gemini_base_url: env_string(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com",
            ),
            gemini_model: env_string("GEMINI_MODEL", "gemini-2.5-flash"),
            static_dir: env_optional("STATIC_DIR").map(PathBuf::from),
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
