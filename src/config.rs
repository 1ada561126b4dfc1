use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    // Attendance sheet
    pub submission_url: String,
    pub submission_timeout: Duration,

    pub session_file: PathBuf,
    pub data_dir: PathBuf,

    pub log_dir: PathBuf,
    pub log_level: tracing::Level,

    // Rate limiting
    pub rate_clock_per_min: u32,
    pub rate_read_per_min: u32,

    pub api_prefix: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var_or(key, default)
        .parse()
        .with_context(|| format!("{} is not valid", key))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080"),
            submission_url: env::var("SUBMISSION_URL").context("SUBMISSION_URL must be set")?,
            submission_timeout: Duration::from_secs(parse_var("SUBMISSION_TIMEOUT_SECS", "15")?),

            session_file: PathBuf::from(var_or("SESSION_FILE", "state/session.json")),
            data_dir: PathBuf::from(var_or("DATA_DIR", "data")),

            log_dir: PathBuf::from(var_or("LOG_DIR", "logs")),
            log_level: var_or("LOG_LEVEL", "debug")
                .parse()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL is not valid"))?,

            rate_clock_per_min: parse_var("RATE_CLOCK_PER_MIN", "30")?,
            rate_read_per_min: parse_var("RATE_READ_PER_MIN", "600")?,

            api_prefix: var_or("API_PREFIX", "/api"),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            server_addr: "127.0.0.1:0".to_string(),
            submission_url: "http://127.0.0.1:9/exec".to_string(),
            submission_timeout: Duration::from_secs(1),
            session_file: PathBuf::from("session.json"),
            data_dir: PathBuf::from("data"),
            log_dir: PathBuf::from("logs"),
            log_level: tracing::Level::DEBUG,
            rate_clock_per_min: 1000,
            rate_read_per_min: 1000,
            api_prefix: "/api".to_string(),
        }
    }
}
