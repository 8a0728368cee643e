//! Command line and environment configuration
//!
//! Every flag can also be set through a `SEDIR_*` variable; a `.env` file in
//! the working directory is loaded before parsing.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use shared::SiteConfig;

use crate::core::EXIT_TRANSITION;
use crate::error::{WebServerError, WebServerResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Social enterprise directory with a live homepage")]
pub struct Args {
    /// Interface to bind
    #[arg(long, env = "SEDIR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, env = "SEDIR_PORT", default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SEDIR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Static files directory
    #[arg(long, env = "SEDIR_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Enterprise listings (JSON array)
    #[arg(long, env = "SEDIR_DIRECTORY", default_value = "./data/directory.json")]
    pub directory: PathBuf,

    /// Root URL the results panel uses for API calls
    #[arg(long, env = "SEDIR_API_ROOT", default_value = SiteConfig::DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Duration of the intro exit transition in milliseconds
    #[arg(long, env = "SEDIR_TRANSITION_MS", default_value_t = EXIT_TRANSITION.as_millis() as u64)]
    pub transition_ms: u64,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_level: String,
    pub static_dir: PathBuf,
    pub directory_path: PathBuf,
    pub site: SiteConfig,
    pub transition: Duration,
}

impl ServerConfig {
    pub fn from_args(args: &Args) -> WebServerResult<Self> {
        let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid bind address {}:{}: {}", args.host, args.port, e)))?;

        let log_level = args.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(WebServerError::config(format!(
                "Invalid log level '{}', expected one of {}",
                args.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        let site = SiteConfig::new(&args.api_root)?;

        Ok(Self {
            bind_address,
            log_level,
            static_dir: args.static_dir.clone(),
            directory_path: args.directory.clone(),
            site,
            transition: Duration::from_millis(args.transition_ms),
        })
    }
}
