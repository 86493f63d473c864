//! Server configuration management.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! A `.env` file, when present, is sourced first so local development does
//! not need exported variables.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::error::{Result, ServerError};

/// Origins the web and mobile front-ends are served from.
pub const DEFAULT_CORS_ORIGINS: [&str; 5] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://localhost:5000",
    "https://paypass-app.vercel.app",
    "https://paypass-app-git-main.vercel.app",
];

/// Which flavour of the backend to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Restricted CORS, status route on `/`, numeric record ids.
    #[default]
    Production,
    /// Permissive CORS, document-style `_id` records, live timestamps.
    Mock,
}

impl FromStr for Profile {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "mock" | "test" => Ok(Self::Mock),
            other => Err(ServerError::config(format!("Unknown profile: {}", other))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Mock => f.write_str("mock"),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub host: IpAddr,
    /// HTTP server port (default: 5000)
    pub port: u16,
    /// Served profile
    pub profile: Profile,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Origins allowed by the production CORS policy
    pub cors_origins: Vec<String>,
    /// Base URL advertised in the startup banner
    pub public_url: Option<String>,
    /// Env file the variables were sourced from, if one was found
    pub env_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 5000,
            profile: Profile::default(),
            log_level: String::from("info"),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            public_url: None,
            env_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment, after sourcing the
    /// env file named by `PAYPASS_ENV_FILE` (default: `.env`).
    ///
    /// # Environment Variables
    /// - `PORT`: HTTP port (default: 5000)
    /// - `PAYPASS_HOST`: bind address (default: 0.0.0.0)
    /// - `PAYPASS_PROFILE`: `production` or `mock` (default: production)
    /// - `PAYPASS_LOG_LEVEL`: logging level
    /// - `PAYPASS_CORS_ORIGINS`: comma-separated allowed origins
    /// - `PAYPASS_PUBLIC_URL`: base URL printed at startup
    pub fn from_env() -> Result<Self> {
        let env_file = env::var("PAYPASS_ENV_FILE").unwrap_or_else(|_| String::from(".env"));
        let loaded = load_env_file(&env_file)?;
        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        if loaded {
            config.env_file = Some(PathBuf::from(env_file));
        }
        Ok(config)
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("PORT") {
            config.port = val
                .trim()
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid port: {}", val)))?;
        }

        if let Some(val) = lookup("PAYPASS_HOST") {
            config.host = val
                .trim()
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid host: {}", val)))?;
        }

        if let Some(val) = lookup("PAYPASS_PROFILE") {
            config.profile = val.parse()?;
        }

        if let Some(val) = lookup("PAYPASS_LOG_LEVEL") {
            config.log_level = val;
        }

        if let Some(val) = lookup("PAYPASS_CORS_ORIGINS") {
            config.cors_origins = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(val) = lookup("PAYPASS_PUBLIC_URL") {
            let val = val.trim().trim_end_matches('/');
            if !val.is_empty() {
                config.public_url = Some(val.to_string());
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.cors_origins.is_empty() {
            return Err(ServerError::config("CORS origin list is empty"));
        }

        for origin in &self.cors_origins {
            HeaderValue::from_str(origin)
                .map_err(|_| ServerError::config(format!("Invalid CORS origin: {}", origin)))?;
        }

        Ok(())
    }

    /// Get the HTTP socket address.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL used when advertising endpoints.
    pub fn base_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

/// Source variables from a dotenv file and report whether it existed.
///
/// A missing file is not an error. Runs before logging is set up, so callers
/// log the outcome themselves.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    dotenv::from_path(path).map_err(|e| {
        ServerError::config(format!("Cannot load env file {:?}: {}", path, e))
    })?;
    Ok(true)
}
