// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the goal tracker service
//!
//! Loads configuration from environment variables (and an optional `.env`
//! file) into structured values, validated once at startup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const DB_HOST: &str = "localhost";
    pub const DB_PORT: u16 = 5432;
    pub const SSL_MODE: &str = "prefer";
    pub const DB_MAX_CONNECTIONS: u32 = 10;
    pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const DATA_PATH: &str = "KO_DATA_PATH";
    pub const DB_USERNAME: &str = "DB_USERNAME";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_PORT: &str = "DB_PORT";
    pub const DB_DBNAME: &str = "DB_DBNAME";
    pub const SSL: &str = "SSL";
    pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
    pub const DB_ACQUIRE_TIMEOUT: &str = "DB_ACQUIRE_TIMEOUT_SECONDS";
}

/// Connection parameters for the goals database
#[derive(Clone)]
pub struct DbConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub ssl_mode: PgSslMode,
}

// Hand-written so the password never reaches the logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

impl DbConfig {
    /// Validates connection parameters
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Database host cannot be empty".to_string());
        }
        if self.username.trim().is_empty() {
            return Err(format!(
                "{} cannot be empty for host '{}'",
                env_vars::DB_USERNAME,
                self.host
            ));
        }
        if self.dbname.trim().is_empty() {
            return Err(format!("{} cannot be empty", env_vars::DB_DBNAME));
        }
        if self.port == 0 {
            return Err("Database port cannot be 0".to_string());
        }
        Ok(())
    }

    /// Builds sqlx connection options from the six parameters
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(self.ssl_mode)
    }
}

/// Connection pool sizing
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: defaults::DB_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(defaults::DB_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub data_path: Option<PathBuf>,
    pub database: DbConfig,
    pub pool: PoolConfig,
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let data_path = lookup(env_vars::DATA_PATH)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        if data_path.is_none() {
            tracing::warn!(
                "{} is not set, static assets will not be served",
                env_vars::DATA_PATH
            );
        }

        let port = match lookup(env_vars::DB_PORT).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::Config(format!("{} '{}' is invalid: {}", env_vars::DB_PORT, raw, e))
            })?,
            None => defaults::DB_PORT,
        };

        let ssl_raw = lookup(env_vars::SSL)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| defaults::SSL_MODE.to_string());
        let ssl_mode = PgSslMode::from_str(&ssl_raw).map_err(|_| {
            AppError::Config(format!("{} '{}' is not a known sslmode", env_vars::SSL, ssl_raw))
        })?;

        let database = DbConfig {
            username: lookup(env_vars::DB_USERNAME).unwrap_or_default(),
            password: lookup(env_vars::DB_PASSWORD).unwrap_or_default(),
            host: lookup(env_vars::DB_HOST)
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| defaults::DB_HOST.to_string()),
            port,
            dbname: lookup(env_vars::DB_DBNAME).unwrap_or_default(),
            ssl_mode,
        };
        database.validate().map_err(AppError::Config)?;

        let max_connections = lookup(env_vars::DB_MAX_CONNECTIONS)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults::DB_MAX_CONNECTIONS);
        let acquire_timeout = lookup(env_vars::DB_ACQUIRE_TIMEOUT)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::DB_ACQUIRE_TIMEOUT_SECS);

        Ok(Config {
            server_addr,
            data_path,
            database,
            pool: PoolConfig {
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout),
            },
        })
    }
}
