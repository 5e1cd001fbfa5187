use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;
use crate::logging::LogLevel;
use crate::store::{StorageMedium, json::STORAGE_PATH};

#[derive(Parser, Debug, Clone)]
#[command(name = "rolodex-web", version, about = "Simple Contact Book served over HTTP")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "ROLODEX_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path of the JSON contact file
    #[arg(long, env = "CONTACTS_PATH", default_value = STORAGE_PATH)]
    pub data_path: PathBuf,

    /// Storage choice (json, mem) are available
    #[arg(long = "storage", env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "ROLODEX_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn storage_medium(&self) -> Result<StorageMedium, AppError> {
        StorageMedium::from(&self.storage_choice)
    }

    pub fn log_level(&self) -> Result<LogLevel, AppError> {
        LogLevel::parse(&self.log_level).ok_or_else(|| {
            AppError::Config(format!(
                "'{}' is not a recognized log level (trace, debug, info, warn, error)",
                self.log_level
            ))
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("bad listen address {}: {}", self.host, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() -> Result<(), AppError> {
        let cli = Cli::try_parse_from([
            "rolodex-web",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--storage",
            "mem",
            "--data-path",
            "/tmp/book.json",
        ])
        .unwrap();

        assert_eq!(cli.bind_addr()?, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cli.storage_medium()?, StorageMedium::Mem);
        assert_eq!(cli.data_path, PathBuf::from("/tmp/book.json"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() -> Result<(), AppError> {
        let cli = Cli::try_parse_from(["rolodex-web", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(cli.log_level()?, LogLevel::Debug);

        let cli = Cli::try_parse_from(["rolodex-web", "--log-level", "verbose"]).unwrap();
        assert!(matches!(cli.log_level(), Err(AppError::Config(_))));
        Ok(())
    }

    #[test]
    fn rejects_bad_host() {
        let cli = Cli::try_parse_from(["rolodex-web", "--host", "not a host"]).unwrap();

        assert!(matches!(cli.bind_addr(), Err(AppError::Config(_))));
    }
}
