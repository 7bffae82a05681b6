mod config;
mod database_config;
mod environment;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "SIGNUP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".signup";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "signup.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 3;
const MIN_QUERY_TIMEOUT_SECS: u64 = 1;
const MAX_QUERY_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;
const MIN_MAX_BODY_BYTES: usize = 1024;
const MAX_MAX_BODY_BYTES: usize = 10 * 1_048_576;
