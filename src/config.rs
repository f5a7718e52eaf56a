//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration files (config/default.toml, config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub feed: FeedConfig,
    pub suggestions: SuggestionConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Port number (e.g., 5000)
    pub port: u16,
    /// Single origin allowed by CORS; unset means any origin
    pub allowed_origin: Option<String>,
}

/// In-memory store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Create the demo user and group at startup
    pub seed_demo_data: bool,
}

/// Feed paging
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Page size when the request gives no limit (default: 10)
    pub default_limit: usize,
    /// Largest accepted limit (default: 100)
    pub max_limit: usize,
}

/// Friend suggestion policy settings
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionConfig {
    /// Number of suggestions returned (default: 5)
    pub limit: usize,
    /// Exclusive upper bound of the generated friend count
    pub max_friends_count: u32,
    /// Exclusive upper bound of the generated post count
    pub max_posts_count: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (SOCIALHUB__SECTION__KEY)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("store.seed_demo_data", true)?
            .set_default("feed.default_limit", 10)?
            .set_default("feed.max_limit", 100)?
            .set_default("suggestions.limit", 5)?
            .set_default("suggestions.max_friends_count", 100)?
            .set_default("suggestions.max_posts_count", 50)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (SOCIALHUB__*)
            .add_source(
                Environment::with_prefix("SOCIALHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.feed.default_limit == 0 || self.feed.max_limit == 0 {
            return Err(crate::error::AppError::Config(
                "feed limits must be greater than 0".to_string(),
            ));
        }

        if self.feed.default_limit > self.feed.max_limit {
            return Err(crate::error::AppError::Config(format!(
                "feed.default_limit ({}) must not exceed feed.max_limit ({})",
                self.feed.default_limit, self.feed.max_limit
            )));
        }

        if self.suggestions.limit == 0 {
            return Err(crate::error::AppError::Config(
                "suggestions.limit must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(crate::error::AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        Ok(())
    }
}
