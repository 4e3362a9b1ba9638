use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use tracing::{info, warn};
use toml;

/// Configuration for the Cartage application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:3000`
    pub listen_addr: String,
    /// Bearer token required for the `/admin` routes
    pub admin_token: Option<String>,
    /// API key for the Google Places API
    pub google_api_key: Option<String>,
    /// Base URL of the Places API (overridable for testing)
    pub places_base_url: String,
    /// Freshness window for cached Google reviews, in minutes
    pub reviews_cache_minutes: u64,
    /// Maximum quote submissions per sender inside the rate window
    pub quote_rate_limit: i64,
    /// Length of the quote rate-limiting window, in minutes
    pub quote_rate_window_minutes: u64,
    /// SMTP relay host; when unset, outbound email is disabled
    pub smtp_host: Option<String>,
    /// SMTP relay port
    pub smtp_port: u16,
    /// Optional SMTP username
    pub smtp_user: Option<String>,
    /// Optional SMTP password
    pub smtp_password: Option<String>,
    /// RFC 5322 "From" address for outbound email
    pub smtp_from: String,
    /// Inbox that receives new-lead notifications
    pub admin_email: String,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub listen_addr: Option<String>,
    #[serde(default)]
    pub admin_token: Option<String>,
    #[serde(default)]
    pub google_api_key: Option<String>,
    #[serde(default)]
    pub places_base_url: Option<String>,
    #[serde(default)]
    pub reviews_cache_minutes: Option<u64>,
    #[serde(default)]
    pub quote_rate_limit: Option<i64>,
    #[serde(default)]
    pub quote_rate_window_minutes: Option<u64>,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default)]
    pub smtp_from: Option<String>,
    #[serde(default)]
    pub admin_email: Option<String>,
}

/// Command line arguments for the application
#[derive(Parser, Debug)]
#[clap(name = "cartage", about = "Content and lead-handling backend for a moving company website")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Listen address for the HTTP server
    #[clap(long, env = "LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    /// Bearer token for the admin routes
    #[clap(long, env = "ADMIN_TOKEN")]
    pub admin_token: Option<String>,

    /// Google Places API key
    #[clap(long, env = "GOOGLE_API_KEY")]
    pub google_api_key: Option<String>,

    /// Freshness window for cached reviews, in minutes
    #[clap(long, env = "REVIEWS_CACHE_MINUTES")]
    pub reviews_cache_minutes: Option<u64>,

    /// SMTP relay host
    #[clap(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port
    #[clap(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub smtp_password: Option<String>,

    /// Sender address for outbound email
    #[clap(long, env = "SMTP_FROM")]
    pub smtp_from: Option<String>,

    /// Inbox that receives new-lead notifications
    #[clap(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// Debug mode
    #[clap(long, env = "CARTAGE_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            listen_addr: update.listen_addr.unwrap_or(self.listen_addr),
            admin_token: update.admin_token.or(self.admin_token),
            google_api_key: update.google_api_key.or(self.google_api_key),
            places_base_url: update.places_base_url.unwrap_or(self.places_base_url),
            reviews_cache_minutes: update.reviews_cache_minutes.unwrap_or(self.reviews_cache_minutes),
            quote_rate_limit: update.quote_rate_limit.unwrap_or(self.quote_rate_limit),
            quote_rate_window_minutes: update.quote_rate_window_minutes.unwrap_or(self.quote_rate_window_minutes),
            smtp_host: update.smtp_host.or(self.smtp_host),
            smtp_port: update.smtp_port.unwrap_or(self.smtp_port),
            smtp_user: update.smtp_user.or(self.smtp_user),
            smtp_password: update.smtp_password.or(self.smtp_password),
            smtp_from: update.smtp_from.unwrap_or(self.smtp_from),
            admin_email: update.admin_email.unwrap_or(self.admin_email),
        }
    }

    /// Returns the reviews cache freshness window as a Duration
    pub fn reviews_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.reviews_cache_minutes * 60)
    }

    /// Returns the quote rate-limiting window as a Duration
    pub fn quote_rate_window(&self) -> Duration {
        Duration::from_secs(self.quote_rate_window_minutes * 60)
    }
}

/// Returns the base (default) configuration
pub fn base_config(config_path: Option<PathBuf>) -> Config {

    let database_url = config_path.map_or("cartage.db".to_string(), |path| path.join("cartage.db").to_string_lossy().to_string());

    Config {
        database_url,
        listen_addr: "127.0.0.1:3000".to_string(),
        admin_token: None,
        google_api_key: None,
        places_base_url: "https://places.googleapis.com".to_string(),
        reviews_cache_minutes: 60,
        quote_rate_limit: 3,
        quote_rate_window_minutes: 60,
        smtp_host: None,
        smtp_port: 587,
        smtp_user: None,
        smtp_password: None,
        smtp_from: "noreply@cartage.example".to_string(),
        admin_email: "office@cartage.example".to_string(),
    }
}

/// Loads configuration from a TOML file
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, String> {
    // if the config path is None, return the default config
    if config_path.is_none() {
            return Ok(ConfigUpdate::default());
        }

    let config_path = config_path.unwrap();

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<ConfigUpdate>(&content) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                Ok(config)
            },
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                Err(format!("Failed to parse config file: {}", e))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            Err(format!("Failed to read config file: {}", e))
        }
    }
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url,
        listen_addr: args.listen_addr,
        admin_token: args.admin_token,
        google_api_key: args.google_api_key,
        places_base_url: None,
        reviews_cache_minutes: args.reviews_cache_minutes,
        quote_rate_limit: None,
        quote_rate_window_minutes: None,
        smtp_host: args.smtp_host,
        smtp_port: args.smtp_port,
        smtp_user: args.smtp_user,
        smtp_password: args.smtp_password,
        smtp_from: args.smtp_from,
        admin_email: args.admin_email,
    }
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: CliArgs) -> Config {
    let mut config_path = match ProjectDirs::from("com", "cartage", "cartage") {
        Some(proj_dirs) => {
            let config_dir = proj_dirs.config_dir();
            let path = PathBuf::from(config_dir);
            Some(path)
        }
        None => {
            warn!("Could not determine XDG config directory, skipping config file");
            None
        }
    };

    config_path = config_path.and_then(|path| {
        if !path.exists() {
            info!("Config path not found at {:?}, using defaults", path);
            None
        } else {
            Some(path)
        }
    });

    let base = base_config(config_path.clone());

    // Apply updates in order of increasing precedence
    let config = base
        .apply_update(config_from_file(config_path.map(|p| p.join("config.toml"))).unwrap_or_default())
        .apply_update(config_from_args(args));

    info!("Final configuration: database_url={}, listen_addr={}, cache={}min",
          config.database_url, config.listen_addr, config.reviews_cache_minutes);

    config
}
