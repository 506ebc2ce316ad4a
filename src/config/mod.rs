use secrecy::SecretString;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_BREVO_BASE_URL: &str = "https://api.brevo.com";
const DEFAULT_FOLLOW_UP_LIST_ID: i64 = 2;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let email = EmailConfig::from_env()?;
        if environment == AppEnvironment::Production && email.api_key.is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            email,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Brevo transactional-email settings.
///
/// A missing API key is tolerated outside production; the server then logs
/// deliveries instead of sending them.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub recommendation_template_id: i64,
    pub follow_up_list_id: i64,
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("BREVO_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(SecretString::new);

        let base_url = env::var("BREVO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BREVO_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let recommendation_template_id = match env::var("BREVO_RECOMMENDATION_TEMPLATE_ID") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidTemplateId)?,
            Err(_) => 0,
        };

        let follow_up_list_id = match env::var("BREVO_FOLLOW_UP_LIST_ID") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidListId)?,
            Err(_) => DEFAULT_FOLLOW_UP_LIST_ID,
        };

        Ok(Self {
            api_key,
            base_url,
            recommendation_template_id,
            follow_up_list_id,
        })
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BREVO_BASE_URL.to_string(),
            recommendation_template_id: 0,
            follow_up_list_id: DEFAULT_FOLLOW_UP_LIST_ID,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTemplateId,
    InvalidListId,
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTemplateId => {
                write!(f, "BREVO_RECOMMENDATION_TEMPLATE_ID must be an integer")
            }
            ConfigError::InvalidListId => write!(f, "BREVO_FOLLOW_UP_LIST_ID must be an integer"),
            ConfigError::MissingApiKey => {
                write!(f, "BREVO_API_KEY is required when APP_ENV is production")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTemplateId
            | ConfigError::InvalidListId
            | ConfigError::MissingApiKey => None,
        }
    }
}
