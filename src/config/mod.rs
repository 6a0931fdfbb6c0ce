use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Session lifetime in days (cookie Max-Age)
    pub session_ttl_days: u32,
    /// Whether the Secure attribute is set on the session cookie
    pub secure_cookies: bool,
    /// Length of generated workspace invite codes
    pub invite_code_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Upper bound for uploaded image payloads
    pub max_image_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Environment presets first, then specific env vars override
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("TEAMSPACE_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SERVER_ENABLE_REQUEST_LOGGING") {
            self.server.enable_request_logging =
                v.parse().unwrap_or(self.server.enable_request_logging);
        }

        if let Ok(v) = env::var("AUTH_COOKIE_NAME") {
            self.auth.cookie_name = v;
        }
        if let Ok(v) = env::var("AUTH_SESSION_TTL_DAYS") {
            self.auth.session_ttl_days = v.parse().unwrap_or(self.auth.session_ttl_days);
        }
        if let Ok(v) = env::var("AUTH_SECURE_COOKIES") {
            self.auth.secure_cookies = v.parse().unwrap_or(self.auth.secure_cookies);
        }
        if let Ok(v) = env::var("AUTH_INVITE_CODE_LENGTH") {
            self.auth.invite_code_length = v.parse().unwrap_or(self.auth.invite_code_length);
        }

        if let Ok(v) = env::var("STORAGE_MAX_IMAGE_BYTES") {
            self.storage.max_image_bytes = v.parse().unwrap_or(self.storage.max_image_bytes);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000, enable_request_logging: true },
            auth: AuthConfig {
                cookie_name: "teamspace_session".to_string(),
                session_ttl_days: 30,
                secure_cookies: false,
                invite_code_length: 7,
            },
            storage: StorageConfig {
                max_image_bytes: 10 * 1024 * 1024, // 10MB
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000, enable_request_logging: true },
            auth: AuthConfig {
                cookie_name: "teamspace_session".to_string(),
                session_ttl_days: 30,
                secure_cookies: true,
                invite_code_length: 7,
            },
            storage: StorageConfig {
                max_image_bytes: 5 * 1024 * 1024, // 5MB
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000, enable_request_logging: false },
            auth: AuthConfig {
                cookie_name: "teamspace_session".to_string(),
                session_ttl_days: 30,
                secure_cookies: true,
                invite_code_length: 7,
            },
            storage: StorageConfig {
                max_image_bytes: 2 * 1024 * 1024, // 2MB
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
