use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.meal.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel mínimo para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
