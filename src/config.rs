const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BACKEND_URL"), option_env!("ENABLE_LOGGING"))
    }

    fn from_values(backend_url: Option<&str>, enable_logging: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL base de la API (sin barra final)
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_local_api() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.backend_url(), "http://127.0.0.1:8000");
        assert!(config.enable_logging);
    }

    #[test]
    fn strips_trailing_slash_from_backend_url() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), None);
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn bad_logging_flag_keeps_default() {
        let config = AppConfig::from_values(Some(""), Some("talvez"));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert!(config.enable_logging);

        let quiet = AppConfig::from_values(None, Some("false"));
        assert_eq!(quiet.log_level(), log::Level::Error);
    }
}
