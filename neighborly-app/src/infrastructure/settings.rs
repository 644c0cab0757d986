use anyhow::{Context, Result, anyhow};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
/// Конфигурация приложения, собранная из переменных окружения.
pub struct Settings {
    /// Базовый URL внешнего document-store сервиса.
    pub backend_url: String,
    /// Уровень логирования по умолчанию.
    pub log_level: String,
    /// Таймаут установления соединения, секунды.
    pub connect_timeout_secs: u64,
    /// Таймаут запроса целиком, секунды.
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Читает конфигурацию из окружения; `.env` подхватывает вызывающая
    /// сторона через `dotenvy`.
    pub fn from_env() -> Result<Self> {
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim()
            .to_string();
        if backend_url.is_empty() {
            return Err(anyhow!("BACKEND_URL must not be empty"));
        }

        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        let connect_timeout_secs = parse_u64_env("HTTP_CONNECT_TIMEOUT_SECS", 5)?;
        let request_timeout_secs = parse_u64_env("HTTP_REQUEST_TIMEOUT_SECS", 15)?;

        Ok(Self {
            backend_url,
            log_level,
            connect_timeout_secs,
            request_timeout_secs,
        })
    }
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
