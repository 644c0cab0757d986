//! Инфраструктура приложения: конфигурация из окружения и логирование.

pub mod logging;
pub mod settings;
