use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки обращений к внешнему бэкенду.
pub enum BackendError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Неверные учётные данные при входе.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Аккаунт с таким email уже существует.
    #[error("account already exists")]
    AccountExists,

    /// Пароль не проходит требования бэкенда.
    #[error("password must be at least 6 characters")]
    WeakPassword,

    /// Требуется аутентифицированная сессия.
    #[error("unauthorized")]
    Unauthorized,

    /// Операция запрещена: документ принадлежит другому пользователю.
    #[error("permission denied")]
    PermissionDenied,

    /// Запрошенный документ не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или ошибка валидации.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций бэкенда.
pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Сопоставление машинного кода ошибки из тела ответа с вариантом.
    pub(crate) fn from_error_code(code: &str) -> Option<Self> {
        match code {
            "invalid_credentials" => Some(Self::InvalidCredentials),
            "account_exists" => Some(Self::AccountExists),
            "weak_password" => Some(Self::WeakPassword),
            "permission_denied" => Some(Self::PermissionDenied),
            "not_found" => Some(Self::NotFound),
            _ => None,
        }
    }

    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED => Self::Unauthorized,
            reqwest::StatusCode::FORBIDDEN => Self::PermissionDenied,
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            reqwest::StatusCode::CONFLICT => Self::AccountExists,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
