use tracing::info;

use neighborly_core::Session;

use crate::client::NeighborlyClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Режим экрана аутентификации.
pub enum AuthMode {
    /// Вход с существующими учётными данными.
    SignIn,
    /// Регистрация новой учётной записи.
    SignUp,
}

/// Экран аутентификации: email, пароль и переключатель режима.
///
/// Успех в любом режиме означает переход на Home с заменой текущей записи
/// навигации; провал показывает сообщение ошибки как есть, без различения
/// её вида и без политики повторов.
pub struct AuthScreen {
    client: NeighborlyClient,
    /// Текущий режим.
    pub mode: AuthMode,
    /// Введённый email.
    pub email: String,
    /// Введённый пароль.
    pub password: String,
    /// Операция в полёте: повторная отправка блокируется.
    pub in_progress: bool,
    /// Сообщение последней ошибки.
    pub error: Option<String>,
}

impl AuthScreen {
    /// Экран в режиме входа с пустой формой.
    pub fn new(client: NeighborlyClient) -> Self {
        Self {
            client,
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            in_progress: false,
            error: None,
        }
    }

    /// Переключение между входом и регистрацией.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    /// Отправка формы. `Some(session)` — успех, оболочка выполняет
    /// `replace(Home)`; `None` — ошибка записана в `self.error`.
    pub async fn submit(&mut self) -> Option<Session> {
        if self.in_progress {
            return None;
        }
        self.in_progress = true;
        self.error = None;

        let result = match self.mode {
            AuthMode::SignIn => self.client.sign_in(&self.email, &self.password).await,
            AuthMode::SignUp => self.client.sign_up(&self.email, &self.password).await,
        };
        self.in_progress = false;

        match result {
            Ok(session) => {
                info!(user_id = %session.user_id, "authenticated");
                Some(session)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryBackend;

    fn screen() -> AuthScreen {
        AuthScreen::new(NeighborlyClient::new(Arc::new(MemoryBackend::new())))
    }

    #[tokio::test]
    async fn sign_up_then_sign_in_round_trip() {
        let mut auth = screen();
        auth.toggle_mode();
        assert_eq!(auth.mode, AuthMode::SignUp);

        auth.email = "u@example.com".to_string();
        auth.password = "secret1".to_string();
        let session = auth.submit().await.expect("sign_up must succeed");
        assert_eq!(session.email, "u@example.com");

        auth.toggle_mode();
        let session = auth.submit().await.expect("sign_in must succeed");
        assert_eq!(session.email, "u@example.com");
        assert!(auth.error.is_none());
    }

    #[tokio::test]
    async fn failure_surfaces_the_error_message_verbatim() {
        let mut auth = screen();
        auth.email = "nobody@example.com".to_string();
        auth.password = "secret1".to_string();

        assert!(auth.submit().await.is_none());
        assert_eq!(auth.error.as_deref(), Some("invalid credentials"));
    }

    #[tokio::test]
    async fn weak_password_is_surfaced_like_any_other_error() {
        let mut auth = screen();
        auth.toggle_mode();
        auth.email = "u@example.com".to_string();
        auth.password = "123".to_string();

        assert!(auth.submit().await.is_none());
        assert_eq!(
            auth.error.as_deref(),
            Some("password must be at least 6 characters")
        );
    }
}
