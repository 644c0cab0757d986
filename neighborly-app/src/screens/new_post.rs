use validator::Validate;

use neighborly_core::{NewPostInput, Post};

use crate::client::NeighborlyClient;
use crate::error::BackendError;

/// Экран формы нового поста.
///
/// Все три поля обязательны, сессия обязательна; обе проверки блокируют
/// отправку локально, без обращения к бэкенду. Ошибка создания оставляет
/// форму заполненной для повтора.
pub struct NewPostScreen {
    client: NeighborlyClient,
    /// Заголовок.
    pub title: String,
    /// Категория в свободной форме.
    pub category: String,
    /// Описание.
    pub description: String,
    /// Отправка в полёте: повторная блокируется.
    pub submitting: bool,
    /// Сообщение последней ошибки.
    pub error: Option<String>,
}

impl NewPostScreen {
    /// Пустая форма.
    pub fn new(client: NeighborlyClient) -> Self {
        Self {
            client,
            title: String::new(),
            category: String::new(),
            description: String::new(),
            submitting: false,
            error: None,
        }
    }

    fn input(&self) -> NewPostInput {
        NewPostInput {
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// Отправка формы. `Some(post)` — успех, оболочка показывает
    /// подтверждение и уходит назад; `None` — отправка заблокирована или
    /// провалилась, сообщение в `self.error`.
    pub async fn submit(&mut self) -> Option<Post> {
        if self.submitting {
            return None;
        }
        self.error = None;

        let input = self.input();
        if input.validate().is_err() {
            self.error = Some("Please fill all fields".to_string());
            return None;
        }
        if self.client.current_session().await.is_none() {
            self.error = Some("You must be logged in to post.".to_string());
            return None;
        }

        self.submitting = true;
        let result = self.client.create_post(input).await;
        self.submitting = false;

        match result {
            Ok(post) => Some(post),
            Err(BackendError::Unauthorized) => {
                self.error = Some("You must be logged in to post.".to_string());
                None
            }
            Err(_) => {
                self.error = Some("Failed to create post".to_string());
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

    fn screen_with_client(client: NeighborlyClient) -> NewPostScreen {
        let mut screen = NewPostScreen::new(client);
        screen.title = "Free couch".to_string();
        screen.category = "Housing".to_string();
        screen.description = "Pick up today".to_string();
        screen
    }

    #[tokio::test]
    async fn empty_field_blocks_submission_before_any_backend_call() {
        let client = NeighborlyClient::new(Arc::new(MemoryBackend::new()));
        let mut screen = screen_with_client(client.clone());
        screen.category.clear();

        assert!(screen.submit().await.is_none());
        assert_eq!(screen.error.as_deref(), Some("Please fill all fields"));
    }

    #[tokio::test]
    async fn missing_session_blocks_submission_and_writes_nothing() {
        let client = NeighborlyClient::new(Arc::new(MemoryBackend::new()));
        let mut screen = screen_with_client(client.clone());

        assert!(screen.submit().await.is_none());
        assert_eq!(
            screen.error.as_deref(),
            Some("You must be logged in to post.")
        );

        let posts = client.browse_posts().await.expect("browse must succeed");
        assert!(posts.is_empty(), "no document may be created");
    }

    #[tokio::test]
    async fn successful_submit_returns_the_created_post() {
        let client = NeighborlyClient::new(Arc::new(MemoryBackend::new()));
        client
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        let mut screen = screen_with_client(client);
        let post = screen.submit().await.expect("submit must succeed");

        assert_eq!(post.title, "Free couch");
        assert_eq!(post.author_email, "u@example.com");
        assert!(screen.error.is_none());
        // Форма остаётся заполненной: экран закрывает оболочка.
        assert_eq!(screen.title, "Free couch");
    }
}
