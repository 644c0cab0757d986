use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;
use validator::Validate;

use neighborly_core::{NewPostInput, Post, Session};

use crate::error::{BackendError, BackendResult};
use crate::store::{Backend, ListOrder, POSTS_COLLECTION};

/// Размер подборки последних постов на главном экране.
pub const HOME_SAMPLE_LIMIT: u32 = 3;

#[derive(Clone)]
/// Фасад над бэкендом в терминах постов.
///
/// Конструируется явно и передаётся экранам — глобальных хэндлов бэкенда
/// в приложении нет. Клонирование дешёвое: внутри `Arc`.
pub struct NeighborlyClient {
    backend: Arc<dyn Backend>,
}

impl NeighborlyClient {
    /// Клиент поверх конкретной реализации бэкенда.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Вход по email и паролю.
    pub async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.backend.sign_in(email, password).await
    }

    /// Регистрация новой учётной записи.
    pub async fn sign_up(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.backend.sign_up(email, password).await
    }

    /// Текущая сессия, если она есть.
    pub async fn current_session(&self) -> Option<Session> {
        self.backend.current_session().await
    }

    /// Ограниченная подборка постов для главного экрана, порядок — по
    /// умолчанию бэкенда.
    pub async fn recent_posts(&self, limit: u32) -> BackendResult<Vec<Post>> {
        let documents = self
            .backend
            .sample_documents(POSTS_COLLECTION, limit)
            .await?;
        Ok(documents.iter().map(Post::from_document).collect())
    }

    /// Полный список постов, новые первыми.
    pub async fn browse_posts(&self) -> BackendResult<Vec<Post>> {
        let documents = self
            .backend
            .list_documents(POSTS_COLLECTION, ListOrder::CreatedAtDesc)
            .await?;
        Ok(documents.iter().map(Post::from_document).collect())
    }

    /// Один пост по идентификатору.
    pub async fn get_post(&self, id: &str) -> BackendResult<Post> {
        let document = self.backend.get_document(POSTS_COLLECTION, id).await?;
        Ok(Post::from_document(&document))
    }

    /// Создание поста от имени текущей сессии.
    ///
    /// Форма проверяется до обращения к бэкенду; без сессии вызов блокируется
    /// локально. Email и идентификатор автора денормализуются в документ.
    pub async fn create_post(&self, input: NewPostInput) -> BackendResult<Post> {
        if let Err(err) = input.validate() {
            return Err(BackendError::InvalidRequest(err.to_string()));
        }

        let session = self
            .backend
            .current_session()
            .await
            .ok_or(BackendError::Unauthorized)?;

        let fields: Map<String, Value> = input.into_fields(&session);
        let document = self
            .backend
            .create_document(POSTS_COLLECTION, fields)
            .await?;
        debug!(id = %document.id, "post created");
        Ok(Post::from_document(&document))
    }

    /// Удаление поста. Бэкенд разрешает операцию только владельцу.
    pub async fn delete_post(&self, id: &str) -> BackendResult<()> {
        if self.backend.current_session().await.is_none() {
            return Err(BackendError::Unauthorized);
        }
        self.backend.delete_document(POSTS_COLLECTION, id).await?;
        debug!(id, "post deleted");
        Ok(())
    }
}
