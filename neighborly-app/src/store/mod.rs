//! Граница внешнего бэкенда: document-store с контекстом аутентификации.

mod http;
mod memory;

pub use http::HttpBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;
use serde_json::{Map, Value};

use neighborly_core::{Document, Session};

use crate::error::BackendResult;

/// Имя единственной коллекции, с которой работает приложение.
pub const POSTS_COLLECTION: &str = "posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Порядок выдачи при листинге коллекции.
pub enum ListOrder {
    /// Порядок по умолчанию бэкенда, без явных гарантий.
    BackendDefault,
    /// По отметке создания, новые первыми.
    CreatedAtDesc,
}

#[async_trait]
/// Потребляемая поверхность внешнего бэкенда.
///
/// Контекст аутентификации мутабелен и живёт на стороне реализации:
/// `sign_in`/`sign_up` устанавливают текущую сессию, `current_session`
/// возвращает её, истечение сессии — забота самого бэкенда.
pub trait Backend: Send + Sync {
    /// Вход по email и паролю.
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session>;

    /// Создание новой учётной записи.
    async fn sign_up(&self, email: &str, password: &str) -> BackendResult<Session>;

    /// Текущая сессия, если пользователь аутентифицирован.
    async fn current_session(&self) -> Option<Session>;

    /// Полный листинг коллекции в заданном порядке.
    async fn list_documents(
        &self,
        collection: &str,
        order: ListOrder,
    ) -> BackendResult<Vec<Document>>;

    /// Ограниченная выборка из коллекции в порядке по умолчанию бэкенда.
    async fn sample_documents(&self, collection: &str, limit: u32)
    -> BackendResult<Vec<Document>>;

    /// Один документ по идентификатору.
    async fn get_document(&self, collection: &str, id: &str) -> BackendResult<Document>;

    /// Создание документа; бэкенд назначает идентификатор и отметку создания.
    async fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<Document>;

    /// Удаление документа. Разрешено только владельцу.
    async fn delete_document(&self, collection: &str, id: &str) -> BackendResult<()>;
}
