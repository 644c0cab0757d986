use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::category::FALLBACK_CATEGORY;
use crate::document::Document;

/// Заголовок по умолчанию для документа без поля `title`.
pub const FALLBACK_TITLE: &str = "Untitled";
/// Описание по умолчанию для документа без поля `description`.
pub const FALLBACK_DESCRIPTION: &str = "No description";

const FALLBACK_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Пост доски объявлений.
pub struct Post {
    /// Идентификатор документа, назначенный бэкендом.
    pub id: String,
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Категория. Хранится как произвольная строка; членство в фиксированном
    /// наборе на записи не проверяется.
    pub category: String,
    /// Серверная отметка создания (UTC), только для отображения и сортировки.
    pub created_at: Option<DateTime<Utc>>,
    /// Email автора, денормализованный на момент создания.
    pub author_email: String,
    /// Идентификатор владельца; им ограничено удаление. `None` у старых
    /// документов, записанных без этого поля.
    pub owner_id: Option<String>,
}

impl Post {
    /// Собирает пост из документа коллекции `posts`, подставляя значения по
    /// умолчанию вместо отсутствующих или пустых полей.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc
                .str_field("title")
                .unwrap_or(FALLBACK_TITLE)
                .to_string(),
            description: doc
                .str_field("description")
                .unwrap_or(FALLBACK_DESCRIPTION)
                .to_string(),
            category: doc
                .str_field("category")
                .unwrap_or(FALLBACK_CATEGORY)
                .to_string(),
            created_at: doc.created_at,
            author_email: doc
                .str_field("author_email")
                .unwrap_or(FALLBACK_AUTHOR)
                .to_string(),
            owner_id: doc.str_field("owner_id").map(str::to_string),
        }
    }

    /// Является ли пользователь сессии владельцем поста.
    ///
    /// Без сессии и без записанного владельца ответ всегда `false`.
    pub fn is_owned_by(&self, session: Option<&Session>) -> bool {
        match (session, self.owner_id.as_deref()) {
            (Some(session), Some(owner_id)) => session.user_id == owner_id,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Аутентифицированная сессия: идентичность текущего пользователя.
pub struct Session {
    /// Уникальный идентификатор пользователя.
    pub user_id: String,
    /// Email пользователя.
    pub email: String,
    /// Токен доступа для защищённых операций бэкенда.
    pub token: String,
}

#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
/// Заполненная форма нового поста.
///
/// Все три поля обязательны; проверка выполняется до обращения к бэкенду.
pub struct NewPostInput {
    /// Заголовок.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Категория в свободной форме (фиксированным набором не ограничена).
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    /// Описание.
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl NewPostInput {
    /// Поля документа для создания: форма плюс денормализованные данные
    /// автора. Отметку создания назначает бэкенд.
    pub fn into_fields(self, session: &Session) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(self.title));
        fields.insert("description".to_string(), Value::String(self.description));
        fields.insert("category".to_string(), Value::String(self.category));
        fields.insert(
            "author_email".to_string(),
            Value::String(session.email.clone()),
        );
        fields.insert(
            "owner_id".to_string(),
            Value::String(session.user_id.clone()),
        );
        fields
    }
}
