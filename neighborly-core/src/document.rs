use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Документ внешнего document-store: непрозрачный id, серверная отметка
/// создания и произвольный набор полей.
///
/// Приложение работает только с коллекцией `posts`, но сам тип ничего про
/// посты не знает — интерпретация полей лежит на [`crate::Post`].
pub struct Document {
    /// Идентификатор, назначенный бэкендом при создании. Неизменяемый.
    pub id: String,
    /// Серверная отметка создания (UTC). `None` для документов, записанных
    /// до того, как бэкенд начал её проставлять.
    pub created_at: Option<DateTime<Utc>>,
    /// Поля документа в свободной форме.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Строковое поле документа или `None`, если поле отсутствует,
    /// не строковое или пустое.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}
