use neighborly_core::Post;

use crate::client::NeighborlyClient;
use crate::error::BackendError;

#[derive(Debug, Clone)]
/// Наблюдаемое состояние экрана деталей поста.
pub enum DetailsState {
    /// Документ запрашивается.
    Loading,
    /// Терминальная ошибка экрана; доступен только возврат назад.
    Error(String),
    /// Пост загружен. `can_delete` — пользователь сессии владеет постом.
    Loaded {
        /// Загруженный пост.
        post: Post,
        /// Предлагать ли действие удаления.
        can_delete: bool,
    },
}

/// Экран деталей: один документ по идентификатору из параметров маршрута.
///
/// Удаление предлагается тогда и только тогда, когда идентификатор
/// пользователя сессии совпадает с владельцем поста; без сессии — никогда.
pub struct PostDetailsScreen {
    client: NeighborlyClient,
    id: Option<String>,
    /// Состояние экрана.
    pub state: DetailsState,
    /// Удаление в полёте: повторный вызов блокируется.
    pub deleting: bool,
    /// Ошибка неудавшегося удаления; экран остаётся в `Loaded`.
    pub delete_error: Option<String>,
}

impl PostDetailsScreen {
    /// Экран для идентификатора из параметров навигации; `None` — параметр
    /// отсутствовал или был пуст.
    pub fn new(client: NeighborlyClient, id: Option<String>) -> Self {
        let id = id.filter(|id| !id.is_empty());
        Self {
            client,
            id,
            state: DetailsState::Loading,
            deleting: false,
            delete_error: None,
        }
    }

    /// Загрузка документа и вычисление права на удаление.
    pub async fn load(&mut self) {
        let Some(id) = self.id.clone() else {
            self.state = DetailsState::Error("Invalid post ID".to_string());
            return;
        };

        self.state = DetailsState::Loading;
        self.state = match self.client.get_post(&id).await {
            Ok(post) => {
                let session = self.client.current_session().await;
                let can_delete = post.is_owned_by(session.as_ref());
                DetailsState::Loaded { post, can_delete }
            }
            Err(BackendError::NotFound) => DetailsState::Error("Post not found".to_string()),
            Err(_) => DetailsState::Error("Failed to load post. Please try again.".to_string()),
        };
    }

    /// Удаление поста владельцем. `true` — успех, оболочка уходит назад;
    /// `false` — экран остаётся на месте, ошибка в `delete_error`.
    pub async fn delete(&mut self) -> bool {
        if self.deleting {
            return false;
        }
        let DetailsState::Loaded { post, can_delete } = &self.state else {
            return false;
        };
        if !can_delete {
            return false;
        }

        self.deleting = true;
        self.delete_error = None;
        let result = self.client.delete_post(&post.id).await;
        self.deleting = false;

        match result {
            Ok(()) => true,
            Err(err) => {
                self.delete_error = Some(format!("Could not delete post: {err}"));
                false
            }
        }
    }
}
