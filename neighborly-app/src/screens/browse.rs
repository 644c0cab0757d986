use tracing::warn;

use neighborly_core::{Post, filter_posts};

use crate::client::NeighborlyClient;
use crate::error::BackendResult;

#[derive(Debug, Clone, Copy)]
/// Талон одного запроса списка: эпоха плюс вид индикатора загрузки.
///
/// Результат с устаревшей эпохой отбрасывается, поэтому завершившийся после
/// ухода с экрана (или после более нового запроса) ответ не может затереть
/// актуальный список.
pub struct FetchTicket {
    epoch: u64,
    refreshing: bool,
}

/// Экран полного списка: поиск, фильтр по категории, удаление своих постов.
///
/// На каждый вход в фокус список перечитывается целиком и замещается
/// результатом; отображаемый список — чистая функция исходного списка,
/// строки поиска и выбранной категории.
pub struct BrowseScreen {
    client: NeighborlyClient,
    posts: Vec<Post>,
    epoch: u64,
    /// Строка поиска.
    pub query: String,
    /// Выбранная категория (точное совпадение) или `None`.
    pub category: Option<String>,
    /// Первичная загрузка в полёте.
    pub loading: bool,
    /// Обновление по жесту/кнопке в полёте (отдельный индикатор).
    pub refreshing: bool,
    /// Сообщение последней ошибки.
    pub error: Option<String>,
}

impl BrowseScreen {
    /// Пустой экран; первый фетч запускает оболочка при входе в фокус.
    pub fn new(client: NeighborlyClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            epoch: 0,
            query: String::new(),
            category: None,
            loading: false,
            refreshing: false,
            error: None,
        }
    }

    /// Начало запроса списка: двигает эпоху и включает индикатор.
    pub fn begin_fetch(&mut self, refreshing: bool) -> FetchTicket {
        self.epoch += 1;
        if refreshing {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
        self.error = None;
        FetchTicket {
            epoch: self.epoch,
            refreshing,
        }
    }

    /// Применение результата запроса. Устаревший талон игнорируется.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: BackendResult<Vec<Post>>) {
        if ticket.epoch != self.epoch {
            warn!(
                stale = ticket.epoch,
                current = self.epoch,
                "discarding stale browse fetch"
            );
            return;
        }

        if ticket.refreshing {
            self.refreshing = false;
        } else {
            self.loading = false;
        }

        match result {
            Ok(posts) => self.posts = posts,
            // Список остаётся прежним, показывается только сообщение.
            Err(err) => self.error = Some(format!("Failed to load posts: {err}")),
        }
    }

    /// Полный перезапрос при входе экрана в фокус.
    pub async fn on_focus(&mut self) {
        let ticket = self.begin_fetch(false);
        let result = self.client.browse_posts().await;
        self.apply_fetch(ticket, result);
    }

    /// Pull-to-refresh и кнопка обновления: тот же фетч, другой индикатор.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch(true);
        let result = self.client.browse_posts().await;
        self.apply_fetch(ticket, result);
    }

    /// Полный загруженный список.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Отображаемый список: производная от списка, поиска и категории,
    /// пересчитывается на каждое обращение и нигде не кэшируется.
    pub fn visible_posts(&self) -> Vec<Post> {
        filter_posts(&self.posts, &self.query, self.category.as_deref())
    }

    /// Можно ли предлагать удаление поста текущему пользователю.
    pub async fn can_delete(&self, post: &Post) -> bool {
        let session = self.client.current_session().await;
        post.is_owned_by(session.as_ref())
    }

    /// Удаление поста. Успех перечитывает список; ошибка оставляет список
    /// без изменений и записывает сообщение.
    pub async fn delete_post(&mut self, post: &Post) -> bool {
        let session = self.client.current_session().await;
        if !post.is_owned_by(session.as_ref()) {
            self.error = Some("Only the author can delete this post.".to_string());
            return false;
        }

        match self.client.delete_post(&post.id).await {
            Ok(()) => {
                self.on_focus().await;
                true
            }
            Err(err) => {
                self.error = Some(format!("Could not delete post: {err}"));
                false
            }
        }
    }
}
