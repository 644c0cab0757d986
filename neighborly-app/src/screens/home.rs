use neighborly_core::Post;

use crate::client::{HOME_SAMPLE_LIMIT, NeighborlyClient};

#[derive(Debug, Clone)]
/// Наблюдаемое состояние главного экрана.
pub enum HomeState {
    /// Запрос в полёте.
    Loading,
    /// Запрос провалился; доступны ручной повтор и переход в Browse.
    Error(String),
    /// Подборка загружена (возможно пустая).
    Loaded(Vec<Post>),
}

/// Главный экран: ограниченная подборка последних постов.
///
/// Повтор после ошибки — ручной и повторяет тот же ограниченный запрос,
/// без backoff и без предела числа попыток.
pub struct HomeScreen {
    client: NeighborlyClient,
    /// Состояние экрана.
    pub state: HomeState,
}

impl HomeScreen {
    /// Экран в состоянии загрузки; первый `load` выполняет оболочка при
    /// показе экрана.
    pub fn new(client: NeighborlyClient) -> Self {
        Self {
            client,
            state: HomeState::Loading,
        }
    }

    /// Загрузка подборки: не больше [`HOME_SAMPLE_LIMIT`] постов.
    pub async fn load(&mut self) {
        self.state = HomeState::Loading;
        self.state = match self.client.recent_posts(HOME_SAMPLE_LIMIT).await {
            Ok(posts) => HomeState::Loaded(posts),
            Err(err) => HomeState::Error(format!("Failed to load posts: {err}")),
        };
    }

    /// Ручной повтор: тот же запрос ещё раз.
    pub async fn retry(&mut self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use neighborly_core::NewPostInput;
    use crate::store::MemoryBackend;

    async fn client_with_posts(count: usize) -> NeighborlyClient {
        let client = NeighborlyClient::new(Arc::new(MemoryBackend::new()));
        client
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");
        for i in 0..count {
            client
                .create_post(NewPostInput {
                    title: format!("Post {i}"),
                    category: "Other".to_string(),
                    description: "desc".to_string(),
                })
                .await
                .expect("create must succeed");
        }
        client
    }

    #[tokio::test]
    async fn load_returns_at_most_three_posts() {
        let mut home = HomeScreen::new(client_with_posts(5).await);
        home.load().await;

        match &home.state {
            HomeState::Loaded(posts) => assert_eq!(posts.len(), 3),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_returns_all_posts_when_fewer_than_limit() {
        let mut home = HomeScreen::new(client_with_posts(2).await);
        home.load().await;

        match &home.state {
            HomeState::Loaded(posts) => assert_eq!(posts.len(), 2),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_store_loads_into_an_empty_list() {
        let mut home = HomeScreen::new(client_with_posts(0).await);
        home.load().await;

        match &home.state {
            HomeState::Loaded(posts) => assert!(posts.is_empty()),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }
}
