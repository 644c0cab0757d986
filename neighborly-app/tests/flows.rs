//! Сквозные сценарии экранов поверх `MemoryBackend`.

use std::sync::Arc;

use neighborly_app::NeighborlyClient;
use neighborly_app::screens::{
    AuthScreen, BrowseScreen, DetailsState, HomeScreen, HomeState, NewPostScreen,
    PostDetailsScreen,
};
use neighborly_app::store::MemoryBackend;
use neighborly_core::{NavStack, NewPostInput, Route};

fn fresh_client() -> NeighborlyClient {
    NeighborlyClient::new(Arc::new(MemoryBackend::new()))
}

async fn sign_up(client: &NeighborlyClient, email: &str) {
    client
        .sign_up(email, "secret1")
        .await
        .expect("sign_up must succeed");
}

async fn create_post(client: &NeighborlyClient, title: &str, category: &str) -> String {
    client
        .create_post(NewPostInput {
            title: title.to_string(),
            category: category.to_string(),
            description: format!("{title} description"),
        })
        .await
        .expect("create_post must succeed")
        .id
}

#[tokio::test]
async fn unauthenticated_new_post_is_blocked_and_nothing_is_written() {
    let client = fresh_client();

    let mut screen = NewPostScreen::new(client.clone());
    screen.title = "Garage sale".to_string();
    screen.category = "Events".to_string();
    screen.description = "Saturday morning".to_string();

    assert!(screen.submit().await.is_none());
    assert!(screen.error.is_some());

    let posts = client.browse_posts().await.expect("browse must succeed");
    assert!(posts.is_empty());
}

#[tokio::test]
async fn searching_an_empty_list_yields_empty_without_error() {
    let client = fresh_client();
    sign_up(&client, "u@example.com").await;

    let mut browse = BrowseScreen::new(client);
    browse.on_focus().await;
    browse.query = "bike".to_string();

    assert!(browse.visible_posts().is_empty());
    assert!(browse.error.is_none());
}

#[tokio::test]
async fn newly_created_post_appears_at_the_head_of_browse() {
    let client = fresh_client();
    sign_up(&client, "u@example.com").await;

    create_post(&client, "Older", "Other").await;
    let newest = create_post(&client, "Community dinner", "Events").await;

    let mut browse = BrowseScreen::new(client);
    browse.on_focus().await;

    let posts = browse.posts();
    assert_eq!(posts[0].id, newest);
    assert_eq!(posts[0].category, "Events");
}

#[tokio::test]
async fn deleted_post_disappears_from_browse_and_details_is_not_found() {
    let client = fresh_client();
    sign_up(&client, "u@example.com").await;
    let id = create_post(&client, "Doomed", "Other").await;

    let mut browse = BrowseScreen::new(client.clone());
    browse.on_focus().await;
    let post = browse.posts()[0].clone();

    assert!(browse.delete_post(&post).await);
    assert!(browse.posts().iter().all(|p| p.id != id));

    let mut details = PostDetailsScreen::new(client, Some(id));
    details.load().await;
    match details.state {
        DetailsState::Error(message) => assert_eq!(message, "Post not found"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[tokio::test]
async fn home_sample_is_min_of_three_and_total() {
    for total in [0usize, 2, 3, 5] {
        let client = fresh_client();
        sign_up(&client, "u@example.com").await;
        for i in 0..total {
            create_post(&client, &format!("Post {i}"), "Other").await;
        }

        let mut home = HomeScreen::new(client);
        home.load().await;

        match home.state {
            HomeState::Loaded(posts) => {
                assert_eq!(posts.len(), total.min(3), "total={total}");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn auth_success_replaces_the_navigation_entry() {
    let client = fresh_client();

    let mut nav = NavStack::new(Route::Auth);
    let mut auth = AuthScreen::new(client);
    auth.toggle_mode();
    auth.email = "u@example.com".to_string();
    auth.password = "secret1".to_string();

    let session = auth.submit().await.expect("sign_up must succeed");
    assert_eq!(session.email, "u@example.com");

    nav.replace(Route::Home);
    assert_eq!(nav.current(), &Route::Home);
    assert!(!nav.pop(), "there is no back entry to Auth");
}

#[tokio::test]
async fn browse_reflects_creation_made_on_another_screen_after_refocus() {
    let client = fresh_client();
    sign_up(&client, "u@example.com").await;

    let mut browse = BrowseScreen::new(client.clone());
    browse.on_focus().await;
    assert!(browse.posts().is_empty());

    // Пользователь ушёл на NewPost и создал пост.
    let mut new_post = NewPostScreen::new(client);
    new_post.title = "Fresh".to_string();
    new_post.category = "Food".to_string();
    new_post.description = "Homemade bread".to_string();
    new_post.submit().await.expect("submit must succeed");

    // Возврат в фокус перечитывает список.
    browse.on_focus().await;
    assert_eq!(browse.posts().len(), 1);
    assert_eq!(browse.posts()[0].title, "Fresh");
}
