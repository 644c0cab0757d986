use leptos::prelude::*;
use leptos::task::spawn_local;

use neighborly_core::{Category, Post, Route, category_color, filter_posts, text_color};

use crate::api;
use crate::state::AppState;

#[component]
pub(crate) fn BrowseScreen(state: AppState) -> impl IntoView {
    let posts = RwSignal::new(Vec::<Post>::new());
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let refreshing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // Fetch-эпоха: результат, догнавший экран после более нового запроса,
    // отбрасывается.
    let epoch = RwSignal::new(0u64);

    let fetch = move |with_refresh_indicator: bool| {
        let ticket = epoch.get_untracked() + 1;
        epoch.set(ticket);
        if with_refresh_indicator {
            refreshing.set(true);
        } else {
            loading.set(true);
        }
        error.set(None);

        spawn_local(async move {
            let result = api::browse_posts().await;
            if epoch.get_untracked() != ticket {
                return;
            }

            match result {
                Ok(loaded) => posts.set(loaded),
                Err(err) => error.set(Some(format!("Failed to load posts: {err}"))),
            }
            if with_refresh_indicator {
                refreshing.set(false);
            } else {
                loading.set(false);
            }
        });
    };
    // Компонент пересоздаётся на каждый вход маршрута в фокус, так что это и
    // есть перечитывание списка после возврата с другого экрана.
    fetch(false);

    let on_delete = move |post: Post| {
        spawn_local(async move {
            let Some(session) = state.session.get_untracked() else {
                error.set(Some("You must be logged in to delete posts.".to_string()));
                return;
            };
            match api::delete_post(&session, &post.id).await {
                Ok(()) => fetch(false),
                // Список остаётся прежним.
                Err(err) => error.set(Some(format!("Could not delete post: {err}"))),
            }
        });
    };

    // Отображаемый список — чистая функция списка, поиска и категории.
    let visible = move || filter_posts(&posts.get(), &query.get(), category.get().as_deref());

    view! {
        <div class="toolbar">
            <input
                class="search"
                placeholder="Search posts..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button disabled=move || refreshing.get() on:click=move |_| fetch(true)>
                {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
            </button>
        </div>

        <div class="chips">
            <button
                class:active=move || category.get().is_none()
                on:click=move |_| category.set(None)
            >
                "All"
            </button>
            {Category::ALL
                .into_iter()
                .map(|item| {
                    let label = item.label();
                    view! {
                        <button
                            class:active=move || category.get().as_deref() == Some(label)
                            on:click=move |_| category.set(Some(label.to_string()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <Show when=move || error.get().is_some()>
            <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
        </Show>

        <Show when=move || loading.get()>
            <p class="muted">"Loading posts..."</p>
        </Show>

        <ul class="cards">
            <For
                each=visible
                key=|post| post.id.clone()
                children=move |post| {
                    let id = post.id.clone();
                    let owned = {
                        let post = post.clone();
                        move || post.is_owned_by(state.session.get().as_ref())
                    };
                    let post_for_delete = post.clone();
                    let created = post
                        .created_at
                        .map(|ts| format!(" • {ts}"))
                        .unwrap_or_default();
                    // Та же палитра категорий, что на Home и в деталях.
                    let background = category_color(&post.category);
                    let color = text_color(background);
                    view! {
                        <li
                            class="card"
                            style=format!("background-color: {background}; color: {color};")
                        >
                            <div on:click=move |_| {
                                state.push(Route::PostDetails { id: id.clone() })
                            }>
                                <strong>{post.title.clone()}</strong>
                                <small>{post.category.clone()}</small>
                                <div>{post.description.clone()}</div>
                                <small class="muted">
                                    {format!("By {}{created}", post.author_email)}
                                </small>
                            </div>
                            <Show when=owned.clone()>
                                <button
                                    class="danger"
                                    on:click={
                                        let post = post_for_delete.clone();
                                        move |_| on_delete(post.clone())
                                    }
                                >
                                    "Delete"
                                </button>
                            </Show>
                        </li>
                    }
                }
            />
        </ul>

        <button class="fab" on:click=move |_| state.push(Route::NewPost)>"+ New Post"</button>
    }
}
