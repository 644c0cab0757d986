use leptos::prelude::*;
use leptos::task::spawn_local;

use neighborly_core::{Post, Route, category_color, text_color};

use crate::api;
use crate::state::AppState;

#[component]
pub(crate) fn HomeScreen(state: AppState) -> impl IntoView {
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::recent_posts(api::HOME_SAMPLE_LIMIT).await {
                Ok(loaded) => posts.set(loaded),
                Err(err) => error.set(Some(format!("Failed to load posts: {err}"))),
            }
            loading.set(false);
        });
    };
    load();

    view! {
        <Show when=move || loading.get()>
            <p class="muted">"Loading posts..."</p>
        </Show>

        <Show when=move || !loading.get() && error.get().is_some()>
            <div class="center">
                <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                // Повтор — тот же ограниченный запрос, без backoff.
                <button on:click=move |_| load()>"Retry"</button>
                <button on:click=move |_| state.push(Route::Browse)>"Go to Browse Anyway"</button>
            </div>
        </Show>

        <Show when=move || !loading.get() && error.get().is_none()>
            <h2>"Welcome to Neighborly"</h2>
            <p class="muted">"See what's happening nearby"</p>

            <Show when=move || posts.get().is_empty()>
                <p class="muted">"No posts yet. Be the first to add one!"</p>
            </Show>

            <Show when=move || !posts.get().is_empty()>
                <h3>"Recent Posts"</h3>
                <ul class="cards">
                    <For
                        each=move || posts.get()
                        key=|post| post.id.clone()
                        children=move |post| {
                            let background = category_color(&post.category);
                            let color = text_color(background);
                            let id = post.id.clone();
                            view! {
                                <li
                                    class="card"
                                    style=format!("background-color: {background}; color: {color};")
                                    on:click=move |_| {
                                        state.push(Route::PostDetails { id: id.clone() })
                                    }
                                >
                                    <strong>{post.title.clone()}</strong>
                                    <small>{post.category.clone()}</small>
                                    <div>{post.description.clone()}</div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <button on:click=move |_| state.push(Route::Browse)>"Browse All Posts"</button>
        </Show>
    }
}
