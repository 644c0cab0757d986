use leptos::prelude::*;
use leptos::task::spawn_local;

use neighborly_core::{Post, category_color, text_color};

use crate::api;
use crate::state::AppState;

#[component]
pub(crate) fn PostDetailsScreen(state: AppState, id: String) -> impl IntoView {
    let post = RwSignal::new(None::<Post>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    if id.is_empty() {
        loading.set(false);
        error.set(Some("Invalid post ID".to_string()));
    } else {
        let id = id.clone();
        spawn_local(async move {
            match api::get_post(&id).await {
                Ok(loaded) => post.set(Some(loaded)),
                Err(err) if err.is_not_found() => {
                    error.set(Some("Post not found".to_string()));
                }
                Err(_) => error.set(Some("Failed to load post. Please try again.".to_string())),
            }
            loading.set(false);
        });
    }

    // Удаление предлагается только владельцу; без сессии — никогда.
    let can_delete = move || match post.get() {
        Some(post) => post.is_owned_by(state.session.get().as_ref()),
        None => false,
    };

    let on_delete = move |_| {
        if deleting.get() {
            return;
        }
        let Some(current) = post.get_untracked() else {
            return;
        };
        let Some(session) = state.session.get_untracked() else {
            return;
        };

        deleting.set(true);
        delete_error.set(None);
        spawn_local(async move {
            match api::delete_post(&session, &current.id).await {
                Ok(()) => state.pop(),
                Err(err) => delete_error.set(Some(format!("Could not delete post: {err}"))),
            }
            deleting.set(false);
        });
    };

    view! {
        <Show when=move || loading.get()>
            <p class="muted">"Loading post..."</p>
        </Show>

        <Show when=move || error.get().is_some()>
            <div class="center">
                <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                <button on:click=move |_| state.pop()>"Back"</button>
            </div>
        </Show>

        <Show when=move || post.get().is_some()>
            {move || {
                post.get()
                    .map(|post| {
                        let background = category_color(&post.category);
                        let color = text_color(background);
                        let created = post
                            .created_at
                            .map(|ts| ts.to_string())
                            .unwrap_or_default();
                        view! {
                            <article
                                class="card details"
                                style=format!("background-color: {background}; color: {color};")
                            >
                                <h2>{post.title.clone()}</h2>
                                <span class="chip">{post.category.clone()}</span>
                                <p>{post.description.clone()}</p>
                                <small>{format!("Posted by {}", post.author_email)}</small>
                                <small>{created}</small>

                                <Show when=can_delete>
                                    <button
                                        class="danger"
                                        disabled=move || deleting.get()
                                        on:click=on_delete
                                    >
                                        "Delete Post"
                                    </button>
                                </Show>

                                <Show when=move || delete_error.get().is_some()>
                                    <p class="error-text">
                                        {move || delete_error.get().unwrap_or_default()}
                                    </p>
                                </Show>
                            </article>
                        }
                    })
            }}
        </Show>
    }
}
