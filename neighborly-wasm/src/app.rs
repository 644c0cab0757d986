use leptos::prelude::*;

use neighborly_core::Route;

use crate::screens::{AuthScreen, BrowseScreen, HomeScreen, NewPostScreen, PostDetailsScreen};
use crate::state::AppState;
use crate::storage;

/// Корневой компонент: восстановление сессии, шапка и стек экранов.
#[component]
pub(crate) fn App() -> impl IntoView {
    let state = AppState::new();

    // Сохранённая сессия пропускает экран входа так же, как свежий вход.
    if let Some(session) = storage::load_session() {
        state.session.set(Some(session));
        state.replace(Route::Home);
    }

    let screen = move || match state.current_route() {
        Route::Auth => view! { <AuthScreen state=state /> }.into_any(),
        Route::Home => view! { <HomeScreen state=state /> }.into_any(),
        Route::Browse => view! { <BrowseScreen state=state /> }.into_any(),
        Route::PostDetails { id } => {
            view! { <PostDetailsScreen state=state id=id /> }.into_any()
        }
        Route::NewPost => view! { <NewPostScreen state=state /> }.into_any(),
    };

    view! {
        <header class="topbar">
            <Show when=move || state.can_go_back()>
                <button class="back" on:click=move |_| state.pop()>"<"</button>
            </Show>
            <h1>{move || state.current_route().title()}</h1>
        </header>
        <main class="screen">{screen}</main>
    }
}
