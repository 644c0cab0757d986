use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use neighborly_core::Route;

use crate::api;
use crate::state::AppState;
use crate::storage;

#[component]
pub(crate) fn AuthScreen(state: AppState) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_login = RwSignal::new(true);
    let in_progress = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if in_progress.get() {
            return;
        }
        error.set(None);
        in_progress.set(true);

        let email = email.get();
        let password = password.get();
        let login = is_login.get();

        spawn_local(async move {
            let result = if login {
                api::sign_in(&email, &password).await
            } else {
                api::sign_up(&email, &password).await
            };

            match result {
                Ok(session) => {
                    if let Err(err) = storage::save_session(&session) {
                        error.set(Some(err));
                    } else {
                        state.session.set(Some(session));
                        // После входа запись экрана Auth в истории не остаётся.
                        state.replace(Route::Home);
                    }
                }
                // Сообщение ошибки показывается как есть, вид не различается.
                Err(err) => error.set(Some(err.to_string())),
            }
            in_progress.set(false);
        });
    };

    view! {
        <h2>{move || if is_login.get() { "Login" } else { "Sign Up" }}</h2>

        <Show when=move || error.get().is_some()>
            <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
        </Show>

        <form on:submit=on_submit>
            <input
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                placeholder="Password"
                type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || in_progress.get()>
                {move || if is_login.get() { "Login" } else { "Sign Up" }}
            </button>
        </form>

        <button class="link" on:click=move |_| is_login.update(|v| *v = !*v)>
            {move || {
                if is_login.get() {
                    "Need an account? Sign Up"
                } else {
                    "Have an account? Login"
                }
            }}
        </button>
    }
}
