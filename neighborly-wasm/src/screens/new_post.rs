use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use validator::Validate;

use neighborly_core::{Category, NewPostInput};

use crate::api;
use crate::state::AppState;

#[component]
pub(crate) fn NewPostScreen(state: AppState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let input = NewPostInput {
            title: title.get(),
            category: category.get(),
            description: description.get(),
        };
        if input.validate().is_err() {
            error.set(Some("Please fill all fields".to_string()));
            return;
        }
        let Some(session) = state.session.get_untracked() else {
            error.set(Some("You must be logged in to post.".to_string()));
            return;
        };

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let fields = input.into_fields(&session);
            match api::create_post(&session, fields).await {
                // Возврат на предыдущий экран; его список перечитается сам.
                Ok(_) => state.pop(),
                Err(_) => {
                    error.set(Some("Failed to create post".to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <h2>"New Post"</h2>

        <Show when=move || error.get().is_some()>
            <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
        </Show>

        <form on:submit=on_submit>
            <input
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <select
                prop:value=move || category.get()
                on:change=move |ev| category.set(event_target_value(&ev))
            >
                <option value="">"Select a category"</option>
                {Category::ALL
                    .into_iter()
                    .map(|item| {
                        let label = item.label();
                        view! { <option value=label>{label}</option> }
                    })
                    .collect_view()}
            </select>
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Posting..." } else { "Post" }}
            </button>
        </form>
    }
}
