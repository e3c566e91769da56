use board_client::{Route, actions};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{AppState, show_alert};

#[component]
pub(crate) fn CreatePostPage(state: AppState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked();
        let content = content.get_untracked();
        let api = state.api();
        sending.set(true);
        spawn_local(async move {
            match actions::create_post(&api, &title, &content).await {
                Ok(route) => state.navigate(route),
                Err(alert) => show_alert(alert),
            }
            sending.set(false);
        });
    };

    view! {
        <button on:click=move |_| state.navigate(Route::List)>"Back"</button>
        <h2>"New post"</h2>
        <form on:submit=on_submit>
            <input
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Content"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || sending.get()>"Publish"</button>
        </form>
    }
}
