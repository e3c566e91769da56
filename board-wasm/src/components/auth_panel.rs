use board_client::{Route, auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{AppState, show_alert};
use crate::storage::LocalTokenStore;

#[component]
pub(crate) fn LoginPage(state: AppState) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        let api = state.api();
        let credentials = state.credentials();
        sending.set(true);
        spawn_local(async move {
            match auth::login(&api, &LocalTokenStore, &credentials, &email, &password).await {
                Ok(route) => state.navigate(route),
                Err(alert) => show_alert(alert),
            }
            sending.set(false);
        });
    };

    view! {
        <h2>"Login"</h2>
        <form on:submit=on_login>
            <input
                placeholder="email"
                type="email"
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                placeholder="password"
                type="password"
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || sending.get()>"Login"</button>
        </form>
        <p>
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                state.navigate(Route::Signup);
            }>"Create an account"</a>
        </p>
    }
}

#[component]
pub(crate) fn SignupPage(state: AppState) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_signup = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        let nickname = nickname.get_untracked().trim().to_string();
        let api = state.api();
        sending.set(true);
        spawn_local(async move {
            match auth::signup(&api, &email, &password, &nickname).await {
                Ok(route) => state.navigate(route),
                Err(alert) => show_alert(alert),
            }
            sending.set(false);
        });
    };

    view! {
        <h2>"Signup"</h2>
        <form on:submit=on_signup>
            <input
                placeholder="email"
                type="email"
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                placeholder="nickname"
                on:input=move |ev| nickname.set(event_target_value(&ev))
            />
            <input
                placeholder="password"
                type="password"
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || sending.get()>"Signup"</button>
        </form>
        <p>
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                state.navigate(Route::Login);
            }>"Already have an account?"</a>
        </p>
    }
}
