use board_client::{DEFAULT_PAGE_LIMIT, ListRequest, ListView, Route, auth, resolve_session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{AppState, show_alert};
use crate::storage::LocalTokenStore;

fn fetch_posts(state: AppState, list: RwSignal<ListView>, request: ListRequest) {
    let api = state.api();
    spawn_local(async move {
        let result = request.send(&api).await;
        list.update(|v| {
            v.apply(request.ticket, result);
        });
    });
}

#[component]
pub(crate) fn Home(state: AppState) -> impl IntoView {
    let list = RwSignal::new(ListView::new(DEFAULT_PAGE_LIMIT));

    if let Some(request) = list.try_update(|v| v.request()) {
        fetch_posts(state, list, request);
    }
    {
        let api = state.api();
        spawn_local(async move {
            let session = resolve_session(&api).await;
            list.update(|v| v.set_session(session));
        });
    }

    let on_search = move |ev: leptos::ev::Event| {
        let search = event_target_value(&ev);
        if let Some(request) = list.try_update(|v| v.set_search(search)) {
            fetch_posts(state, list, request);
        }
    };
    let on_prev = move |_| {
        if let Some(request) = list.try_update(|v| v.prev_page()).flatten() {
            fetch_posts(state, list, request);
        }
    };
    let on_next = move |_| {
        if let Some(request) = list.try_update(|v| v.next_page()).flatten() {
            fetch_posts(state, list, request);
        }
    };
    let on_logout = move |_| match auth::logout(&LocalTokenStore, &state.credentials()) {
        Ok(route) => state.navigate(route),
        Err(alert) => show_alert(alert),
    };

    view! {
        <h1>"Univ Community"</h1>
        <div class="toolbar">
            <input
                type="text"
                placeholder="Search..."
                prop:value=move || list.with(|v| v.search().to_string())
                on:input=on_search
            />
            <Show when=move || list.with(ListView::show_admin_link)>
                <button on:click=move |_| state.navigate(Route::Admin)>"Admin"</button>
            </Show>
            <button on:click=move |_| state.navigate(Route::Create)>"New post"</button>
            <Show
                when=move || list.with(ListView::show_auth_links)
                fallback=move || view! {
                    <span class="viewer">
                        {move || list.with(|v| v.viewer_label().unwrap_or_default().to_string())}
                    </span>
                    <button on:click=on_logout>"Logout"</button>
                }
            >
                <button on:click=move |_| state.navigate(Route::Login)>"Login"</button>
                <button on:click=move |_| state.navigate(Route::Signup)>"Signup"</button>
            </Show>
        </div>

        <ul class="posts">
            <For
                each=move || list.with(|v| v.posts().to_vec())
                key=|post| post.id.clone()
                children=move |post| {
                    let id = post.id.clone();
                    view! {
                        <li>
                            <a href="#" on:click=move |ev| {
                                ev.prevent_default();
                                state.navigate(Route::Detail(id.clone()));
                            }>
                                {post.title.clone()}
                            </a>
                            <p class="byline">
                                {format!("by {} ({})", post.author.nickname, post.author.email)}
                            </p>
                        </li>
                    }
                }
            />
        </ul>

        <div class="pager">
            <button
                on:click=on_prev
                disabled=move || list.with(|v| v.pagination().prev_disabled())
            >
                "Prev"
            </button>
            <span>{move || format!("Page {}", list.with(ListView::page_indicator))}</span>
            <button
                on:click=on_next
                disabled=move || list.with(|v| v.pagination().next_disabled())
            >
                "Next"
            </button>
        </div>
    }
}
