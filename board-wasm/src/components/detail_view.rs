use board_client::{Alert, DetailRequest, DetailView, Post, Ticket, actions, resolve_session};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{AppState, confirm, show_alert};

fn fetch_post(state: AppState, detail: RwSignal<DetailView>, request: DetailRequest) {
    let api = state.api();
    spawn_local(async move {
        let result = request.send(&api).await;
        detail.update(|v| {
            v.apply(request.ticket, result);
        });
    });
}

/// Возвращает `true`, если сервер принял изменение.
fn refetched(detail: RwSignal<DetailView>, ticket: Ticket, result: Result<Post, Alert>) -> bool {
    match result {
        Ok(post) => {
            detail.update(|v| {
                v.apply(ticket, Ok(post));
            });
            true
        }
        Err(alert) => {
            show_alert(alert);
            alert.is_committed()
        }
    }
}

#[component]
pub(crate) fn PostDetail(state: AppState, post_id: String) -> impl IntoView {
    let detail = RwSignal::new(DetailView::new(post_id));

    if let Some(request) = detail.try_update(|v| v.request()) {
        fetch_post(state, detail, request);
    }
    {
        let api = state.api();
        spawn_local(async move {
            let session = resolve_session(&api).await;
            detail.update(|v| v.set_session(session));
        });
    }

    let on_like = move |_| {
        let api = state.api();
        let post_id = detail.with_untracked(|v| v.post_id().to_string());
        let Some(ticket) = detail.try_update(|v| v.begin_refetch()) else {
            return;
        };
        spawn_local(async move {
            refetched(detail, ticket, actions::toggle_like(&api, &post_id).await);
        });
    };

    let on_comment = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = state.api();
        let (post_id, text) =
            detail.with_untracked(|v| (v.post_id().to_string(), v.comment_input().to_string()));
        let Some(ticket) = detail.try_update(|v| v.begin_refetch()) else {
            return;
        };
        spawn_local(async move {
            let result = actions::add_comment(&api, &post_id, &text).await;
            if refetched(detail, ticket, result) {
                detail.update(|v| v.set_comment_input(String::new()));
            }
        });
    };

    let on_delete_post = move |_| {
        let post_id = detail.with_untracked(|v| v.post_id().to_string());
        if !confirm(board_client::DELETE_POST_PROMPT) {
            return;
        }
        let api = state.api();
        spawn_local(async move {
            match actions::delete_post(&api, &post_id).await {
                Ok(route) => state.navigate(route),
                Err(alert) => show_alert(alert),
            }
        });
    };

    let on_delete_comment = move |comment_id: String| {
        let api = state.api();
        let post_id = detail.with_untracked(|v| v.post_id().to_string());
        let Some(ticket) = detail.try_update(|v| v.begin_refetch()) else {
            return;
        };
        spawn_local(async move {
            let result = actions::delete_comment(&api, &post_id, &comment_id).await;
            refetched(detail, ticket, result);
        });
    };

    view! {
        <button on:click=move |_| state.navigate(board_client::Route::List)>"Back"</button>
        <Show
            when=move || detail.with(|v| v.post().is_some())
            fallback=move || view! {
                <p class="status">
                    {move || detail.with(|v| match v.status() {
                        board_client::LoadStatus::Failed(message) => format!("Error: {message}"),
                        _ => "Loading...".to_string(),
                    })}
                </p>
            }
        >
            <article class="post">
                <h2>{move || detail.with(|v| v.post().map(|p| p.title.clone()).unwrap_or_default())}</h2>
                <p class="byline">
                    {move || detail.with(|v| {
                        v.post()
                            .map(|p| format!("by {}", p.author.nickname))
                            .unwrap_or_default()
                    })}
                </p>
                <p>{move || detail.with(|v| v.post().map(|p| p.content.clone()).unwrap_or_default())}</p>
                <div class="actions">
                    <button on:click=on_like>
                        {move || format!("Like ({})", detail.with(DetailView::like_count))}
                    </button>
                    <Show when=move || detail.with(DetailView::show_delete_post)>
                        <button class="danger" on:click=on_delete_post>"Delete post"</button>
                    </Show>
                </div>
            </article>

            <h3>"Comments"</h3>
            <ul class="comments">
                <For
                    each=move || detail.with(|v| v.post().map(|p| p.comments.clone()).unwrap_or_default())
                    key=|comment| comment.id.clone()
                    children=move |comment| {
                        let can_delete = {
                            let comment = comment.clone();
                            move || detail.with(|v| v.show_delete_comment(&comment))
                        };
                        let comment_id = comment.id.clone();
                        view! {
                            <li>
                                <strong>{comment.author_name().to_string()}</strong>
                                ": "
                                {comment.text.clone()}
                                <Show when=can_delete.clone()>
                                    {
                                        let comment_id = comment_id.clone();
                                        view! {
                                            <button
                                                class="link"
                                                on:click=move |_| on_delete_comment(comment_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>

            <form on:submit=on_comment>
                <input
                    placeholder="Write a comment"
                    prop:value=move || detail.with(|v| v.comment_input().to_string())
                    on:input=move |ev| detail.update(|v| v.set_comment_input(event_target_value(&ev)))
                />
                <button type="submit">"Comment"</button>
            </form>
        </Show>
    }
}
