use board_client::{AdminView, Alert, BoardApi, LoadStatus, Route, Ticket, User, actions};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{AppState, show_alert};

fn apply_users(admin: RwSignal<AdminView>, ticket: Ticket, result: Result<Vec<User>, Alert>) {
    match result {
        Ok(users) => admin.update(|v| {
            v.apply(ticket, Ok(users));
        }),
        Err(alert) => show_alert(alert),
    }
}

#[component]
pub(crate) fn AdminPage(state: AppState) -> impl IntoView {
    let admin = RwSignal::new(AdminView::new());

    if let Some(ticket) = admin.try_update(|v| v.request()) {
        let api = state.api();
        spawn_local(async move {
            let result = api.list_users().await;
            admin.update(|v| {
                v.apply(ticket, result);
            });
        });
    }

    // Строки меняются только после ответа сервера: кнопки не хранят
    // собственного состояния.
    let on_toggle_role = move |user: User| {
        let api = state.api();
        let Some(ticket) = admin.try_update(|v| v.begin_refetch()) else {
            return;
        };
        spawn_local(async move {
            let result = actions::toggle_role(&api, &user.id, &user.role).await;
            apply_users(admin, ticket, result);
        });
    };

    let on_toggle_block = move |user_id: String| {
        let api = state.api();
        let Some(ticket) = admin.try_update(|v| v.begin_refetch()) else {
            return;
        };
        spawn_local(async move {
            let result = actions::toggle_block(&api, &user_id).await;
            apply_users(admin, ticket, result);
        });
    };

    view! {
        <button on:click=move |_| state.navigate(Route::List)>"Back"</button>
        <h2>"User management"</h2>
        <Show when=move || admin.with(|v| matches!(v.status(), LoadStatus::Failed(_)))>
            <p class="status">"Failed to load users"</p>
        </Show>
        <table class="users">
            <thead>
                <tr>
                    <th>"Email"</th>
                    <th>"Nickname"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || admin.with(|v| v.users().to_vec())
                    key=|user| format!("{}:{}:{}", user.id, user.role, user.blocked)
                    children=move |user| {
                        let for_role = user.clone();
                        let user_id = user.id.clone();
                        let block_label = if user.blocked { "Unblock" } else { "Block" };
                        view! {
                            <tr>
                                <td>{user.email.clone()}</td>
                                <td>{user.nickname.clone()}</td>
                                <td>{user.role.to_string()}</td>
                                <td>{if user.blocked { "blocked" } else { "active" }}</td>
                                <td>
                                    <button on:click=move |_| on_toggle_role(for_role.clone())>
                                        "Change role"
                                    </button>
                                    <button on:click=move |_| on_toggle_block(user_id.clone())>
                                        {block_label}
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
