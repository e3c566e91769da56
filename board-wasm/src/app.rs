use board_client::Route;
use leptos::prelude::*;

use crate::components::admin_view::AdminPage;
use crate::components::auth_panel::{LoginPage, SignupPage};
use crate::components::create_post::CreatePostPage;
use crate::components::detail_view::PostDetail;
use crate::components::list_view::Home;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    view! {
        <main class="page">
            <section class="container">
                {move || match state.route.get() {
                    Route::List => view! { <Home state=state /> }.into_any(),
                    Route::Detail(id) => view! { <PostDetail state=state post_id=id /> }.into_any(),
                    Route::Admin => view! { <AdminPage state=state /> }.into_any(),
                    Route::Create => view! { <CreatePostPage state=state /> }.into_any(),
                    Route::Login => view! { <LoginPage state=state /> }.into_any(),
                    Route::Signup => view! { <SignupPage state=state /> }.into_any(),
                }}
            </section>
        </main>
    }
}
