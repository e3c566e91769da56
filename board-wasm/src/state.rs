use board_client::{Alert, ApiClient, Credentials, Route};
use leptos::prelude::*;

use crate::storage::LocalTokenStore;

const API_BASE_URL: &str = match option_env!("BOARD_API_BASE_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:4000",
};

/// Общее состояние приложения: учётные данные и текущий экран.
///
/// Данные экранов здесь не хранятся: каждый экран загружает их сам.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    credentials: StoredValue<Credentials>,
    pub(crate) route: RwSignal<Route>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            credentials: StoredValue::new(Credentials::from_store(&LocalTokenStore)),
            route: RwSignal::new(Route::List),
        }
    }

    pub(crate) fn credentials(&self) -> Credentials {
        self.credentials.get_value()
    }

    pub(crate) fn api(&self) -> ApiClient {
        ApiClient::new(API_BASE_URL, self.credentials())
    }

    pub(crate) fn navigate(&self, route: Route) {
        self.route.set(route);
    }
}

/// Блокирующее уведомление браузера.
pub(crate) fn show_alert(alert: Alert) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(alert.message());
    }
}

/// Подтверждение через `window.confirm`. Без окна считается отказом.
pub(crate) fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
