//! Вход, регистрация и выход.
//!
//! Единственное место, где сохранённый токен записывается или удаляется.

use crate::actions::{Alert, LOGIN_REQUIRED, REQUEST_FAILED};
use crate::api::BoardApi;
use crate::credentials::{Credentials, TokenStore};
use crate::error::BoardClientError;
use crate::route::Route;

/// Выполняет вход, сохраняет токен в хранилище и в учётные данные.
/// При успехе нужно открыть список постов.
pub async fn login<A>(
    api: &A,
    store: &dyn TokenStore,
    credentials: &Credentials,
    email: &str,
    password: &str,
) -> Result<Route, Alert>
where
    A: BoardApi + ?Sized,
{
    let response = api
        .login(email, password)
        .await
        .map_err(|err| login_alert(LOGIN_REQUIRED, &err))?;
    store
        .save(&response.token)
        .map_err(|err| login_alert(REQUEST_FAILED, &err))?;
    credentials.set_token(response.token);
    tracing::info!(email, "logged in");
    Ok(Route::List)
}

/// Регистрирует пользователя. При успехе нужно открыть страницу входа.
pub async fn signup<A>(api: &A, email: &str, password: &str, nickname: &str) -> Result<Route, Alert>
where
    A: BoardApi + ?Sized,
{
    api.signup(email, password, nickname)
        .await
        .map_err(|err| login_alert(REQUEST_FAILED, &err))?;
    tracing::info!(email, "signed up");
    Ok(Route::Login)
}

/// Удаляет токен из хранилища, затем из учётных данных. Сервер не
/// вызывается. Если хранилище не очистилось, пользователь остаётся
/// в системе.
pub fn logout(store: &dyn TokenStore, credentials: &Credentials) -> Result<Route, Alert> {
    store
        .clear()
        .map_err(|err| login_alert(REQUEST_FAILED, &err))?;
    credentials.clear();
    tracing::info!("logged out");
    Ok(Route::Login)
}

fn login_alert(message: &'static str, err: &BoardClientError) -> Alert {
    tracing::warn!(status = ?err.status(), error = %err, "authentication flow failed");
    Alert::new(message)
}
