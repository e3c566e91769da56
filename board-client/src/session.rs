use crate::api::BoardApi;
use crate::models::Session;

/// Определяет текущего пользователя через `GET /me`.
///
/// Любая ошибка (нет токена, 401, сеть недоступна) означает анонима:
/// вызывающий код не различает «не вошёл» и «сервер недоступен».
pub async fn resolve_session<A>(api: &A) -> Option<Session>
where
    A: BoardApi + ?Sized,
{
    match api.me().await {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::debug!(error = %err, "session not resolved, treating viewer as anonymous");
            None
        }
    }
}
