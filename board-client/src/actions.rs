//! Изменения данных по действию пользователя.
//!
//! Каждое действие выполняет запрос, а затем заново загружает затронутый
//! ресурс с сервера и возвращает свежую копию. Локальное состояние
//! оптимистично не меняется. Любая ошибка превращается в [`Alert`] с
//! общим сообщением; подробности уходят в лог. Если сервер принял
//! изменение, а перезагрузка не удалась, сообщение всегда
//! [`REQUEST_FAILED`], и [`Alert::is_committed`] возвращает `true`.

use crate::api::BoardApi;
use crate::error::BoardClientError;
use crate::models::{Post, Role, User};
use crate::route::Route;

/// Сообщение для неудачного комментария или создания поста.
pub const LOGIN_REQUIRED: &str = "Login required";
/// Сообщение для неудачного удаления.
pub const DELETE_FAILED: &str = "Delete failed";
/// Сообщение для остальных неудачных действий.
pub const REQUEST_FAILED: &str = "Request failed";

/// Блокирующее уведомление о неудачном действии.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    message: &'static str,
    committed: bool,
}

impl Alert {
    pub(crate) fn new(message: &'static str) -> Self {
        Self {
            message,
            committed: false,
        }
    }

    fn committed(message: &'static str) -> Self {
        Self {
            message,
            committed: true,
        }
    }

    /// Текст уведомления.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// `true`, если изменение уже выполнено на сервере и не удалась
    /// только перезагрузка.
    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for Alert {}

fn alert(message: &'static str, action: &'static str) -> impl FnOnce(BoardClientError) -> Alert {
    move |err| {
        tracing::warn!(action, status = ?err.status(), error = %err, "mutation failed");
        Alert::new(message)
    }
}

fn refetch_alert(action: &'static str) -> impl FnOnce(BoardClientError) -> Alert {
    move |err| {
        tracing::warn!(
            action,
            status = ?err.status(),
            error = %err,
            "refetch after mutation failed"
        );
        Alert::committed(REQUEST_FAILED)
    }
}

/// Добавляет комментарий и возвращает пост после перезагрузки.
pub async fn add_comment<A>(api: &A, post_id: &str, text: &str) -> Result<Post, Alert>
where
    A: BoardApi + ?Sized,
{
    api.add_comment(post_id, text)
        .await
        .map_err(alert(LOGIN_REQUIRED, "add_comment"))?;
    api.get_post(post_id)
        .await
        .map_err(refetch_alert("add_comment"))
}

/// Удаляет комментарий и возвращает пост после перезагрузки.
pub async fn delete_comment<A>(api: &A, post_id: &str, comment_id: &str) -> Result<Post, Alert>
where
    A: BoardApi + ?Sized,
{
    api.delete_comment(post_id, comment_id)
        .await
        .map_err(alert(DELETE_FAILED, "delete_comment"))?;
    api.get_post(post_id)
        .await
        .map_err(refetch_alert("delete_comment"))
}

/// Удаляет пост; при успехе нужно вернуться к списку.
pub async fn delete_post<A>(api: &A, post_id: &str) -> Result<Route, Alert>
where
    A: BoardApi + ?Sized,
{
    api.delete_post(post_id)
        .await
        .map_err(alert(DELETE_FAILED, "delete_post"))?;
    Ok(Route::List)
}

/// Переключает лайк без проверки текущего состояния и возвращает пост
/// после перезагрузки.
pub async fn toggle_like<A>(api: &A, post_id: &str) -> Result<Post, Alert>
where
    A: BoardApi + ?Sized,
{
    api.toggle_like(post_id)
        .await
        .map_err(alert(REQUEST_FAILED, "toggle_like"))?;
    api.get_post(post_id)
        .await
        .map_err(refetch_alert("toggle_like"))
}

/// Создаёт пост; при успехе нужно открыть его страницу.
pub async fn create_post<A>(api: &A, title: &str, content: &str) -> Result<Route, Alert>
where
    A: BoardApi + ?Sized,
{
    let post = api
        .create_post(title, content)
        .await
        .map_err(alert(LOGIN_REQUIRED, "create_post"))?;
    Ok(Route::Detail(post.id))
}

/// Меняет роль `user ⇄ admin` и возвращает заново загруженный список.
pub async fn toggle_role<A>(api: &A, user_id: &str, current: &Role) -> Result<Vec<User>, Alert>
where
    A: BoardApi + ?Sized,
{
    api.set_user_role(user_id, &current.toggled())
        .await
        .map_err(alert(REQUEST_FAILED, "toggle_role"))?;
    api.list_users()
        .await
        .map_err(refetch_alert("toggle_role"))
}

/// Блокирует или разблокирует пользователя и возвращает заново
/// загруженный список.
pub async fn toggle_block<A>(api: &A, user_id: &str) -> Result<Vec<User>, Alert>
where
    A: BoardApi + ?Sized,
{
    api.toggle_user_block(user_id)
        .await
        .map_err(alert(REQUEST_FAILED, "toggle_block"))?;
    api.list_users()
        .await
        .map_err(refetch_alert("toggle_block"))
}
