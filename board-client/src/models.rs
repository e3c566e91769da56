use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Роль пользователя на доске.
pub enum Role {
    /// Обычный пользователь.
    User,
    /// Администратор.
    Admin,
    /// Роль, которую клиент не знает; строка сервера сохраняется как есть.
    /// Не даёт прав администратора.
    Other(String),
}

impl Role {
    /// `true` для роли администратора.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Роль после переключения в админке: `admin` становится `user`,
    /// всё остальное становится `admin`.
    pub fn toggled(&self) -> Self {
        if self.is_admin() { Self::User } else { Self::Admin }
    }

    /// Строковое значение роли, как его передаёт API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Текущий пользователь, как его возвращает `GET /me`.
pub struct Session {
    /// Идентификатор пользователя.
    pub user_id: String,
    /// Роль пользователя.
    pub role: Role,
    /// Email, если сервер его вернул.
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// `true`, если у сессии роль администратора.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Автор поста.
pub struct Author {
    /// Идентификатор автора.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Никнейм.
    pub nickname: String,
    /// Email.
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Автор комментария.
pub struct CommentAuthor {
    /// Идентификатор пользователя.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Никнейм.
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Комментарий к посту.
pub struct Comment {
    /// Идентификатор комментария.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Текст комментария.
    pub text: String,
    /// Автор; отсутствует, если пользователь удалён.
    #[serde(default)]
    pub user: Option<CommentAuthor>,
}

impl Comment {
    /// Имя автора для отображения.
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.nickname.as_str())
            .unwrap_or(ANONYMOUS_NAME)
    }
}

/// Подпись для комментариев без автора.
pub const ANONYMOUS_NAME: &str = "anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пост с комментариями и лайками.
pub struct Post {
    /// Идентификатор поста.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    #[serde(default)]
    pub content: String,
    /// Автор.
    pub author: Author,
    /// Комментарии.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Идентификаторы пользователей, поставивших лайк.
    #[serde(default)]
    pub likes: Vec<String>,
}

impl Post {
    /// Количество лайков.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Страница списка постов.
pub struct PostsPage {
    /// Посты на текущей странице.
    pub posts: Vec<Post>,
    /// Общее количество постов, подходящих под поиск.
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пользователь в админке.
pub struct User {
    /// Идентификатор пользователя.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Email.
    pub email: String,
    /// Никнейм.
    pub nickname: String,
    /// Роль.
    pub role: Role,
    /// Заблокирован ли пользователь.
    #[serde(default)]
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ответ после успешного входа.
pub struct LoginResponse {
    /// Bearer-токен.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_backend_shape_with_defaults() {
        let raw = r#"{
            "_id": "p1",
            "title": "Hello",
            "content": "World",
            "author": {"_id": "u1", "nickname": "kim", "email": "kim@univ.ac.kr"}
        }"#;
        let post: Post = serde_json::from_str(raw).expect("post should decode");
        assert_eq!(post.id, "p1");
        assert_eq!(post.author.nickname, "kim");
        assert!(post.comments.is_empty());
        assert_eq!(post.like_count(), 0);
    }

    #[test]
    fn comment_without_user_renders_as_anonymous() {
        let raw = r#"{"_id": "c1", "text": "hi", "user": null}"#;
        let comment: Comment = serde_json::from_str(raw).expect("comment should decode");
        assert_eq!(comment.author_name(), ANONYMOUS_NAME);
    }

    #[test]
    fn session_uses_camel_case_fields() {
        let raw = r#"{"userId": "u1", "role": "admin", "email": "a@b.c"}"#;
        let session: Session = serde_json::from_str(raw).expect("session should decode");
        assert_eq!(session.user_id, "u1");
        assert!(session.is_admin());
    }

    #[test]
    fn unknown_role_is_not_admin_and_toggles_to_admin() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "email": "e", "nickname": "n", "role": "moderator"}"#,
        )
        .expect("user should decode");
        assert_eq!(user.role, Role::Other("moderator".to_string()));
        assert!(!user.blocked);
        assert_eq!(user.role.toggled(), Role::Admin);
        assert_eq!(Role::Admin.toggled(), Role::User);
    }

    #[test]
    fn unknown_role_is_written_back_unchanged() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "email": "e", "nickname": "n", "role": "moderator"}"#,
        )
        .expect("user should decode");
        let value = serde_json::to_value(&user).expect("user should encode");
        assert_eq!(value["role"], "moderator");
        assert_eq!(user.role.to_string(), "moderator");
        assert_eq!(serde_json::to_value(Role::Admin).expect("encode"), "admin");
    }
}
