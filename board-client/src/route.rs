/// Экраны клиента.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Список постов.
    List,
    /// Вход.
    Login,
    /// Регистрация.
    Signup,
    /// Новый пост.
    Create,
    /// Управление пользователями.
    Admin,
    /// Пост по идентификатору.
    Detail(String),
}

impl Route {
    /// Путь экрана.
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Create => "/create".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::Detail(id) => format!("/posts/{id}"),
        }
    }

    /// Разбирает путь обратно в экран. Неизвестные пути ведут в список.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::List,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/create" => Self::Create,
            "/admin" => Self::Admin,
            _ => match path.strip_prefix("/posts/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Detail(id.to_string()),
                _ => Self::List,
            },
        }
    }
}
