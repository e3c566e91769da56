use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `board-client`.
pub enum BoardClientError {
    /// Ошибка HTTP-транспорта (`reqwest`): сеть, TLS, декодирование тела.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется авторизация (401: нет токена или он недействителен).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Недостаточно прав для операции (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Запрошенный ресурс не найден (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Любой другой не-2xx ответ сервера.
    #[error("http status {status}: {message}")]
    Status {
        /// HTTP-код ответа.
        status: u16,
        /// Сообщение из тела ответа или описание статуса.
        message: String,
    },

    /// Ошибка хранилища токена.
    #[error("token storage error: {0}")]
    Storage(String),
}

/// Результат операций `board-client`.
pub type BoardClientResult<T> = Result<T, BoardClientError>;

impl BoardClientError {
    pub(crate) fn from_http_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }

    /// HTTP-код, если ошибка пришла от сервера.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN.as_u16()),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::Storage(_) => None,
        }
    }
}
