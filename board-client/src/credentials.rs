use std::sync::{Arc, PoisonError, RwLock};

use crate::error::BoardClientResult;

#[derive(Debug, Clone, Default)]
/// Разделяемый bearer-токен.
///
/// Передаётся в [`crate::ApiClient`] при создании; клиент только читает его.
/// Записывают и очищают токен только сценарии входа и выхода
/// (см. [`crate::auth`]).
pub struct Credentials {
    token: Arc<RwLock<Option<String>>>,
}

impl Credentials {
    /// Пустые учётные данные (анонимный пользователь).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Учётные данные с уже известным токеном.
    pub fn with_token(token: impl Into<String>) -> Self {
        let credentials = Self::default();
        credentials.set_token(token);
        credentials
    }

    /// Учётные данные из хранилища токена. Ошибка чтения означает анонима.
    pub fn from_store(store: &dyn TokenStore) -> Self {
        match store.load() {
            Ok(Some(token)) => Self::with_token(token),
            Ok(None) => Self::anonymous(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored token");
                Self::anonymous()
            }
        }
    }

    /// Текущий токен, если он есть.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `true`, если токен установлен.
    pub fn is_present(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn set_token(&self, token: impl Into<String>) {
        let token = normalize_token(&token.into());
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub(crate) fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Постоянное хранилище токена (файл, `localStorage`, память).
pub trait TokenStore {
    /// Читает сохранённый токен.
    fn load(&self) -> BoardClientResult<Option<String>>;
    /// Сохраняет токен.
    fn save(&self, token: &str) -> BoardClientResult<()>;
    /// Удаляет токен.
    fn clear(&self) -> BoardClientResult<()>;
}

#[derive(Debug, Default)]
/// Хранилище токена в памяти процесса.
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Хранилище с заранее сохранённым токеном.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(normalize_token(&token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> BoardClientResult<Option<String>> {
        Ok(self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> BoardClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = normalize_token(token);
        Ok(())
    }

    fn clear(&self) -> BoardClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Обрезает пробелы; пустая строка означает отсутствие токена.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
