use board_client::{BoardClientError, BoardClientResult, TokenStore, normalize_token};
use web_sys::Storage;

const TOKEN_KEY: &str = "token";

/// Токен в `localStorage` браузера под ключом `token`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocalTokenStore;

fn local_storage() -> BoardClientResult<Storage> {
    let window =
        web_sys::window().ok_or_else(|| BoardClientError::Storage("window is not available".into()))?;
    window
        .local_storage()
        .map_err(|_| BoardClientError::Storage("failed to access localStorage".into()))?
        .ok_or_else(|| BoardClientError::Storage("localStorage is not available".into()))
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> BoardClientResult<Option<String>> {
        let raw = local_storage()?
            .get_item(TOKEN_KEY)
            .map_err(|_| BoardClientError::Storage("failed to read token".into()))?;
        Ok(raw.as_deref().and_then(normalize_token))
    }

    fn save(&self, token: &str) -> BoardClientResult<()> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| BoardClientError::Storage("failed to save token".into()))
    }

    fn clear(&self) -> BoardClientResult<()> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| BoardClientError::Storage("failed to clear token".into()))
    }
}
