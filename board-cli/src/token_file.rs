use std::fs;
use std::io;
use std::path::PathBuf;

use board_client::{BoardClientError, BoardClientResult, TokenStore, normalize_token};

/// Токен в файле рядом с местом запуска (`.board_token` по умолчанию).
#[derive(Debug, Clone)]
pub(crate) struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn storage_error(&self, action: &str, err: io::Error) -> BoardClientError {
        BoardClientError::Storage(format!("{action} {}: {err}", self.path.display()))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> BoardClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(normalize_token(&raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.storage_error("failed to read", err)),
        }
    }

    fn save(&self, token: &str) -> BoardClientResult<()> {
        fs::write(&self.path, token).map_err(|err| self.storage_error("failed to write", err))
    }

    fn clear(&self) -> BoardClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.storage_error("failed to remove", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join(".board_token"))
    }

    #[test]
    fn missing_file_means_no_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(store_in(&dir).load().expect("load").is_none());
    }

    #[test]
    fn saved_token_is_loaded_trimmed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.save("abc.def.ghi\n").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn blank_file_means_no_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.save("   ").expect("save");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.save("t").expect("save");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(store.load().expect("load").is_none());
    }
}
