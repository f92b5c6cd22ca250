//! Persisting the session flag.

use crate::backend::navigation::guard::{SESSION_KEY, SESSION_VALUE, Session};
use crate::backend::services::LocalStorage;
use crate::simple_error;
use crate::utils::Result;

/// Storage key remembering who logged in.
pub const USERNAME_KEY: &str = "username";

/// Validates if a username meets the requirements.
pub fn is_valid_username(username: &str) -> bool {
    (3..=32).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if !is_valid_username(username) {
        return Err(simple_error!(
            "El usuario debe tener entre 3 y 32 caracteres: letras, números, '_' o '.'"
        ));
    }
    if password.is_empty() {
        return Err(simple_error!("La contraseña no puede estar vacía"));
    }
    Ok(())
}

/// Reads the session flag and the remembered username.
pub async fn load_session(storage: &LocalStorage) -> (Session, Option<String>) {
    let session = Session::new(storage.get_item(SESSION_KEY).await);
    let username = storage.get_item(USERNAME_KEY).await;
    (session, username)
}

/// Checks the credentials and stores the session flag.
pub async fn persist_login(storage: &LocalStorage, username: &str, password: &str) -> Result<()> {
    validate_credentials(username, password)?;

    storage
        .set_item(SESSION_KEY, SESSION_VALUE)
        .await
        .map_err(|e| simple_error!("No se pudo guardar la sesión: {}", e))?;
    if let Err(e) = storage.set_item(USERNAME_KEY, username).await {
        log::warn!("Failed to remember username: {e}");
    }

    log::info!("User {username} logged in");
    Ok(())
}

/// Removes the session flag and the username. Every key is attempted.
pub async fn clear_session(storage: &LocalStorage) -> Result<()> {
    let mut result = Ok(());
    for key in [SESSION_KEY, USERNAME_KEY] {
        if let Err(e) = storage.remove_item(key).await {
            log::error!("Failed to clear {key}: {e}");
            result = Err(e);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().join("storage.json"))
    }

    #[test]
    fn username_rules() {
        assert!(is_valid_username("ana.lopez"));
        assert!(is_valid_username("admin_01"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("con espacio"));
        assert!(!is_valid_username(&"a".repeat(33)));
    }

    #[tokio::test]
    async fn login_stores_the_flag() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        persist_login(&storage, "ana.lopez", "secreto").await.unwrap();

        assert_eq!(
            storage.get_item(SESSION_KEY).await.as_deref(),
            Some("true")
        );
        let (session, username) = load_session(&storage).await;
        assert!(session.is_authenticated());
        assert_eq!(username.as_deref(), Some("ana.lopez"));
    }

    #[tokio::test]
    async fn invalid_credentials_store_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let bad_user = persist_login(&storage, "a b", "secreto").await.unwrap_err();
        assert!(bad_user.message().starts_with("El usuario"));
        let no_password = persist_login(&storage, "ana", "").await.unwrap_err();
        assert_eq!(no_password.message(), "La contraseña no puede estar vacía");

        assert!(storage.items().await.is_empty());
        assert!(!load_session(&storage).await.0.is_authenticated());
    }

    #[tokio::test]
    async fn logout_removes_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("theme", "dark").await.unwrap();
        persist_login(&storage, "ana", "secreto").await.unwrap();

        clear_session(&storage).await.unwrap();

        let (session, username) = load_session(&storage).await;
        assert_eq!(session, Session::anonymous());
        assert_eq!(username, None);
        assert_eq!(storage.get_item("theme").await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn logout_without_a_session_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        clear_session(&storage_in(&dir)).await.unwrap();
    }
}
