//! Client-side session persistence.
//!
//! Two fixed storage keys under `~/.vallunex/`: the serialized identity and
//! the theme flag. Both are restored on startup; the identity is cleared on
//! logout. A stored identity is only trusted when it still carries a token
//! and an email; anything else is discarded and the file removed, the same
//! way an unparseable record is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::types::{Identity, ThemeMode};

/// Storage key for the serialized identity record.
pub const USER_KEY: &str = "user.json";
/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme.json";

/// Canonical session directory (`~/.vallunex`).
pub fn session_dir() -> Result<PathBuf, SessionError> {
    let home = dirs::home_dir().ok_or(SessionError::NoHomeDir)?;
    Ok(home.join(".vallunex"))
}

fn ensure_dir(dir: &Path) -> Result<(), SessionError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| SessionError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(dir: &Path, key: &str, value: &T) -> Result<(), SessionError> {
    ensure_dir(dir)?;
    let path = dir.join(key);
    let content = serde_json::to_string_pretty(value)?;
    fs::write(&path, content).map_err(|e| SessionError::Io {
        path,
        source: e,
    })
}

/// Restore the previously logged-in identity, if any.
///
/// Returns `None` when no record exists, when it fails to parse, or when it
/// is missing a token or email. Invalid records are deleted so the next
/// launch starts clean.
pub fn load_identity(dir: &Path) -> Option<Identity> {
    let path = dir.join(USER_KEY);
    let content = fs::read_to_string(&path).ok()?;

    match serde_json::from_str::<Identity>(&content) {
        Ok(identity) if !identity.token.is_empty() && !identity.email.is_empty() => Some(identity),
        Ok(_) => {
            log::warn!("Stored identity missing token or email; discarding");
            let _ = fs::remove_file(&path);
            None
        }
        Err(e) => {
            log::warn!("Stored identity unreadable ({e}); discarding");
            let _ = fs::remove_file(&path);
            None
        }
    }
}

pub fn save_identity(dir: &Path, identity: &Identity) -> Result<(), SessionError> {
    write_json(dir, USER_KEY, identity)
}

/// Logout: drop the stored identity. The theme preference survives.
pub fn clear_identity(dir: &Path) {
    let _ = fs::remove_file(dir.join(USER_KEY));
}

/// Restore the theme preference, falling back to light.
pub fn load_theme(dir: &Path) -> ThemeMode {
    let path = dir.join(THEME_KEY);
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => ThemeMode::default(),
    }
}

pub fn save_theme(dir: &Path, theme: ThemeMode) -> Result<(), SessionError> {
    write_json(dir, THEME_KEY, &theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn identity(token: &str, email: &str) -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: email.to_string(),
            role: Role::Admin,
            token: token.to_string(),
        }
    }

    #[test]
    fn test_identity_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        save_identity(dir.path(), &identity("tok-1", "asha@vallunex.com")).unwrap();

        let restored = load_identity(dir.path()).expect("identity should restore");
        assert_eq!(restored.token, "tok-1");
        assert_eq!(restored.role, Role::Admin);
    }

    #[test]
    fn test_missing_file_restores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_identity(dir.path()).is_none());
    }

    #[test]
    fn test_identity_without_token_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        save_identity(dir.path(), &identity("", "asha@vallunex.com")).unwrap();

        assert!(load_identity(dir.path()).is_none());
        // The bad record was removed, not left to fail again next launch.
        assert!(!dir.path().join(USER_KEY).exists());
    }

    #[test]
    fn test_corrupt_identity_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(USER_KEY), "{not json").unwrap();

        assert!(load_identity(dir.path()).is_none());
        assert!(!dir.path().join(USER_KEY).exists());
    }

    #[test]
    fn test_logout_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        save_identity(dir.path(), &identity("tok-1", "a@b.c")).unwrap();
        save_theme(dir.path(), ThemeMode::Dark).unwrap();

        clear_identity(dir.path());

        assert!(load_identity(dir.path()).is_none());
        assert_eq!(load_theme(dir.path()), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_theme(dir.path()), ThemeMode::Light);
    }
}
