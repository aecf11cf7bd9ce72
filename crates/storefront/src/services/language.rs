//! Display language persisted in the session.

use tower_sessions::Session;
use witherstex_core::Language;

use crate::models::session_keys;

/// The visitor's language, [`Language::Fr`] until they pick another.
///
/// A value the session cannot decode is treated as unset.
pub async fn current(session: &Session) -> Language {
    session
        .get::<Language>(session_keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist `language` as the visitor's choice.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn set(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LANGUAGE, language).await
}

/// Advance to the next language and persist it.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn cycle(session: &Session) -> Result<Language, tower_sessions::session::Error> {
    let next = current(session).await.cycle();
    set(session, next).await?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_defaults_to_french() {
        assert_eq!(current(&session()).await, Language::Fr);
    }

    #[tokio::test]
    async fn test_three_cycles_return_to_start() {
        let session = session();
        assert_eq!(cycle(&session).await.unwrap(), Language::En);
        assert_eq!(cycle(&session).await.unwrap(), Language::Zh);
        assert_eq!(cycle(&session).await.unwrap(), Language::Fr);
        assert_eq!(current(&session).await, Language::Fr);
    }

    #[tokio::test]
    async fn test_set_is_visible_to_other_handles() {
        let session = session();
        set(&session, Language::Zh).await.unwrap();
        let other = session.clone();
        assert_eq!(current(&other).await, Language::Zh);
    }
}
