use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use vaxtalk_core::session::Session;

/// Handle to one live session.
///
/// Holding the lock is what serializes turns on a session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory owner of all live sessions.
///
/// The map lock is only held for insert, lookup and removal. Work on a
/// session happens under that session's own lock, so slow turns on one
/// session never block others.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionHandle>>>,
}

impl SessionStore {
    /// Creates a new empty SessionStore.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a live session by ID.
    ///
    /// # Returns
    ///
    /// `Some(handle)` if the session exists, `None` otherwise.
    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    /// Takes ownership of a new session and returns its handle.
    pub async fn insert(&self, session: Session) -> SessionHandle {
        let id = session.id.clone();
        let handle = Arc::new(Mutex::new(session));
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, handle.clone());
        handle
    }

    /// Removes a session, returning its handle if it was present.
    pub async fn remove(&self, session_id: &str) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
