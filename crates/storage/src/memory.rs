use std::sync::{PoisonError, RwLock};

use log::debug;
use repset_domain as domain;

use crate::{SnapshotError, from_json, to_json};

/// Session repository kept in memory.
///
/// Sessions are stored in insertion order and read newest first.
#[derive(Debug, Default)]
pub struct Storage {
    sessions: RwLock<Vec<domain::ActivitySession>>,
}

impl Storage {
    #[must_use]
    pub fn new(sessions: Vec<domain::ActivitySession>) -> Self {
        Self {
            sessions: RwLock::new(sessions),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(Self::new(from_json(json)?))
    }

    /// Serializes all sessions in insertion order.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        let sessions = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        to_json(&sessions)
    }
}

impl domain::ActivitySessionRepository for Storage {
    async fn read_sessions(&self) -> Result<Vec<domain::ActivitySession>, domain::ReadError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.iter().rev().cloned().collect())
    }

    async fn create_session(
        &self,
        session: domain::ActivitySession,
    ) -> Result<domain::ActivitySession, domain::CreateError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        if sessions.iter().any(|s| s.name() == session.name()) {
            return Err(domain::CreateError::Conflict);
        }
        debug!("storing session \"{}\"", session.name());
        sessions.push(session.clone());
        Ok(session)
    }

    async fn delete_session(
        &self,
        name: &domain::Name,
    ) -> Result<domain::Name, domain::DeleteError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let Some(position) = sessions.iter().position(|s| s.name() == name) else {
            return Err(domain::DeleteError::NotFound);
        };
        debug!("removing session \"{name}\"");
        sessions.remove(position);
        Ok(name.clone())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> domain::StorageError {
    domain::StorageError::Other(err.to_string().into())
}
