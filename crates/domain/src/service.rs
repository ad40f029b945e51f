use std::collections::BTreeSet;

use log::{debug, error};

use crate::{
    ActivitySession, ActivitySessionRepository, ActivitySessionService, CreateError, DeleteError,
    Name, ReadError, SessionCatalog, default_sessions,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ActivitySessionRepository> ActivitySessionService for Service<R> {
    async fn get_sessions(&self) -> Result<Vec<ActivitySession>, ReadError> {
        log_on_error!(
            self.repository.read_sessions(),
            ReadError,
            "get",
            "sessions"
        )
    }

    async fn load_sessions(&self) -> Result<SessionCatalog, ReadError> {
        let mut sessions = self.get_sessions().await?;
        let existing_names = sessions
            .iter()
            .map(|s| s.name().clone())
            .collect::<BTreeSet<_>>();

        let mut created = false;
        for session in default_sessions() {
            if existing_names.contains(session.name()) {
                continue;
            }
            let name = session.name().clone();
            if log_on_error!(
                self.repository.create_session(session),
                CreateError,
                "create",
                "default session"
            )
            .is_ok()
            {
                debug!("created default session \"{name}\"");
                created = true;
            }
        }

        if created {
            sessions = self.get_sessions().await?;
        }

        Ok(SessionCatalog::new(sessions))
    }

    async fn add_session(&self, session: ActivitySession) -> Result<ActivitySession, CreateError> {
        log_on_error!(
            self.repository.create_session(session),
            CreateError,
            "create",
            "session"
        )
    }

    async fn delete_session(&self, name: &Name) -> Result<Name, DeleteError> {
        log_on_error!(
            self.repository.delete_session(name),
            DeleteError,
            "delete",
            "session"
        )
    }
}
