use stocklink_auth::Session;

/// Session context for a request.
///
/// This is immutable and must be present for all protected routes; the auth
/// middleware inserts it and handlers consume it.
#[derive(Debug, Clone)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
