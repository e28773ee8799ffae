use std::sync::{PoisonError, RwLock};

use crate::modules::validation::domain::entities::{
    SessionStats, ValidationRecord, ValidationSession,
};
use crate::shared::errors::{AppError, AppResult};

/// In-memory holder for the current session.
///
/// The only shared mutable state in the application. Guarded by a
/// synchronous lock that is never held across an await point; the
/// pipeline writes results back in one step, so readers always observe a
/// consistent record sequence.
pub struct SessionStore {
    session: RwLock<Option<ValidationSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    /// Replace the whole session. Records are never deleted one by one;
    /// a new import swaps the sequence wholesale.
    pub fn replace(&self, session: ValidationSession) {
        let mut guard = self.session.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(session);
    }

    pub fn current(&self) -> Option<ValidationSession> {
        let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    pub fn records(&self) -> AppResult<Vec<ValidationRecord>> {
        let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .map(|session| session.records.clone())
            .ok_or_else(|| AppError::NotFound("No numbers loaded".to_string()))
    }

    pub fn stats(&self) -> AppResult<SessionStats> {
        let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .map(|session| session.stats())
            .ok_or_else(|| AppError::NotFound("No numbers loaded".to_string()))
    }

    /// Write the pipeline's updated record sequence back into the session.
    pub fn store_records(&self, records: Vec<ValidationRecord>) -> AppResult<()> {
        let mut guard = self.session.write().unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            Some(session) => {
                session.records = records;
                Ok(())
            }
            None => Err(AppError::NotFound("No numbers loaded".to_string())),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(numbers: &[&str]) -> ValidationSession {
        let records = numbers
            .iter()
            .map(|n| ValidationRecord::new(n.to_string(), n.starts_with('+')))
            .collect();
        ValidationSession::new(records, None)
    }

    #[test]
    fn empty_store_reports_not_found() {
        let store = SessionStore::new();
        assert!(store.current().is_none());
        assert!(matches!(store.records(), Err(AppError::NotFound(_))));
        assert!(matches!(store.stats(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn replace_swaps_the_session_wholesale() {
        let store = SessionStore::new();
        store.replace(session_with(&["+5511999999999"]));
        let first_id = store.current().unwrap().id;

        store.replace(session_with(&["+12025550123", "bad"]));
        let current = store.current().unwrap();
        assert_ne!(current.id, first_id);
        assert_eq!(current.records.len(), 2);
    }

    #[test]
    fn store_records_updates_in_place() {
        let store = SessionStore::new();
        store.replace(session_with(&["+5511999999999"]));

        let mut records = store.records().unwrap();
        records[0].begin();
        records[0].complete(true);
        store.store_records(records).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.reachable, 1);
    }

    #[test]
    fn store_records_without_session_fails() {
        let store = SessionStore::new();
        assert!(store.store_records(Vec::new()).is_err());
    }
}
