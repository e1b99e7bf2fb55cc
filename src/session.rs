//! Session pointer lifecycle.
//!
//! "Logged in" is orthogonal to "exists in the directory": the session is
//! a persisted pointer to a user id, set at login and removed at logout,
//! while the user record itself lives and dies with the user repository.

use std::sync::Arc;

use serde_json::Value;

use crate::error::NavalhaResult;
use crate::model::User;
use crate::repository::{LocalUserRepository, UserRepository};
use crate::store::KvStore;
use crate::validation::require_id;

const CURRENT_USER_KEY: &str = "currentUser";

pub struct SessionManager {
    store: Arc<dyn KvStore>,
    users: Arc<LocalUserRepository>,
}

impl SessionManager {
    /// `users` must be the same instance every other writer of the user
    /// directory goes through: login's create-or-refresh is a
    /// read-modify-write of the `users` collection and only serializes
    /// with saves that share the repository's mutation lock.
    pub fn new(store: Arc<dyn KvStore>, users: Arc<LocalUserRepository>) -> Self {
        Self { store, users }
    }

    /// Log a user in: persist the record (login may create or refresh it),
    /// then point the session at its id.
    pub fn set_current(&self, user: &User) -> NavalhaResult<()> {
        require_id("id", &user.id)?;
        self.users.save(user)?;
        self.store
            .set(CURRENT_USER_KEY, Value::String(user.id.clone()))
    }

    /// Resolve the session pointer to a full user record. `None` when no
    /// pointer is set or the pointed-to record no longer exists.
    pub fn current(&self) -> NavalhaResult<Option<User>> {
        let Some(value) = self.store.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        let Some(id) = value.as_str() else {
            return Ok(None);
        };
        self.users.find_by_id(id)
    }

    /// Log out: remove the pointer only. The user record stays.
    pub fn clear_current(&self) -> NavalhaResult<()> {
        self.store.remove(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRole;
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn admin() -> User {
        User {
            id: "admin-1".to_string(),
            name: "João Silva".to_string(),
            email: "admin@barbeariaelegante.com".to_string(),
            phone: None,
            role: UserRole::Admin,
            barbershop_id: Some("barbershop-1".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn session_over(store: Arc<dyn KvStore>) -> (SessionManager, Arc<LocalUserRepository>) {
        let users = Arc::new(LocalUserRepository::new(store.clone()));
        (SessionManager::new(store, users.clone()), users)
    }

    #[test]
    fn test_login_persists_record_and_pointer() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let (session, users) = session_over(store);

        assert!(session.current().unwrap().is_none());

        session.set_current(&admin()).unwrap();
        assert_eq!(session.current().unwrap().unwrap().id, "admin-1");

        // The record went through the user repository, not just the pointer.
        assert_eq!(users.all().unwrap().len(), 1);
    }

    #[test]
    fn test_logout_keeps_user_record() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let (session, users) = session_over(store);

        session.set_current(&admin()).unwrap();
        session.clear_current().unwrap();

        assert!(session.current().unwrap().is_none());
        assert_eq!(users.all().unwrap().len(), 1);
    }

    #[test]
    fn test_dangling_pointer_resolves_to_none() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        store
            .set(CURRENT_USER_KEY, Value::String("ghost-1".to_string()))
            .unwrap();

        let (session, _users) = session_over(store);
        assert!(session.current().unwrap().is_none());
    }

    #[test]
    fn test_login_refreshes_existing_record() {
        let (session, _users) = session_over(Arc::new(MemoryStore::new()));
        let mut user = admin();
        session.set_current(&user).unwrap();

        user.name = "João S.".to_string();
        session.set_current(&user).unwrap();

        assert_eq!(session.current().unwrap().unwrap().name, "João S.");
    }
}
