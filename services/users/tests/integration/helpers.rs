use std::sync::{Arc, Mutex};

use uuid::Uuid;

use fitness_users::domain::repository::UserRepository;
use fitness_users::domain::types::User;
use fitness_users::error::UsersServiceError;

// ── InMemoryUserRepo ─────────────────────────────────────────────────────────

/// Shares its rows across clones, like a connection pool onto one database.
#[derive(Clone, Default)]
pub struct InMemoryUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UsersServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_keycloak_id(
        &self,
        keycloak_id: &str,
    ) -> Result<Option<User>, UsersServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| !u.keycloak_id.is_empty() && u.keycloak_id == keycloak_id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        let taken = users.iter().any(|u| {
            u.email == user.email
                || (!user.keycloak_id.is_empty() && u.keycloak_id == user.keycloak_id)
        });
        if taken {
            return Err(UsersServiceError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), UsersServiceError> {
        Ok(())
    }
}
