use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{ListUsersRequest, User};

/// Persistence boundary for users.
///
/// Every read ignores soft-deleted rows. Implementations own the
/// `updated_at` timestamp and reject a second live user with the same email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row
    async fn save(&self, user: User) -> UserResult<User>;

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Persist name, email, phone and status of a live user.
    ///
    /// Returns `NotFound` when the row is gone or already deleted.
    async fn update(&self, user: User) -> UserResult<User>;

    /// Soft-delete a live user. Returns `false` when nothing matched.
    async fn delete(&self, id: &str) -> UserResult<bool>;

    /// One page of live users, newest first, plus the total match count
    /// before paging.
    async fn list(&self, query: &ListUsersRequest) -> UserResult<(Vec<User>, u64)>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, soft-deleted ones included
    pub async fn stored_rows(&self) -> usize {
        self.users.read().await.len()
    }

    fn email_taken(users: &HashMap<String, User>, email: &str, except_id: &str) -> bool {
        users
            .values()
            .any(|u| !u.is_deleted() && u.id != except_id && u.email == email)
    }
}

fn duplicate_email(email: &str) -> UserError {
    UserError::Storage(format!("email already in use: {email}"))
}

fn matches(user: &User, query: &ListUsersRequest) -> bool {
    if user.is_deleted() {
        return false;
    }
    if let Some(status) = query.status {
        if user.status != status {
            return false;
        }
    }
    match query.keyword.as_deref() {
        Some(keyword) => {
            let needle = keyword.to_lowercase();
            user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
        }
        None => true,
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(UserError::Storage(format!("duplicate id: {}", user.id)));
        }
        if Self::email_taken(&users, &user.email, &user.id) {
            return Err(duplicate_email(&user.email));
        }

        users.insert(user.id.clone(), user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).filter(|u| !u.is_deleted()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| !u.is_deleted() && u.email == email)
            .cloned())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if Self::email_taken(&users, &user.email, &user.id) {
            return Err(duplicate_email(&user.email));
        }

        let stored = users
            .get_mut(&user.id)
            .filter(|u| !u.is_deleted())
            .ok_or_else(|| UserError::NotFound(user.id.clone()))?;

        stored.name = user.name;
        stored.email = user.email;
        stored.phone = user.phone;
        stored.status = user.status;
        stored.updated_at = Utc::now();

        tracing::info!(user_id = %stored.id, "Updated user");
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let mut users = self.users.write().await;

        match users.get_mut(id).filter(|u| !u.is_deleted()) {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                tracing::info!(user_id = %id, "Soft-deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self, query: &ListUsersRequest) -> UserResult<(Vec<User>, u64)> {
        let users = self.users.read().await;

        let mut matched: Vec<&User> = users.values().filter(|u| matches(u, query)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(query.size as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }
}
