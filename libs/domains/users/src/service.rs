use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{
    CreateUserRequest, ListUsersRequest, UpdateUserRequest, UpdateUserStatusRequest, User,
    UserStatus,
};
use crate::repository::UserRepository;

/// Business rules for user management.
///
/// Store failures are logged here with their context and replaced by an
/// opaque `UserError::Internal`; only `NotFound` passes through unchanged.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

/// Log `err` under `context` and hide it behind `Internal`
fn internal(context: &'static str) -> impl FnOnce(UserError) -> UserError {
    move |err| match err {
        UserError::NotFound(id) => UserError::NotFound(id),
        other => {
            error!(error = %other, "{}", context);
            UserError::Internal(context.to_string())
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an active user with a fresh id. Duplicate emails are left to
    /// the store to reject.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUserRequest) -> UserResult<User> {
        info!("creating user");

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.repository
            .save(user)
            .await
            .map_err(internal("failed to create user"))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(internal("failed to get user"))?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Overwrite the fields present in `input`
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateUserRequest) -> UserResult<User> {
        let mut user = self.get_by_id(id).await?;
        user.apply_update(input);

        self.repository
            .update(user)
            .await
            .map_err(internal("failed to update user"))
    }

    #[instrument(skip(self, input), fields(status = %input.status))]
    pub async fn update_status(
        &self,
        id: &str,
        input: UpdateUserStatusRequest,
    ) -> UserResult<User> {
        let mut user = self.get_by_id(id).await?;
        user.status = input.status;

        let user = self
            .repository
            .update(user)
            .await
            .map_err(internal("failed to update user status"))?;

        info!(user_id = %user.id, status = %user.status, "user status updated");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> UserResult<()> {
        self.get_by_id(id).await?;

        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(internal("failed to delete user"))?;

        if !deleted {
            // Raced with another delete between the load and the write
            return Err(UserError::NotFound(id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &ListUsersRequest) -> UserResult<(Vec<User>, u64)> {
        self.repository
            .list(query)
            .await
            .map_err(internal("failed to list users"))
    }

    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(internal("failed to look up user by email"))
    }
}
