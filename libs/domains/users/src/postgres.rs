use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{ListUsersRequest, User},
    repository::UserRepository,
};

/// PostgreSQL-backed user store.
///
/// Uniqueness of live emails is enforced by the partial index
/// `uq_users_email_live`; a violation surfaces as `UserError::Storage`.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rows that have not been soft-deleted
    fn live() -> Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::DeletedAt.is_null())
    }

    fn filtered(query: &ListUsersRequest) -> Select<entity::Entity> {
        let mut select = Self::live();

        if let Some(keyword) = query.keyword.as_deref() {
            let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
            select = select.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(entity::Column::Name))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(entity::Column::Email))).like(pattern)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(entity::Column::Status.eq(status));
        }

        select
    }
}

/// Escape LIKE wildcards so the keyword matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let model = entity::ActiveModel::from(&user)
            .insert(&self.db)
            .await
            .map_err(|e| UserError::Storage(format!("Database error: {}", e)))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let model = Self::live()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = Self::live()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let changes = entity::ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            phone: Set(user.phone),
            status: Set(user.status),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(user.id.as_str()))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| UserError::Storage(format!("Database error: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user.id));
        }

        tracing::info!(user_id = %user.id, "Updated user");
        self.find_by_id(&user.id)
            .await?
            .ok_or(UserError::NotFound(user.id))
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let changes = entity::ActiveModel {
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = %id, "Soft-deleted user");
        }
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, query: &ListUsersRequest) -> UserResult<(Vec<User>, u64)> {
        let total = Self::filtered(query).count(&self.db).await?;

        let models = Self::filtered(query)
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .offset(query.offset())
            .limit(u64::from(query.size))
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: &str) -> entity::Model {
        let now = Utc::now();
        entity::Model {
            id: id.into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            phone: String::new(),
            status: UserStatus::Active,
            created_at: now.into(),
            updated_at: now.into(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[tokio::test]
    async fn test_find_by_id_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("u-1")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.find_by_id("u-1").await.unwrap().unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(!repo.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let err = repo.update(model("gone").into()).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(id) if id == "gone"));
    }

    #[tokio::test]
    async fn test_query_errors_become_storage_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(matches!(
            repo.find_by_email("a@example.com").await,
            Err(UserError::Storage(_))
        ));
    }
}
