//! PostgreSQL-backed `UserRepository` implementation using Diesel.
//!
//! Same shape as the movie adapter: `RETURNING` on insert, affected-row
//! counts on update and delete. No uniqueness constraint on email, so
//! duplicate addresses insert cleanly.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersistenceError, UserRepository};
use crate::domain::{User, UserDraft};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> User {
    let UserRow {
        id,
        firstname,
        lastname,
        email,
        city,
        language,
    } = row;
    User {
        id,
        firstname,
        lastname,
        email,
        city,
        language,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            firstname: &draft.firstname,
            lastname: &draft.lastname,
            email: &draft.email,
            city: &draft.city,
            language: &draft.language,
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_user(row))
    }

    async fn update(&self, id: i32, draft: &UserDraft) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = UserChangeset {
            firstname: &draft.firstname,
            lastname: &draft.lastname,
            email: &draft.email,
            city: &draft.city,
            language: &draft.language,
        };

        let updated_rows = diesel::update(users::table.filter(users::id.eq(id)))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated_rows > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(users::table.filter(users::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted_rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_conversion_keeps_every_field() {
        let row = UserRow {
            id: 8,
            firstname: "Marie".to_owned(),
            lastname: "Martin".to_owned(),
            email: "marie.martin@wild.co".to_owned(),
            city: "Paris".to_owned(),
            language: "French".to_owned(),
        };

        let user = row_to_user(row);

        assert_eq!(user.id, 8);
        assert_eq!(user.firstname, "Marie");
        assert_eq!(user.email, "marie.martin@wild.co");
        assert_eq!(user.language, "French");
    }
}
