//! PostgreSQL-backed `MovieRepository` implementation using Diesel.
//!
//! Inserts use `RETURNING` so the store-assigned identifier comes back with
//! the created row in one statement. Updates and deletes rely on affected-row
//! counts; zero rows means the identifier matched nothing and the caller
//! reports not-found.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MovieRepository, PersistenceError};
use crate::domain::{Movie, MovieDraft};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MovieChangeset, MovieRow, NewMovieRow};
use super::pool::DbPool;
use super::schema::movies;

/// Diesel-backed implementation of the `MovieRepository` port.
#[derive(Clone)]
pub struct DieselMovieRepository {
    pool: DbPool,
}

impl DieselMovieRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_movie(row: MovieRow) -> Movie {
    let MovieRow {
        id,
        title,
        director,
        year,
        color,
        duration,
    } = row;
    Movie {
        id,
        title,
        director,
        year,
        color,
        duration,
    }
}

#[async_trait]
impl MovieRepository for DieselMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MovieRow> = movies::table
            .order(movies::id.asc())
            .select(MovieRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_movie).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MovieRow> = movies::table
            .filter(movies::id.eq(id))
            .select(MovieRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_movie))
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewMovieRow {
            title: &draft.title,
            director: &draft.director,
            year: &draft.year,
            color: draft.color,
            duration: draft.duration,
        };

        let row: MovieRow = diesel::insert_into(movies::table)
            .values(&new_row)
            .returning(MovieRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_movie(row))
    }

    async fn update(&self, id: i32, draft: &MovieDraft) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = MovieChangeset {
            title: &draft.title,
            director: &draft.director,
            year: &draft.year,
            color: draft.color,
            duration: draft.duration,
        };

        let updated_rows = diesel::update(movies::table.filter(movies::id.eq(id)))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated_rows > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(movies::table.filter(movies::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted_rows > 0)
    }
}
