//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain; they exist to satisfy Diesel's type
//! requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::{movies, users};

/// Row struct for reading from the movies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MovieRow {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: bool,
    pub duration: i32,
}

/// Insertable struct for creating new movie records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = movies)]
pub(crate) struct NewMovieRow<'a> {
    pub title: &'a str,
    pub director: &'a str,
    pub year: &'a str,
    pub color: bool,
    pub duration: i32,
}

/// Changeset struct replacing every field of an existing movie record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = movies)]
pub(crate) struct MovieChangeset<'a> {
    pub title: &'a str,
    pub director: &'a str,
    pub year: &'a str,
    pub color: bool,
    pub duration: i32,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub city: &'a str,
    pub language: &'a str,
}

/// Changeset struct replacing every field of an existing user record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub city: &'a str,
    pub language: &'a str,
}
