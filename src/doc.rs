//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification covering the
//! movie and user endpoints plus the health probes. Swagger UI serves the
//! document at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{FieldViolation, Movie, User, ViolationCode};
use crate::inbound::http::error::{StorageErrorBody, ValidationErrorBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinetheque API",
        description = "JSON CRUD interface over the movie and user catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movies::list_movies,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::create_movie,
        crate::inbound::http::movies::update_movie,
        crate::inbound::http::movies::delete_movie,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Movie,
        User,
        FieldViolation,
        ViolationCode,
        ValidationErrorBody,
        StorageErrorBody,
    )),
    tags(
        (name = "movies", description = "Movie catalogue operations"),
        (name = "users", description = "User registry operations"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;
