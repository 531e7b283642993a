//! Movie HTTP handlers.
//!
//! ```text
//! GET    /api/movies
//! GET    /api/movies/{id}
//! POST   /api/movies
//! PUT    /api/movies/{id}
//! DELETE /api/movies/{id}
//! ```
//!
//! Mutating handlers validate the payload before any repository call, so a
//! request that is both malformed and addressed at a missing row reports the
//! validation failure, never the missing row.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Error, Movie, MovieDraft};
use crate::inbound::http::error::{StorageErrorBody, ValidationErrorBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_resource_id};

const RESOURCE: &str = "movie";

/// List every stored movie.
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "All stored movies, ordered by id", body = [Movie]),
        (status = 500, description = "Storage failure", body = StorageErrorBody)
    ),
    tags = ["movies"],
    operation_id = "listMovies"
)]
#[get("/movies")]
pub async fn list_movies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Movie>>> {
    let movies = state.movies.list().await?;
    Ok(web::Json(movies))
}

/// Fetch one movie by identifier.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 200, description = "The stored movie", body = Movie),
        (status = 404, description = "No movie matches the identifier"),
        (status = 500, description = "Storage failure", body = StorageErrorBody)
    ),
    tags = ["movies"],
    operation_id = "getMovieById"
)]
#[get("/movies/{id}")]
pub async fn get_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Movie>> {
    let raw = path.into_inner();
    let Some(id) = parse_resource_id(&raw) else {
        return Err(Error::not_found(RESOURCE, raw));
    };
    match state.movies.find_by_id(id).await? {
        Some(movie) => Ok(web::Json(movie)),
        None => Err(Error::not_found(RESOURCE, id)),
    }
}

/// Create a movie from a full payload.
#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = Value,
    responses(
        (status = 201, description = "Created movie with its assigned id", body = Movie),
        (status = 422, description = "Payload failed validation", body = ValidationErrorBody),
        (status = 500, description = "Storage failure", body = StorageErrorBody)
    ),
    tags = ["movies"],
    operation_id = "createMovie"
)]
#[post("/movies")]
pub async fn create_movie(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = MovieDraft::from_payload(&payload).map_err(Error::validation)?;
    let movie = state.movies.insert(&draft).await?;
    Ok(HttpResponse::Created().json(movie))
}

/// Replace every field of a stored movie.
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    request_body = Value,
    responses(
        (status = 204, description = "Movie replaced"),
        (status = 404, description = "No movie matches the identifier"),
        (status = 422, description = "Payload failed validation", body = ValidationErrorBody),
        (status = 500, description = "Storage failure", body = StorageErrorBody)
    ),
    tags = ["movies"],
    operation_id = "updateMovie"
)]
#[put("/movies/{id}")]
pub async fn update_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    // Validation strictly precedes the existence check.
    let draft = MovieDraft::from_payload(&payload).map_err(Error::validation)?;
    let raw = path.into_inner();
    let Some(id) = parse_resource_id(&raw) else {
        return Err(Error::not_found(RESOURCE, raw));
    };
    if state.movies.update(id, &draft).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(RESOURCE, id))
    }
}

/// Delete a stored movie.
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 204, description = "Movie removed"),
        (status = 404, description = "No movie matches the identifier"),
        (status = 500, description = "Storage failure", body = StorageErrorBody)
    ),
    tags = ["movies"],
    operation_id = "deleteMovie"
)]
#[delete("/movies/{id}")]
pub async fn delete_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let Some(id) = parse_resource_id(&raw) else {
        return Err(Error::not_found(RESOURCE, raw));
    };
    if state.movies.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(RESOURCE, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{InMemoryMovieRepository, InMemoryUserRepository, MovieRepository};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::json;
    use std::sync::Arc;

    fn test_state() -> (Arc<InMemoryMovieRepository>, web::Data<HttpState>) {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let state = HttpState::new(movies.clone(), Arc::new(InMemoryUserRepository::new()));
        (movies, web::Data::new(state))
    }

    fn test_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api")
                .service(list_movies)
                .service(get_movie)
                .service(create_movie)
                .service(update_movie)
                .service(delete_movie),
        )
    }

    fn avatar() -> Value {
        json!({
            "title": "Avatar",
            "director": "James Cameron",
            "year": "2009",
            "color": "1",
            "duration": 162,
        })
    }

    #[actix_web::test]
    async fn invalid_put_on_missing_row_reports_validation_not_absence() {
        let (_, state) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::put()
            .uri("/api/movies/5000")
            .set_json(json!({ "title": "Harry Potter" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn put_on_non_numeric_id_with_valid_payload_is_not_found() {
        let (_, state) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::put()
            .uri("/api/movies/abc")
            .set_json(avatar())
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn failed_validation_leaves_the_store_untouched() {
        let (movies, state) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/movies")
            .set_json(json!({ "title": "Harry Potter" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(movies.list().await.expect("list").is_empty());
    }

    #[actix_web::test]
    async fn string_colour_flag_round_trips_as_boolean() {
        let (_, state) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/movies")
            .set_json(avatar())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Movie = actix_test::read_body_json(response).await;
        assert!(body.color);
    }
}
