//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    InMemoryMovieRepository, InMemoryUserRepository, MovieRepository, UserRepository,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::movies::{
    create_movie, delete_movie, get_movie, list_movies, update_movie,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselMovieRepository, DieselUserRepository};

/// Build the repository ports from configuration.
///
/// Uses the Diesel adapters when a database pool is configured and falls
/// back to the in-memory repositories otherwise, which keeps storeless
/// development runs and the integration suite working without PostgreSQL.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let movies: Arc<dyn MovieRepository> = Arc::new(DieselMovieRepository::new(pool.clone()));
            let users: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool.clone()));
            HttpState::new(movies, users)
        }
        None => HttpState::new(
            Arc::new(InMemoryMovieRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        ),
    }
}

/// Assemble the application with routing, state, and middleware.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_movies)
        .service(get_movie)
        .service(create_movie)
        .service(update_movie)
        .service(delete_movie)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
