//! # Quill Web Server
//!
//! The actix-web application: configuration, request-scoped database
//! middleware, identity loading, and the auth/blog handlers. The binary in
//! `main.rs` and the integration tests build the same `app`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod state;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use state::AppState;

/// Assemble the application around its state.
pub fn app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state.clone()))
        .configure(handlers::configure_routes)
        // Registered inner-to-outer: identity loading runs inside the
        // connection scope, so the user lookup reuses the request's
        // connection and teardown still releases it afterwards.
        .wrap(middleware::identity::IdentityLoader::new(
            state.sessions.clone(),
        ))
        .wrap(middleware::db::DbScope::new(state.db.clone()))
}
