//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod health;

use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_redirect))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::get().to(auth::register_form))
                .route("/register", web::post().to(auth::register))
                .route("/login", web::get().to(auth::login_form))
                .route("/login", web::post().to(auth::login))
                .route("/logout", web::get().to(auth::logout)),
        )
        .service(
            web::scope("/blog")
                .route("/", web::get().to(blog::index))
                .route("/create", web::get().to(blog::create_form))
                .route("/create", web::post().to(blog::create)),
        );
}

/// The application root aliases the post listing.
async fn index_redirect() -> HttpResponse {
    redirect("/blog/")
}

/// An HTML page response.
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// A see-other redirect.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
