//! Authentication extractors - the access gate.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError};

use quill_core::domain::User;

use super::identity::CurrentIdentity;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require a logged-in caller:
/// ```ignore
/// async fn create(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.username)
/// }
/// ```
/// Anonymous callers are redirected to the login page; the handler body
/// never runs.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
}

/// Optional identity extractor - yields `None` instead of redirecting.
pub struct OptionalIdentity(pub Option<User>);

/// Rejection raised when an anonymous caller hits a gated route.
#[derive(Debug)]
pub struct LoginRequired;

impl std::fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "login required")
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/auth/login"))
            .finish()
    }
}

fn loaded_identity(req: &HttpRequest) -> Option<User> {
    req.extensions()
        .get::<CurrentIdentity>()
        .and_then(|slot| slot.0.clone())
}

impl FromRequest for Identity {
    type Error = LoginRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match loaded_identity(req) {
            Some(user) => ready(Ok(Identity { user })),
            None => ready(Err(LoginRequired)),
        }
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(loaded_identity(req))))
    }
}
