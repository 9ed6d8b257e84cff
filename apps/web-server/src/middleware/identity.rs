//! Identity loading middleware.
//!
//! Runs before every handler: reads the session cookie, resolves it to a
//! `User` row through the request's connection, and stores the outcome in
//! the request extensions. A missing, invalid, expired, or stale session
//! all resolve to anonymous; only datastore failures abort the request.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpMessage};

use quill_core::domain::User;
use quill_core::ports::{BaseRepository, SessionService};
use quill_infra::database::{RequestConnection, SqliteUserRepository};

use super::error::AppError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// The request's resolved identity. `None` means anonymous.
#[derive(Clone)]
pub struct CurrentIdentity(pub Option<User>);

/// Middleware factory for identity loading.
pub struct IdentityLoader {
    sessions: Arc<dyn SessionService>,
}

impl IdentityLoader {
    pub fn new(sessions: Arc<dyn SessionService>) -> Self {
        Self { sessions }
    }
}

impl<S, B> Transform<S, ServiceRequest> for IdentityLoader
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityLoaderService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityLoaderService {
            service: Rc::new(service),
            sessions: self.sessions.clone(),
        }))
    }
}

pub struct IdentityLoaderService<S> {
    service: Rc<S>,
    sessions: Arc<dyn SessionService>,
}

impl<S, B> Service<ServiceRequest> for IdentityLoaderService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let sessions = self.sessions.clone();

        Box::pin(async move {
            let identity = load_identity(&req, sessions.as_ref()).await?;
            req.extensions_mut().insert(CurrentIdentity(identity));

            service.call(req).await
        })
    }
}

/// Resolve the session cookie to a user record, or anonymous.
async fn load_identity(
    req: &ServiceRequest,
    sessions: &dyn SessionService,
) -> Result<Option<User>, AppError> {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return Ok(None);
    };

    // A token that fails verification is a logged-out browser, not an error.
    let Ok(claims) = sessions.decode(cookie.value()) else {
        return Ok(None);
    };

    let conn = req
        .extensions()
        .get::<RequestConnection>()
        .cloned()
        .ok_or_else(|| AppError::Internal("database scope not installed".to_string()))?;

    let db = conn.acquire().await?;

    let user = SqliteUserRepository::new(db)
        .find_by_id(claims.user_id)
        .await?;

    // A stale id (user row gone) resolves to anonymous.
    Ok(user)
}
