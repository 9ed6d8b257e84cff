//! Request-scoped database middleware.
//!
//! `DbScope` installs an unopened `RequestConnection` into every request's
//! extensions and guarantees it is released after the response is produced,
//! whether the handler succeeded, failed, or redirected early. Handlers and
//! later middleware reach the connection through the `Db` extractor.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use sea_orm::DbConn;

use quill_infra::database::{ConnectionSettings, RequestConnection};

use super::error::AppError;

/// Extractor handing handlers the request's connection manager.
#[derive(Clone)]
pub struct Db(RequestConnection);

impl Db {
    /// The request's database connection, opened on first use.
    pub async fn acquire(&self) -> Result<DbConn, AppError> {
        self.0.acquire().await.map_err(AppError::from)
    }

    /// The underlying request-scoped handle.
    pub fn connection(&self) -> &RequestConnection {
        &self.0
    }
}

impl FromRequest for Db {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<RequestConnection>() {
            Some(conn) => ready(Ok(Db(conn.clone()))),
            None => {
                tracing::error!("RequestConnection missing - is DbScope registered?");
                ready(Err(
                    AppError::Internal("database scope not installed".to_string()).into(),
                ))
            }
        }
    }
}

/// Middleware factory installing the request-scoped connection.
pub struct DbScope {
    settings: ConnectionSettings,
}

impl DbScope {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }
}

impl<S, B> Transform<S, ServiceRequest> for DbScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = DbScopeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DbScopeService {
            service: Rc::new(service),
            settings: self.settings.clone(),
        }))
    }
}

pub struct DbScopeService<S> {
    service: Rc<S>,
    settings: ConnectionSettings,
}

impl<S, B> Service<ServiceRequest> for DbScopeService<S>
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
        let conn = RequestConnection::new(self.settings.clone());

        req.extensions_mut().insert(conn.clone());

        Box::pin(async move {
            let result = service.call(req).await;

            // Teardown: runs on success and failure alike.
            if let Err(e) = conn.release().await {
                tracing::error!("failed to release request connection: {e}");
            }

            result
        })
    }
}
