//! Authentication handlers: register, login, logout.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PasswordService, SessionService, UserRepository};
use quill_infra::database::SqliteUserRepository;
use quill_shared::dto::{LoginForm, RegisterForm};

use crate::middleware::db::Db;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::identity::SESSION_COOKIE;
use crate::pages;
use crate::state::AppState;

use super::{html, redirect};

/// GET /auth/register
pub async fn register_form() -> HttpResponse {
    html(pages::register_page(None, ""))
}

/// POST /auth/register
pub async fn register(
    state: web::Data<AppState>,
    db: Db,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    // Validate before any datastore access.
    let error = if form.username.is_empty() {
        Some("Username is required.")
    } else if form.password.is_empty() {
        Some("Password is required.")
    } else {
        None
    };

    if let Some(message) = error {
        return Ok(html(pages::register_page(Some(message), &form.username)));
    }

    let password_hash = state
        .passwords
        .hash(&form.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let conn = db.acquire().await?;
    let users = SqliteUserRepository::new(conn);

    match users
        .save(User::new(form.username.clone(), password_hash))
        .await
    {
        Ok(_) => Ok(redirect("/auth/login")),
        Err(RepoError::Constraint(_)) => {
            let message = format!("user {} is already registered.", form.username);
            Ok(html(pages::register_page(Some(&message), &form.username)))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /auth/login
pub async fn login_form() -> HttpResponse {
    html(pages::login_page(None, ""))
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    db: Db,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let conn = db.acquire().await?;
    let users = SqliteUserRepository::new(conn);

    let user = match users.find_by_username(&form.username).await? {
        None => {
            return Ok(html(pages::login_page(
                Some("Incorrect username"),
                &form.username,
            )));
        }
        Some(user) => user,
    };

    if !state.passwords.verify(&form.password, &user.password_hash) {
        return Ok(html(pages::login_page(
            Some("incorrect password"),
            &form.username,
        )));
    }

    // A fresh token replaces whatever session the browser held before.
    let token = state
        .sessions
        .issue(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(session_cookie(token))
        .finish())
}

/// GET /auth/logout
pub async fn logout() -> HttpResponse {
    // An expired empty cookie clears the session unconditionally.
    let mut cookie = session_cookie(String::new());
    cookie.set_max_age(Duration::ZERO);

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish()
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}
