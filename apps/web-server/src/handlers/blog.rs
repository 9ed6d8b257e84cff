//! Blog handlers: listing and creation.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_core::ports::{BaseRepository, PostRepository};
use quill_infra::database::SqlitePostRepository;
use quill_shared::dto::{PostForm, PostView};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::db::Db;
use crate::middleware::error::AppResult;
use crate::pages;

use super::{html, redirect};

/// GET /blog/
pub async fn index(db: Db, identity: OptionalIdentity) -> AppResult<HttpResponse> {
    let conn = db.acquire().await?;
    let posts = SqlitePostRepository::new(conn).list_with_authors().await?;

    let views: Vec<PostView> = posts
        .into_iter()
        .map(|entry| PostView {
            id: entry.post.id,
            title: entry.post.title,
            body: entry.post.body,
            created: entry.post.created,
            author_username: entry.author_username,
        })
        .collect();

    let username = identity.0.as_ref().map(|u| u.username.as_str());

    Ok(html(pages::index_page(username, &views)))
}

/// GET /blog/create
pub async fn create_form(identity: Identity) -> HttpResponse {
    html(pages::create_page(&identity.user.username, None, "", ""))
}

/// POST /blog/create
pub async fn create(
    identity: Identity,
    db: Db,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if form.title.is_empty() {
        return Ok(html(pages::create_page(
            &identity.user.username,
            Some("Title is required"),
            &form.title,
            &form.body,
        )));
    }

    let body = if form.body.is_empty() {
        None
    } else {
        Some(form.body)
    };
    let post = Post::new(identity.user.id, form.title, body);

    let conn = db.acquire().await?;
    SqlitePostRepository::new(conn).save(post).await?;

    Ok(redirect("/blog/"))
}
