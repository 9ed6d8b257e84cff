//! End-to-end flows for the post listing and creation.

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test;
use chrono::{TimeDelta, Utc};
use sea_orm::{ActiveModelTrait, Database, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use quill_core::ports::SessionService;
use quill_infra::auth::{JwtSessionService, SessionConfig};
use quill_infra::database::entity::{post, user};
use quill_shared::dto::{LoginForm, PostForm, RegisterForm};

mod common;

async fn logged_in_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<B>,
            Error = actix_web::Error,
        >,
    B: actix_web::body::MessageBody,
{
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/auth/register")
            .set_form(RegisterForm {
                username: "alice".to_string(),
                password: "hunter2".to_string(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_form(LoginForm {
                username: "alice".to_string(),
                password: "hunter2".to_string(),
            })
            .to_request(),
    )
    .await;

    resp.response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie")
        .into_owned()
}

#[actix_web::test]
async fn anonymous_create_is_redirected_and_inserts_nothing() {
    let db = common::test_db().await;
    let app = test::init_service(web_server::app(common::test_state(db.settings.clone()))).await;

    for req in [
        test::TestRequest::get().uri("/blog/create").to_request(),
        test::TestRequest::post()
            .uri("/blog/create")
            .set_form(PostForm {
                title: "sneaky".to_string(),
                body: String::new(),
            })
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/auth/login"
        );
    }

    let conn = Database::connect(db.settings.url.as_str()).await.unwrap();
    let count = post::Entity::find().count(&conn).await.unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn authenticated_create_inserts_one_post_owned_by_the_caller() {
    let db = common::test_db().await;
    let app = test::init_service(web_server::app(common::test_state(db.settings.clone()))).await;
    let session = logged_in_cookie(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blog/create")
            .cookie(session)
            .set_form(PostForm {
                title: "Hello".to_string(),
                body: "First post.".to_string(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/blog/");

    let conn = Database::connect(db.settings.url.as_str()).await.unwrap();
    let author = user::Entity::find().one(&conn).await.unwrap().unwrap();
    let posts = post::Entity::find().all(&conn).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].body.as_deref(), Some("First post."));
    assert_eq!(posts[0].author_id, author.id);
}

#[actix_web::test]
async fn empty_title_is_rejected_with_input_preserved() {
    let db = common::test_db().await;
    let app = test::init_service(web_server::app(common::test_state(db.settings.clone()))).await;
    let session = logged_in_cookie(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blog/create")
            .cookie(session)
            .set_form(PostForm {
                title: String::new(),
                body: "kept draft text".to_string(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Title is required"));
    assert!(body.contains("kept draft text"));

    let conn = Database::connect(db.settings.url.as_str()).await.unwrap();
    let count = post::Entity::find().count(&conn).await.unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn listing_is_ordered_newest_first() {
    let db = common::test_db().await;

    // Seed three posts with distinct creation times, inserted out of order.
    let conn = Database::connect(db.settings.url.as_str()).await.unwrap();
    let author_id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(author_id),
        username: Set("alice".to_string()),
        password: Set("$argon2id$stub".to_string()),
    }
    .insert(&conn)
    .await
    .unwrap();

    let base = Utc::now();
    for (title, offset_minutes) in [("middle", 10), ("oldest", 0), ("newest", 20)] {
        post::ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(author_id),
            title: Set(title.to_string()),
            body: Set(None),
            created: Set((base + TimeDelta::minutes(offset_minutes)).into()),
        }
        .insert(&conn)
        .await
        .unwrap();
    }
    conn.close().await.unwrap();

    let app = test::init_service(web_server::app(common::test_state(db.settings.clone()))).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    let newest = body.find("newest").expect("newest in listing");
    let middle = body.find("middle").expect("middle in listing");
    let oldest = body.find("oldest").expect("oldest in listing");
    assert!(newest < middle, "newest post should render first");
    assert!(middle < oldest, "oldest post should render last");

    assert!(body.contains("alice"), "listing shows the author username");
}

#[actix_web::test]
async fn stale_session_for_a_deleted_user_is_anonymous() {
    let db = common::test_db().await;
    let app = test::init_service(web_server::app(common::test_state(db.settings.clone()))).await;

    // A validly signed token whose user id has no row behind it.
    let sessions = JwtSessionService::new(SessionConfig {
        secret: common::TEST_SECRET.to_string(),
        ..SessionConfig::default()
    });
    let token = sessions.issue(Uuid::new_v4()).unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/blog/create")
            .cookie(Cookie::new("session", token))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/login"
    );
}
