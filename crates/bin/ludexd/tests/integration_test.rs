//! End-to-end smoke tests for the full ludexd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repositories, real services, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use ludex_adapter_http_axum::router;
use ludex_adapter_http_axum::state::AppState;
use ludex_adapter_storage_sqlite_sqlx::{
    Config, SqliteBakedGoodRepository, SqliteBakeryRepository, SqliteGameRepository,
    SqliteReviewRepository, SqliteUserRepository,
};
use ludex_app::services::baked_good_service::BakedGoodService;
use ludex_app::services::bakery_service::BakeryService;
use ludex_app::services::game_service::GameService;
use ludex_app::services::review_service::ReviewService;
use ludex_app::services::user_service::UserService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let user_repo = SqliteUserRepository::new(pool.clone());
    let game_repo = SqliteGameRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool.clone());
    let bakery_repo = SqliteBakeryRepository::new(pool.clone());
    let baked_good_repo = SqliteBakedGoodRepository::new(pool);

    let state = AppState::new(
        UserService::new(user_repo),
        GameService::new(game_repo),
        ReviewService::new(review_repo),
        BakeryService::new(bakery_repo),
        BakedGoodService::new(baked_good_repo),
    );

    router::build(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &axum::Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a user and return its id.
async fn seed_user(app: &axum::Router) -> i64 {
    let resp = send(app, form("POST", "/users", "name=ada")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await["id"].as_i64().unwrap()
}

/// POST a game and return its id.
async fn seed_game(app: &axum::Router) -> i64 {
    let resp = send(
        app,
        form("POST", "/games", "title=Hades&genre=Roguelike&platform=PC"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await["id"].as_i64().unwrap()
}

/// POST a bakery and return its id.
async fn seed_bakery(app: &axum::Router) -> i64 {
    let resp = send(app, form("POST", "/bakeries", "name=Crumb+%26+Co")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Index & health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(&app, get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_index_text_at_root() {
    let app = app().await;
    let resp = send(&app, get("/")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert_eq!(body, "Index for Game/Review/User API");
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_games_as_json_array() {
    let app = app().await;
    seed_game(&app).await;

    let resp = send(&app, get("/games")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Hades");
}

#[tokio::test]
async fn should_get_game_by_id() {
    let app = app().await;
    let id = seed_game(&app).await;

    let resp = send(&app, get(&format!("/games/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["platform"], "PC");
}

#[tokio::test]
async fn should_return_not_found_when_game_absent() {
    let app = app().await;

    let resp = send(&app, get("/games/999")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(
        body["message"],
        "This game does not exist in our database. Please try again."
    );
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_and_list_users() {
    let app = app().await;
    seed_user(&app).await;

    let resp = send(&app, get("/users")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "ada");
}

#[tokio::test]
async fn should_return_not_found_when_user_absent() {
    let app = app().await;

    let resp = send(&app, get("/users/999")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert!(body["message"].is_string());
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_review_with_201() {
    let app = app().await;
    let user_id = seed_user(&app).await;
    let game_id = seed_game(&app).await;

    let resp = send(
        &app,
        form(
            "POST",
            "/reviews",
            &format!("score=5&comment=great&game_id={game_id}&user_id={user_id}"),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["score"], 5);
    assert_eq!(body["comment"], "great");
}

#[tokio::test]
async fn should_get_review_by_id_with_matching_body() {
    let app = app().await;
    let user_id = seed_user(&app).await;
    let game_id = seed_game(&app).await;
    let resp = send(
        &app,
        form(
            "POST",
            "/reviews",
            &format!("score=4&comment=solid&game_id={game_id}&user_id={user_id}"),
        ),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(&app, get(&format!("/reviews/{id}"))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn should_return_not_found_when_review_absent() {
    let app = app().await;

    let resp = send(&app, get("/reviews/999")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(
        body["message"],
        "This record does not exist in our database. Please try again."
    );
}

#[tokio::test]
async fn should_patch_review_and_persist_changes() {
    let app = app().await;
    let user_id = seed_user(&app).await;
    let game_id = seed_game(&app).await;
    let resp = send(
        &app,
        form(
            "POST",
            "/reviews",
            &format!("score=5&comment=great&game_id={game_id}&user_id={user_id}"),
        ),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        form("PATCH", &format!("/reviews/{id}"), "comment=aged+badly"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["comment"], "aged badly");
    assert_eq!(body["score"], 5);

    let resp = send(&app, get(&format!("/reviews/{id}"))).await;
    let body = json_body(resp).await;
    assert_eq!(body["comment"], "aged badly");
}

#[tokio::test]
async fn should_return_not_found_when_patching_absent_review() {
    let app = app().await;

    let resp = send(&app, form("PATCH", "/reviews/999", "score=1")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn should_delete_review_and_confirm() {
    let app = app().await;
    let user_id = seed_user(&app).await;
    let game_id = seed_game(&app).await;
    let resp = send(
        &app,
        form(
            "POST",
            "/reviews",
            &format!("score=5&comment=great&game_id={game_id}&user_id={user_id}"),
        ),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/reviews/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["delete_successful"], true);
    assert_eq!(body["message"], "Review deleted.");

    let resp = send(&app, get(&format!("/reviews/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_server_error_when_review_foreign_key_dangles() {
    let app = app().await;

    let resp = send(
        &app,
        form(
            "POST",
            "/reviews",
            "score=5&comment=great&game_id=999&user_id=999",
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ---------------------------------------------------------------------------
// Bakeries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_patch_bakery_name_and_reflect_on_get() {
    let app = app().await;
    let id = seed_bakery(&app).await;

    let resp = send(
        &app,
        form("PATCH", &format!("/bakeries/{id}"), "name=New+Name"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "New Name");

    let resp = send(&app, get(&format!("/bakeries/{id}"))).await;
    let body = json_body(resp).await;
    assert_eq!(body["name"], "New Name");
}

#[tokio::test]
async fn should_return_not_found_when_patching_absent_bakery() {
    let app = app().await;

    let resp = send(&app, form("PATCH", "/bakeries/999", "name=Nope")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(
        body["message"],
        "This bakery does not exist in our database. Please try again."
    );
}

#[tokio::test]
async fn should_reject_unknown_field_when_patching_bakery() {
    let app = app().await;
    let id = seed_bakery(&app).await;

    let resp = send(
        &app,
        form("PATCH", &format!("/bakeries/{id}"), "owner=mallory"),
    )
    .await;

    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Baked goods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_baked_good_with_201() {
    let app = app().await;
    let bakery_id = seed_bakery(&app).await;

    let resp = send(
        &app,
        form(
            "POST",
            "/baked_goods",
            &format!("name=Croissant&description=Flaky&bakery_id={bakery_id}&price=4"),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Croissant");
    assert_eq!(body["price"], 4);
    assert_eq!(body["bakery_id"], bakery_id);
}

#[tokio::test]
async fn should_delete_baked_good_and_confirm() {
    let app = app().await;
    let bakery_id = seed_bakery(&app).await;
    let resp = send(
        &app,
        form(
            "POST",
            "/baked_goods",
            &format!("name=Croissant&description=Flaky&bakery_id={bakery_id}&price=4"),
        ),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/baked_goods/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["delete_successful"], true);
    assert_eq!(body["message"], "Baked good deleted.");

    let resp = send(&app, get(&format!("/baked_goods/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_absent_baked_good() {
    let app = app().await;

    let resp = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/baked_goods/999")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(
        body["message"],
        "This baked good does not exist in our database. Please try again."
    );
}
