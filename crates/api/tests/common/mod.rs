#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use filmcat_api::config::ServerConfig;
use filmcat_api::router::build_app_router;
use filmcat_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 1,
        run_migrations: false,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Collect a JSON array of strings into a sorted vector, for set comparisons.
pub fn string_set(value: &serde_json::Value) -> Vec<String> {
    let mut items: Vec<String> = value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v.as_str().expect("expected a string").to_string())
        .collect();
    items.sort();
    items
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

pub async fn insert_filmwork(
    pool: &PgPool,
    title: &str,
    creation_date: Option<NaiveDate>,
    film_type: &str,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO content.film_work (title, description, creation_date, rating, type) \
         VALUES ($1, $2, $3, 8.7, $4) RETURNING id",
    )
    .bind(title)
    .bind(format!("About {title}"))
    .bind(creation_date)
    .bind(film_type)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_numbered_filmworks(pool: &PgPool, n: i32) {
    sqlx::query(
        "INSERT INTO content.film_work (title, rating) \
         SELECT 'Film ' || lpad(i::text, 4, '0'), 50 FROM generate_series(1, $1) AS i",
    )
    .bind(n)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_genre(pool: &PgPool, film_work_id: Uuid, name: &str) {
    let genre_id: Uuid = sqlx::query_scalar(
        "INSERT INTO content.genre (name) VALUES ($1) \
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO content.genre_film_work (film_work_id, genre_id) VALUES ($1, $2)")
        .bind(film_work_id)
        .bind(genre_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_person(pool: &PgPool, full_name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO content.person (full_name) VALUES ($1) RETURNING id")
        .bind(full_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_person(pool: &PgPool, film_work_id: Uuid, person_id: Uuid, role: &str) {
    sqlx::query(
        "INSERT INTO content.person_film_work (film_work_id, person_id, role) \
         VALUES ($1, $2, $3)",
    )
    .bind(film_work_id)
    .bind(person_id)
    .bind(role)
    .execute(pool)
    .await
    .unwrap();
}
