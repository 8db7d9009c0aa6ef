use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use pokedex::api;
use pokedex::config::Config;
use pokedex::db;
use pokedex::infrastructure::AppState;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test router over an in-memory store
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    api::api_router(AppState::new(db, Config::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_create_and_get_pokemon() {
    let app = setup_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/v2/pokemon",
        Some(json!({"no": 25, "name": "Pikachu"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "pikachu");
    assert!(created.get("created_at").is_none());

    let id = created["id"].as_str().unwrap().to_string();
    for term in ["25", id.as_str(), "PIKACHU"] {
        let (status, found) = send(&app, "GET", &format!("/v2/pokemon/{}", term), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["id"], created["id"]);
    }
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let app = setup_app().await;
    let payload = json!({"no": 1, "name": "bulbasaur"});

    let (status, _) = send(&app, "POST", "/v2/pokemon", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/v2/pokemon", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exists in db"));
}

#[tokio::test]
async fn test_create_invalid_input() {
    let app = setup_app().await;

    let (status, _) = send(&app, "POST", "/v2/pokemon", Some(json!({"no": 0, "name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/v2/pokemon", Some(json!({"no": 1, "name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown fields are rejected by the extractor
    let (status, _) = send(
        &app,
        "POST",
        "/v2/pokemon",
        Some(json!({"no": 1, "name": "x", "level": 5})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_get_unknown_pokemon_not_found() {
    let app = setup_app().await;

    let (status, body) = send(&app, "GET", "/v2/pokemon/missingno", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missingno"));
}

#[tokio::test]
async fn test_list_pokemon_pagination() {
    let app = setup_app().await;
    for no in 1..=12 {
        let payload = json!({"no": no, "name": format!("pokemon-{}", no)});
        send(&app, "POST", "/v2/pokemon", Some(payload)).await;
    }

    let (status, page) = send(&app, "GET", "/v2/pokemon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 10);
    for pokemon in page.as_array().unwrap() {
        assert!(pokemon.get("created_at").is_none());
        assert!(pokemon.get("updated_at").is_none());
    }

    let (status, page) = send(&app, "GET", "/v2/pokemon?limit=5&offset=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let nos: Vec<i64> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["no"].as_i64().unwrap())
        .collect();
    assert_eq!(nos, vec![11, 12]);

    let (status, _) = send(&app, "GET", "/v2/pokemon?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/v2/pokemon?offset=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pokemon_oversized_window_is_bad_request() {
    let app = setup_app().await;
    send(&app, "POST", "/v2/pokemon", Some(json!({"no": 1, "name": "bulbasaur"}))).await;

    let (status, body) = send(&app, "GET", "/v2/pokemon?offset=18446744073709551615", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("must not exceed"));

    let (status, _) = send(&app, "GET", "/v2/pokemon?limit=9223372036854775808", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The largest accepted value still answers normally
    let (status, page) = send(&app, "GET", "/v2/pokemon?limit=9223372036854775807", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_pokemon() {
    let app = setup_app().await;
    send(&app, "POST", "/v2/pokemon", Some(json!({"no": 150, "name": "mew"}))).await;

    let (status, updated) = send(
        &app,
        "PATCH",
        "/v2/pokemon/mew",
        Some(json!({"name": "MEWTWO"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "mewtwo");
    assert_eq!(updated["no"], 150);

    let (status, _) = send(
        &app,
        "PATCH",
        "/v2/pokemon/mew",
        Some(json!({"name": "mew"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_pokemon() {
    let app = setup_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/v2/pokemon",
        Some(json!({"no": 4, "name": "charmander"})),
    )
    .await;
    let uri = format!("/v2/pokemon/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/v2/pokemon/charmander", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
