use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use db::DBService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{AppState, router};
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::MIGRATOR.run(&pool).await.unwrap();
    router(AppState {
        db: DBService::from_pool(pool),
    })
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn rendezvous_payload() -> Value {
    json!({
        "name": "Dupont",
        "prenom": "Marie",
        "mail": "marie.dupont@example.com",
        "numero": 612345678i64,
        "adresse": "12 rue des Lilas",
        "code": 75011,
        "ville": "Paris",
        "domaine": "vidange"
    })
}

#[tokio::test]
async fn rendezvous_crud_flow() {
    let app = test_app().await;

    let (status, body) = request(&app, "POST", "/api/rendezvous", Some(rendezvous_payload())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = request(&app, "GET", &format!("/api/rendezvous/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Dupont"));

    let mut changed = rendezvous_payload();
    changed["ville"] = json!("Lyon");
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/rendezvous/{id}"),
        Some(changed),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ville"], json!("Lyon"));

    let (status, _) = request(&app, "DELETE", &format!("/api/rendezvous/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", &format!("/api/rendezvous/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_rendezvous_is_an_explicit_404() {
    let app = test_app().await;
    let (status, body) = request(&app, "GET", "/api/rendezvous/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn invalid_name_is_rejected() {
    let app = test_app().await;

    let mut payload = rendezvous_payload();
    payload["name"] = json!("ab");
    let (status, body) = request(&app, "POST", "/api/rendezvous", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));

    let mut payload = rendezvous_payload();
    payload["name"] = json!("     ");
    let (status, _) = request(&app, "POST", "/api/rendezvous", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn duplicate_user_email_conflicts() {
    let app = test_app().await;

    let payload = json!({
        "email": "admin@garage.fr",
        "roles": ["ROLE_ADMIN"],
        "password": "changeme",
        "firstname": "Paul",
        "lastname": "Bernard",
        "birthday": "1988-04-12"
    });

    let (status, _) = request(&app, "POST", "/api/users", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&app, "POST", "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn user_responses_never_expose_the_password() {
    let app = test_app().await;

    let payload = json!({
        "email": "gerant@garage.fr",
        "roles": ["ROLE_ADMIN"],
        "password": "changeme",
        "firstname": "Paul",
        "lastname": "Bernard",
        "birthday": "1988-04-12"
    });
    let (status, body) = request(&app, "POST", "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn devis_accepts_duplicates_and_assigns_timestamp() {
    let app = test_app().await;

    let payload = json!({
        "firstname": "Jean",
        "price": 149.90,
        "lastname": "Martin",
        "email": "jean.martin@example.com"
    });

    let (status, body) = request(&app, "POST", "/api/devis", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["create_at"].is_string());

    // No uniqueness constraint outside user.email.
    let (status, _) = request(&app, "POST", "/api/devis", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn literals_endpoint_serves_general_and_scoped_bundles() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/api/literals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["save"], json!("Save"));

    let (status, body) = request(
        &app,
        "GET",
        "/api/literals?lang=fr&context=rendezvous",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["createdMessage"], json!("Rendez-vous cree"));

    let (status, _) = request(&app, "GET", "/api/literals?lang=de", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calendar_rejects_inverted_ranges() {
    let app = test_app().await;

    let payload = json!({
        "title": "Controle technique",
        "start": "2026-09-01T10:00:00Z",
        "end": "2026-09-01T09:00:00Z",
        "description": "Berline",
        "all_day": false,
        "background_color": "#1e88e5",
        "border_color": "#1565c0",
        "text_color": "#ffffff"
    });
    let (status, _) = request(&app, "POST", "/api/calendar", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
