#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests through the router: status codes and response envelopes.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use platillos::entities::Axis;
use platillos::routes::create_routes;
use platillos::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> (Router, common::Catalog) {
    let catalog = common::seed_catalog().await;
    let router = create_routes(AppState { db: catalog.db.clone() });
    (router, catalog)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

#[tokio::test]
async fn detail_endpoint_returns_named_axes() {
    let (app, c) = app().await;

    let (status, body) = send(&app, Method::GET, &format!("/api/platillos/{}", c.pastor), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["code"], "DISH_FETCHED");
    assert_eq!(body["data"]["name"], "Tacos al pastor");
    assert_eq!(body["data"]["local"]["name"], "La Esquina");
    assert_eq!(body["data"]["categorias"], json!(["Tacos", "Mexicana"]));
    assert_eq!(body["data"]["ingredientes"], json!(["Cerdo", "Piña"]));
}

#[tokio::test]
async fn missing_dish_is_a_404_envelope() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/platillos/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn listing_includes_local_object() {
    let (app, c) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/platillos", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["id"], c.pastor);
    assert_eq!(rows[0]["localId"], c.la_esquina);
    assert_eq!(rows[0]["local"]["name"], "La Esquina");
    assert!(rows[0].get("categorias").is_none());
}

#[tokio::test]
async fn search_endpoint_applies_query_string() {
    let (app, c) = app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/platillos/search?q=tacos&etiquetas=Picante",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], c.pastor);
    assert_eq!(rows[0]["local"], "La Esquina");
}

#[tokio::test]
async fn create_returns_201_with_stored_row() {
    let (app, c) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/platillos",
        Some(json!({
            "name": "Enchiladas suizas",
            "description": "Tortillas bañadas en salsa verde con crema",
            "photoUrl": "https://cdn.example.com/enchiladas.jpg",
            "price": "120.50",
            "localId": c.el_guero,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "DISH_CREATED");
    assert_eq!(body["data"]["name"], "Enchiladas suizas");
    assert_eq!(body["data"]["localId"], c.el_guero);

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = send(&app, Method::GET, &format!("/api/platillos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_body_is_rejected_with_field_details() {
    let (app, c) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/platillos",
        Some(json!({
            "name": "   ",
            "description": "Sin nombre",
            "photoUrl": "https://cdn.example.com/x.jpg",
            "price": "-1",
            "localId": c.el_guero,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "price"]);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (app, _) = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/platillos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn bulk_create_returns_every_row() {
    let (app, c) = app().await;

    let item = |name: &str| {
        json!({
            "name": name,
            "description": "Hecho al momento",
            "photoUrl": "https://cdn.example.com/x.jpg",
            "price": "45.25",
            "localId": c.la_esquina,
        })
    };

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/platillos/multiple",
        Some(json!([item("Quesadilla"), item("Gordita")])),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, listing) = send(&app, Method::GET, "/api/platillos", None).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn patch_updates_and_missing_dish_is_404() {
    let (app, c) = app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/platillos/{}", c.horchata),
        Some(json!({ "name": "Agua de jamaica" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Agua de jamaica");
    assert_eq!(body["data"]["description"], "Bebida fresca de arroz");

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/platillos/9999",
        Some(json!({ "name": "Fantasma" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_then_fetch_is_404() {
    let (app, c) = app().await;
    let uri = format!("/api/platillos/{}", c.cajeta);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "DISH_DELETED");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tag_assignment_conflicts_on_repeat() {
    let (app, c) = app().await;
    let dulce = common::tag(&c.db, Axis::Etiquetas, "Dulce").await;
    let uri = format!("/api/platillos/{}/etiquetas", c.horchata);

    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "tagId": dulce.id }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Dulce");

    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "tagId": dulce.id }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Dulce");

    let (status, _) = send(&app, Method::DELETE, &format!("{uri}/{}", dulce.id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &format!("{uri}/{}", dulce.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vocabulary_endpoints() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/categorias", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mexicana", "Postres", "Tacos", "Tortas"]);

    let (status, _) = send(&app, Method::POST, "/api/ingredientes", Some(json!({ "name": "Aguacate" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, "/api/ingredientes", Some(json!({ "name": "Aguacate" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unparseable_path_segment_is_a_400_envelope() {
    let (app, c) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/platillos/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "INVALID_PATH");

    let uri = format!("/api/platillos/{}/etiquetas/xyz", c.pastor);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PATH");
}
