#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Shared fixtures for the integration tests.
//!
//! Every test gets its own in-memory SQLite database, migrated with the real
//! `Migrator`, and a small catalog built through the public services.

#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use platillos::entities::{local, Axis, TagRef};
use platillos::models::dish_model::CreateDishRequest;
use platillos::services::dish_service::DishService;
use platillos::services::tagging_service::TaggingService;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // One connection keeps the in-memory database alive for the whole test.
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub struct Catalog {
    pub db: DatabaseConnection,
    pub la_esquina: i64,
    pub el_guero: i64,
    /// Tacos al pastor: Tacos, Mexicana / Picante / Cerdo, Piña
    pub pastor: i64,
    /// Tacos de cajeta: Tacos, Postres / Dulce / (none)
    pub cajeta: i64,
    /// Torta ahogada: Tortas / Picante / Cerdo, Chile
    pub torta: i64,
    /// Agua de horchata: no tags at all
    pub horchata: i64,
}

pub fn dish_request(name: &str, description: &str, cents: i64, local_id: i64) -> CreateDishRequest {
    CreateDishRequest {
        name: name.to_string(),
        description: description.to_string(),
        photo_url: format!("https://cdn.example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
        price: Decimal::new(cents, 2),
        local_id,
    }
}

pub async fn insert_local(db: &DatabaseConnection, name: &str) -> i64 {
    local::ActiveModel {
        name: Set(name.to_string()),
        photo_url: Set(Some(format!("https://cdn.example.com/locales/{name}.png"))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert local")
    .id
}

pub async fn tag(db: &DatabaseConnection, axis: Axis, name: &str) -> TagRef {
    let existing = TaggingService::list_vocabulary(db, axis)
        .await
        .unwrap()
        .into_iter()
        .find(|t| t.name == name);

    match existing {
        Some(t) => t,
        None => TaggingService::create_vocabulary_tag(db, axis, name.to_string()).await.unwrap(),
    }
}

pub async fn tag_dish(db: &DatabaseConnection, dish_id: i64, axis: Axis, names: &[&str]) {
    for name in names {
        let t = tag(db, axis, name).await;
        TaggingService::assign_tag(db, dish_id, axis, t.id).await.unwrap();
    }
}

pub async fn seed_catalog() -> Catalog {
    let db = setup_db().await;

    let la_esquina = insert_local(&db, "La Esquina").await;
    let el_guero = insert_local(&db, "El Güero").await;

    let pastor = DishService::create_dish(
        &db,
        dish_request("Tacos al pastor", "Cerdo adobado con piña", 8550, la_esquina),
    )
    .await
    .unwrap()
    .id;
    let cajeta = DishService::create_dish(
        &db,
        dish_request("Tacos de cajeta", "Tortilla dulce con cajeta", 4025, la_esquina),
    )
    .await
    .unwrap()
    .id;
    let torta = DishService::create_dish(
        &db,
        dish_request("Torta ahogada", "Birote bañado en salsa de chile", 9575, el_guero),
    )
    .await
    .unwrap()
    .id;
    let horchata = DishService::create_dish(
        &db,
        dish_request("Agua de horchata", "Bebida fresca de arroz", 3050, el_guero),
    )
    .await
    .unwrap()
    .id;

    tag_dish(&db, pastor, Axis::Categorias, &["Tacos", "Mexicana"]).await;
    tag_dish(&db, pastor, Axis::Etiquetas, &["Picante"]).await;
    tag_dish(&db, pastor, Axis::Ingredientes, &["Cerdo", "Piña"]).await;

    tag_dish(&db, cajeta, Axis::Categorias, &["Tacos", "Postres"]).await;
    tag_dish(&db, cajeta, Axis::Etiquetas, &["Dulce"]).await;

    tag_dish(&db, torta, Axis::Categorias, &["Tortas"]).await;
    tag_dish(&db, torta, Axis::Etiquetas, &["Picante"]).await;
    tag_dish(&db, torta, Axis::Ingredientes, &["Cerdo", "Chile"]).await;

    Catalog { db, la_esquina, el_guero, pastor, cajeta, torta, horchata }
}
