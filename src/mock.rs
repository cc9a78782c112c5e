use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::models::{Hero, NewHero};

type Db = Arc<Mutex<Vec<Hero>>>;

pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Mr. Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// In-memory hero api with the standard seed data.
pub fn router() -> Router {
    router_with(seed_heroes())
}

/// In-memory hero api over caller-supplied records.
pub fn router_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(Mutex::new(heroes));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(add_hero).put(update_hero),
        )
        // search requests arrive with a trailing slash: /api/heroes/?name=term
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

/// Bind and serve the mock api until shutdown.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("hero api listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}

#[derive(Deserialize)]
struct SearchParams {
    name: Option<String>,
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.lock().expect("Mutex poisoned");
    let heroes = match params.name.as_deref() {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            heroes
                .iter()
                .filter(|h| h.name.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        _ => heroes.clone(),
    };
    Json(heroes)
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.lock().expect("Mutex poisoned");
    heroes
        .iter()
        .find(|h| h.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn add_hero(
    State(db): State<Db>,
    Json(candidate): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.lock().expect("Mutex poisoned");
    let id = heroes.iter().map(|h| h.id).max().map_or(11, |max| max + 1);
    let hero = Hero {
        id,
        name: candidate.name,
    };
    heroes.push(hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn update_hero(
    State(db): State<Db>,
    Json(hero): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.lock().expect("Mutex poisoned");
    match heroes.iter_mut().find(|h| h.id == hero.id) {
        Some(existing) => {
            existing.name = hero.name.clone();
            Ok(Json(hero))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.lock().expect("Mutex poisoned");
    match heroes.iter().position(|h| h.id == id) {
        Some(pos) => Ok(Json(heroes.remove(pos))),
        None => Err(StatusCode::NOT_FOUND),
    }
}
