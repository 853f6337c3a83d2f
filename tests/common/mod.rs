// SPDX-License-Identifier: GPL-3.0-only

#![allow(dead_code)]

use std::{
    collections::HashSet,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use starryview::{Runtime, StarryConfig, core::MemoryStore};

pub const PIKACHU_FLAVOR: &str = "When several of\nthese POKéMON gather,\x0ctheir electricity could\nbuild and cause lightning storms.";

/// In-memory stand-in for PokéAPI serving `total` Pokémon
#[derive(Debug, Default)]
pub struct FakeDex {
    pub total: u32,
    /// Pokédex numbers answered with a 500
    pub failing: HashSet<u32>,
    /// Queries whose species lookup is a 404 while the Pokémon itself resolves
    pub failing_species: HashSet<String>,
    /// Answer lower ids last so completion order is the reverse of request order
    pub reverse_latency: bool,
    pub pokemon_requests: AtomicUsize,
    pub species_requests: AtomicUsize,
}

impl FakeDex {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn name_of(id: u32) -> String {
        match id {
            1 => String::from("bulbasaur"),
            25 => String::from("pikachu"),
            _ => format!("mon-{id}"),
        }
    }

    fn resolve(&self, query: &str) -> Option<u32> {
        let id = match query.parse::<u32>() {
            Ok(id) => id,
            Err(_) => match query {
                "bulbasaur" => 1,
                "pikachu" => 25,
                _ => query.strip_prefix("mon-")?.parse().ok()?,
            },
        };

        (1..=self.total).contains(&id).then_some(id)
    }

    fn pokemon_body(id: u32) -> Value {
        // every tenth Pokémon has no sprite
        let sprite = if id % 10 == 0 {
            Value::Null
        } else {
            json!(format!("https://sprites.test/{id}.png"))
        };

        json!({
            "id": id,
            "name": Self::name_of(id),
            "sprites": { "front_default": sprite, "back_default": null },
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://x/type/13/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://x/type/3/" } }
            ],
            "height": 4,
            "weight": 60,
            "base_experience": 112
        })
    }

    fn species_body(id: u32) -> Value {
        let english = if id == 25 {
            String::from(PIKACHU_FLAVOR)
        } else {
            format!("Entry for\n{}.", Self::name_of(id))
        };

        json!({
            "id": id,
            "name": Self::name_of(id),
            "flavor_text_entries": [
                { "flavor_text": "でんきを ためこむ", "language": { "name": "ja", "url": "https://x/language/1/" } },
                { "flavor_text": english, "language": { "name": "en", "url": "https://x/language/9/" } },
                { "flavor_text": "Il stocke de l'électricité.", "language": { "name": "fr", "url": "https://x/language/5/" } }
            ]
        })
    }
}

async fn pokemon(State(dex): State<Arc<FakeDex>>, Path(query): Path<String>) -> Response {
    dex.pokemon_requests.fetch_add(1, Ordering::SeqCst);

    let Some(id) = dex.resolve(&query) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    if dex.reverse_latency {
        let delay = u64::from(dex.total.saturating_sub(id)) * 3;
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if dex.failing.contains(&id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    Json(FakeDex::pokemon_body(id)).into_response()
}

async fn species(State(dex): State<Arc<FakeDex>>, Path(query): Path<String>) -> Response {
    dex.species_requests.fetch_add(1, Ordering::SeqCst);

    if dex.failing_species.contains(&query) {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    match dex.resolve(&query) {
        Some(id) => Json(FakeDex::species_body(id)).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Serves the fake API on an ephemeral port
pub async fn serve(dex: Arc<FakeDex>) -> SocketAddr {
    let app = Router::new()
        .route("/api/v2/pokemon/{query}", get(pokemon))
        .route("/api/v2/pokemon-species/{query}", get(species))
        .with_state(dex);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn config_for(addr: SocketAddr, page_size: u32, total_known: u32) -> StarryConfig {
    StarryConfig {
        api_base_url: format!("http://{addr}/api/v2"),
        page_size,
        total_known,
        ..Default::default()
    }
    .validate()
}

/// Fake API plus a runtime pointed at it
pub async fn runtime(dex: FakeDex, page_size: u32) -> (Runtime<MemoryStore>, Arc<FakeDex>) {
    let total = dex.total;
    let dex = Arc::new(dex);
    let addr = serve(Arc::clone(&dex)).await;
    let runtime = Runtime::new(&config_for(addr, page_size, total), MemoryStore::default()).unwrap();
    (runtime, dex)
}

/// Ids of the cards currently in the gallery
pub fn card_ids<S>(runtime: &Runtime<S>) -> Vec<u32>
where
    S: starryview::core::KeyValueStore,
{
    runtime
        .screen()
        .gallery()
        .content
        .cards()
        .iter()
        .map(|card| card.id)
        .collect()
}
