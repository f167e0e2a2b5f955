use axum::{extract::{Query, State}, routing::get, Json, Router};
use recipe_core::{ConstraintSet, Intent, RecipeService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Upper bound on `k` accepted from callers.
pub const MAX_K: usize = 50;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub intent: Intent,
    pub search_query: String,
    pub constraints: ConstraintSet,
    pub took_ms: u128,
    pub recipes: Vec<RecipeHit>,
}

#[derive(Serialize)]
pub struct RecipeHit {
    pub name: String,
    pub cook_time: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub match_score: f32,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecipeService>,
}

pub fn build_app(service: Arc<RecipeService>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(AppState { service })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let k = params.k.unwrap_or_else(|| state.service.top_n()).min(MAX_K);
    let outcome = state.service.answer_top(&params.query, k);

    let recipes = outcome
        .recipes
        .into_iter()
        .map(|hit| RecipeHit {
            name: hit.recipe.name,
            cook_time: hit.recipe.cook_time,
            ingredients: hit.recipe.ingredients,
            instructions: hit.recipe.instructions,
            match_score: hit.match_score,
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::info!(query = %params.query, took_ms = elapsed.as_millis() as u64, "search served");
    Json(SearchResponse {
        query: params.query,
        intent: outcome.intent,
        search_query: outcome.search_query,
        constraints: outcome.constraints,
        took_ms: elapsed.as_millis(),
        recipes,
    })
}
