//! Mock backend HTTP surface

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use schooltour_common::{NewSchool, School};

use crate::store::SchoolStore;

struct ApiState {
    store: SchoolStore,
}

/// The mock REST backend.
#[derive(Clone)]
pub struct ApiServer {
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a server backed by the seed collection.
    pub fn new() -> Self {
        Self::with_store(SchoolStore::new())
    }

    /// Create a server over a caller-provided store.
    pub fn with_store(store: SchoolStore) -> Self {
        Self {
            state: Arc::new(ApiState { store }),
        }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/api/schools",
                get(list_schools_handler)
                    .post(create_school_handler)
                    .put(update_school_handler),
            )
            .route(
                "/api/schools/:id",
                get(get_school_handler).delete(delete_school_handler),
            )
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the backend
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Mock backend starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a seeded backend on `addr`.
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    ApiServer::new().serve(addr).await
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "schooltour-server"
    }))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Existence-check variant: a 0-or-1-element array for this id.
    id: Option<i64>,
    /// Name filter: case-insensitive substring match.
    name: Option<String>,
}

async fn list_schools_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if let Some(id) = query.id {
        let matches: Vec<School> = state.store.get(id).await.into_iter().collect();
        debug!("existence check id={} -> {} match(es)", id, matches.len());
        return Json(matches).into_response();
    }

    if let Some(term) = query.name {
        let matches = state.store.search(&term).await;
        debug!("name search {:?} -> {} match(es)", term, matches.len());
        return Json(matches).into_response();
    }

    Json(state.store.list().await).into_response()
}

async fn get_school_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get(id).await {
        Some(school) => (StatusCode::OK, Json(school)).into_response(),
        None => not_found_body(id),
    }
}

async fn create_school_handler(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<NewSchool>,
) -> impl IntoResponse {
    let school = state.store.insert(req.name).await;
    info!("created school id={}", school.id);
    (StatusCode::CREATED, Json(school)).into_response()
}

async fn update_school_handler(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<School>,
) -> impl IntoResponse {
    let id = req.id;
    match state.store.update(req).await {
        Some(school) => {
            info!("updated school id={}", id);
            (StatusCode::OK, Json(school)).into_response()
        }
        None => not_found_body(id),
    }
}

async fn delete_school_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    // The tutorial backend acknowledges deletes of absent ids too.
    if state.store.remove(id).await.is_some() {
        info!("deleted school id={}", id);
    }
    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}

fn not_found_body(id: i64) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": format!("school {} not found", id)})),
    )
        .into_response()
}
