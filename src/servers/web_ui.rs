use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::views;
use crate::player::Player;
use crate::store::{PlayerBackend, PlayerStore, StoreError};

// Configuration pour le serveur Web UI
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub port: u16,
    pub host: String,
    /// Players per page on the listing page
    pub per_page: usize,
    /// Directory served under /static
    pub static_dir: String,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            per_page: 5,
            static_dir: "static".to_string(),
        }
    }
}

/// State shared by every handler
pub struct AppState {
    pub store: PlayerStore<Box<dyn PlayerBackend>>,
    pub per_page: usize,
}

impl AppState {
    pub fn new<B: PlayerBackend + 'static>(backend: B, per_page: usize) -> Self {
        Self {
            store: PlayerStore::new(Box::new(backend)),
            per_page,
        }
    }
}

pub struct WebUiServer {
    config: WebUiConfig,
    state: Arc<AppState>,
}

impl WebUiServer {
    pub fn new<B: PlayerBackend + 'static>(config: WebUiConfig, backend: B) -> Self {
        let state = Arc::new(AppState::new(backend, config.per_page));
        Self { config, state }
    }

    pub fn config(&self) -> &WebUiConfig {
        &self.config
    }

    /// Serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone(), &self.config.static_dir);
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 Web UI server starting on http://localhost:{}",
            self.config.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        log::info!("Web UI server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("🛑 Ctrl+C received, shutting down");
}

/// Pages, JSON API and static files
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/players", get(players_page))
        .route("/player/{name}", get(player_page))
        .route("/compare", get(compare_page))
        .route("/api/status", get(api_status))
        .route("/api/players", get(api_list_players).post(api_add_player))
        .route("/api/players/search", get(api_search_players))
        .route(
            "/api/players/{name}",
            get(api_get_player)
                .patch(api_update_player)
                .delete(api_delete_player),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse { error: message.to_string() })).into_response()
}

/// Bad input maps to 400; anything else is a storage failure and is logged.
fn store_failure(err: StoreError) -> Response {
    if err.is_client_error() {
        return error_response(StatusCode::BAD_REQUEST, &err.to_string());
    }
    log::error!("Player store error: {}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Player store unavailable")
}

fn page_failure(err: StoreError) -> Response {
    log::error!("Player store error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<h1>Player database unavailable</h1>".to_string()),
    )
        .into_response()
}

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Name or team prefix; replaces pagination when present
    pub q: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CompareQuery {
    pub player1: Option<String>,
    pub player2: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// ==================== Pages ====================

async fn serve_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let total = match state.store.count() {
        Ok(total) => Some(total),
        Err(e) => {
            log::warn!("⚠️ Could not count players: {}", e);
            None
        }
    };
    Html(views::home_page(total))
}

/// GET /players?page=N or /players?q=prefix
async fn players_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Some(q) = query.q.as_deref().filter(|q| !q.trim().is_empty()) {
        return match state.store.search(q) {
            Ok(players) => Html(views::search_page(q, &players)).into_response(),
            Err(e) => page_failure(e),
        };
    }

    match state
        .store
        .paginate(query.page.unwrap_or(1), state.per_page as i64)
    {
        Ok(page) => Html(views::players_page(&page)).into_response(),
        Err(e) => page_failure(e),
    }
}

/// GET /player/{name}
async fn player_page(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    match state.store.find_by_name(&name) {
        Ok(Some(lookup)) => Html(views::player_page(&name, Some(&lookup))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(views::player_page(&name, None))).into_response(),
        Err(e) => page_failure(e),
    }
}

/// GET /compare?player1=A&player2=B
async fn compare_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompareQuery>,
) -> Response {
    let names = (
        query.player1.filter(|n| !n.trim().is_empty()),
        query.player2.filter(|n| !n.trim().is_empty()),
    );
    let (Some(first), Some(second)) = names else {
        return Html(views::compare_page(None)).into_response();
    };

    let lookups = state
        .store
        .find_by_name(&first)
        .and_then(|a| Ok((a, state.store.find_by_name(&second)?)));
    match lookups {
        Ok((a, b)) => Html(views::compare_page(Some([
            (first.as_str(), a.as_ref()),
            (second.as_str(), b.as_ref()),
        ])))
        .into_response(),
        Err(e) => page_failure(e),
    }
}

// ==================== JSON API ====================

async fn api_status(State(state): State<Arc<AppState>>) -> Response {
    match state.store.count() {
        Ok(total) => Json(ApiResponse {
            status: "ready".to_string(),
            message: format!("{} players loaded", total),
        })
        .into_response(),
        Err(e) => store_failure(e),
    }
}

/// GET /api/players?page=N&per_page=M
async fn api_list_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let per_page = query.per_page.unwrap_or(state.per_page as i64);
    match state.store.paginate(query.page.unwrap_or(1), per_page) {
        Ok(page) => Json(page).into_response(),
        Err(e) => store_failure(e),
    }
}

/// GET /api/players/search?q=prefix
async fn api_search_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    match state.store.search(query.q.as_deref().unwrap_or("")) {
        Ok(players) => Json(players).into_response(),
        Err(e) => store_failure(e),
    }
}

/// GET /api/players/{name}
async fn api_get_player(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.store.find_by_name(&name) {
        Ok(Some(lookup)) => Json(lookup).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Player not found"),
        Err(e) => store_failure(e),
    }
}

/// POST /api/players
async fn api_add_player(
    State(state): State<Arc<AppState>>,
    Json(player): Json<Player>,
) -> Response {
    if player.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Player name is required");
    }
    match state.store.add(player.clone()) {
        Ok(()) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// PATCH /api/players/{name} with a JSON object of field name -> value
async fn api_update_player(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(changes): Json<HashMap<String, serde_json::Value>>,
) -> Response {
    let changes: Vec<(String, String)> = changes
        .into_iter()
        .map(|(field, value)| (field, json_to_cell(value)))
        .collect();

    match state.store.update(&name, changes) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Player not found"),
        Err(e) => store_failure(e),
    }
}

/// DELETE /api/players/{name}
async fn api_delete_player(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.store.delete(&name) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Player not found"),
        Err(e) => store_failure(e),
    }
}

/// CSV cell text for a JSON value; null clears optional ratings.
fn json_to_cell(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
