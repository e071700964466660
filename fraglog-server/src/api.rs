//! HTTP routes over the parsed game sessions.
//!
//! The log is parsed once at startup; handlers only read the shared
//! registry and project it per request.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use fraglog_game::{GameSession, GameSummary, KillReport, SessionRegistry, Summary};
use serde::{Deserialize, Serialize};

/// Shared, read-only application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    registry: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(registry: SessionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    fn summary(&self) -> Summary {
        self.registry.summary()
    }
}

/// JSON error body, e.g. `{"error": "Game 7 not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Error status plus body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub body: ApiError,
}

impl ApiErrorResponse {
    pub fn game_not_found(id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiError {
                error: format!("Game {id} not found"),
            },
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/games", get(list_games))
        .route("/api/v1/games/{id}", get(show_game))
        .route("/api/v1/games/{id}/stats", get(show_game_stats))
        .with_state(state)
}

/// `GET /api/v1/games`
pub async fn list_games(State(state): State<AppState>) -> Json<Summary> {
    Json(state.summary())
}

/// `GET /api/v1/games/{id}`
///
/// # Errors
///
/// Returns 404 when no `game_<id>` exists.
pub async fn show_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameSummary>, ApiErrorResponse> {
    state
        .summary()
        .game(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            log::debug!("game {id} requested but not found");
            ApiErrorResponse::game_not_found(&id)
        })
}

/// `GET /api/v1/games/{id}/stats`
///
/// # Errors
///
/// Returns 404 when no `game_<id>` exists.
pub async fn show_game_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<KillReport>, ApiErrorResponse> {
    state
        .registry
        .find(&id)
        .map(GameSession::kill_report)
        .map(Json)
        .ok_or_else(|| ApiErrorResponse::game_not_found(&id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use fraglog_game::{LogParser, ParserConfig};
    use tower::ServiceExt;

    const LOG: &str = "  0:00 InitGame: \\sv_hostname\\Code Miner Server\\version\\ioq3 1.36\\protocol\\68\n\
         20:34 ClientConnect: 2\n\
         20:34 ClientUserinfoChanged: 2 n\\Isgalamido\\t\\0\\model\\xian/default\n\
         20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT\n\
         21:00 ClientConnect: 3\n\
         21:00 ClientUserinfoChanged: 3 n\\Mocinha\\t\\0\n\
         21:10 Kill: 3 2 10: Mocinha killed Isgalamido by MOD_RAILGUN\n";

    fn test_state() -> AppState {
        let mut parser = LogParser::new(ParserConfig::default());
        parser.parse_str(LOG);
        AppState::new(parser.into_registry())
    }

    #[tokio::test]
    async fn list_games_returns_every_game() {
        let Json(summary) = list_games(State(test_state())).await;
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "game_1": {
                    "hostname": "Code Miner Server",
                    "version": "ioq3 1.36",
                    "total_kills": 2,
                    "players": ["Isgalamido", "Mocinha"],
                    "kills": { "Isgalamido": 0, "Mocinha": 1 }
                }
            })
        );
    }

    #[tokio::test]
    async fn list_games_is_empty_object_without_games() {
        let Json(summary) = list_games(State(AppState::default())).await;
        assert_eq!(serde_json::to_string(&summary).unwrap(), "{}");
    }

    #[tokio::test]
    async fn show_game_finds_by_id() {
        let Json(game) = show_game(State(test_state()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(game.hostname, "Code Miner Server");
        assert_eq!(game.total_kills, 2);
    }

    #[tokio::test]
    async fn show_game_missing_is_not_found() {
        let error = show_game(State(test_state()), Path("99".to_string()))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.body.error, "Game 99 not found");
    }

    #[tokio::test]
    async fn stats_split_means_and_players() {
        let Json(report) = show_game_stats(State(test_state()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(report.kills_by_means.get("MOD_TRIGGER_HURT"), Some(&1));
        assert_eq!(report.kills_by_means.get("MOD_RAILGUN"), Some(&1));
        assert_eq!(report.kills_by_player.get("Mocinha"), Some(&1));
        assert_eq!(report.deaths_by_environment.get("Isgalamido"), Some(&1));

        let missing = show_game_stats(State(test_state()), Path("2".to_string())).await;
        assert!(missing.is_err());
        let padded = show_game_stats(State(test_state()), Path("01".to_string())).await;
        assert!(padded.is_err());
    }

    #[tokio::test]
    async fn router_serves_stats() {
        let response = router(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games/1/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let report: KillReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.total_kills, 2);
        assert_eq!(report.players, ["Isgalamido", "Mocinha"]);
    }

    #[tokio::test]
    async fn router_serves_not_found_body() {
        let response = router(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Game 42 not found");
    }

    #[tokio::test]
    async fn router_serves_game() {
        let response = router(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let game: GameSummary = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(game.players, ["Isgalamido", "Mocinha"]);
    }
}
