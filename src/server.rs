use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{ApiHeatmapRequest, ApiHeatmapResponse, ApiMoodLegend};
use engagement_heatmap::config::ScorerConfig;
use engagement_heatmap::scoring::EngagementScorer;
use engagement_heatmap::HeatmapError;

#[derive(Clone)]
struct AppState {
    config: Arc<ScorerConfig>,
    scorer: Arc<EngagementScorer>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), HeatmapError> {
    let (config, config_path) = ScorerConfig::load(args.config)?;
    if let Some(path) = config_path.filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded scorer config");
    }

    let state = AppState {
        scorer: Arc::new(EngagementScorer::from_config(&config)),
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/moods", get(moods_handler))
        .route("/api/heatmap", post(heatmap_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| HeatmapError::InvalidArgument(format!("invalid bind address: {}", err)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "engagement heat map listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn moods_handler(State(state): State<AppState>) -> Json<ApiMoodLegend> {
    Json(ApiMoodLegend::new(state.config.thresholds.clone()))
}

async fn heatmap_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHeatmapRequest>,
) -> Result<Json<ApiHeatmapResponse>, (StatusCode, String)> {
    let (posts, order) = request
        .into_batch()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let scored = state.scorer.score(&posts);
    info!(posts = scored.len(), "heat map request scored");
    Ok(Json(ApiHeatmapResponse::from_scored(scored, order)))
}
