//! Voltage Dashboard API Server
//!
//! Accepts CSV uploads of voltage readings and returns the trend, extrema,
//! low-voltage, and downward-acceleration views as JSON.

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
mod settings;

pub use error::{ApiError, ErrorBody};
pub use settings::{LoggingSettings, ServerSettings, Settings, DEFAULT_SETTINGS_FILE};

/// Read-only state shared across handlers
pub struct AppState {
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/analysis", post(routes::analysis::analyze))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Initialize logging
pub fn init_logging(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    let level: Level = settings.level.parse()?;
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}

/// Run the server
pub async fn run_server(settings: &ServerSettings) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new());
    let app = create_router(state, settings.max_upload_bytes);

    info!(
        "Starting API server on {} (max upload {} bytes)",
        settings.bind_addr, settings.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    const SCENARIO: &str = "\
Timestamp,Values
2024-02-01 00:05:00,20
2024-02-01 00:00:00,10
2024-02-01 00:01:00,15
2024-02-01 00:02:00,12
2024-02-01 00:03:00,12
2024-02-01 00:04:00,8
";

    fn app() -> Router {
        create_router(Arc::new(AppState::new()), 1024 * 1024)
    }

    async fn post_csv(router: Router, csv: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("content-type", "text/csv")
            .body(Body::from(csv.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_analysis_report() {
        let (status, json) = post_csv(app(), SCENARIO).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(json["row_count"], 6);
        assert_eq!(json["peak_indices"], serde_json::json!([1]));
        assert_eq!(json["low_indices"], serde_json::json!([4]));
        assert_eq!(json["peaks"][0]["voltage"], 15.0);
        assert_eq!(json["peaks"][0]["timestamp"], "2024-02-01T00:01:00");
        assert_eq!(json["lows"][0]["voltage"], 8.0);
        assert_eq!(json["below_threshold"].as_array().unwrap().len(), 5);
        assert_eq!(json["trend"].as_array().unwrap().len(), 6);
        assert_eq!(json["downward_acceleration"][0]["second_difference"], -8.0);

        let last_avg = json["trend"][5]["moving_average"].as_f64().unwrap();
        assert!((last_avg - 13.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_bad_timestamp_rejected() {
        let csv = "Timestamp,Values\n2024-02-01 00:00:00,10\nsoon,11\n";
        let (status, json) = post_csv(app(), csv).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["kind"], "parse_error");
    }

    #[tokio::test]
    async fn test_missing_column_rejected() {
        let csv = "Timestamp,Reading\n2024-02-01 00:00:00,10\n";
        let (status, json) = post_csv(app(), csv).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["kind"], "malformed_input");
        assert!(json["error"].as_str().unwrap().contains("Values"));
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let (status, json) = post_csv(app(), "Timestamp,Values\n").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["kind"], "empty_input");
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let router = create_router(Arc::new(AppState::new()), 32);
        let (status, _) = post_csv(router, SCENARIO).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
