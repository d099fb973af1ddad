// Data Serve API - HTTP Server
// Read-only endpoints that synthesize pseudo-random records on demand

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use data_serve::{
    endpoint_catalog, generate_multi_date_record, generate_record, pagination, record_schema,
    DataRecord, MultiDateRecord, PageEnvelope, PageQuery, ParamError, VERSION,
};

/// Fallback bind address when DATA_SERVE_ADDR is not set
const DEFAULT_ADDR: &str = "0.0.0.0:8000";

// ============================================================================
// Error & Health Bodies
// ============================================================================

/// One rejected query parameter
#[derive(Serialize)]
struct ValidationDetail {
    param: &'static str,
    message: String,
}

/// 422 response body for out-of-range query parameters
#[derive(Serialize)]
struct ValidationBody {
    detail: Vec<ValidationDetail>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

fn unprocessable(err: ParamError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationBody {
            detail: vec![ValidationDetail {
                param: err.param,
                message: err.message,
            }],
        }),
    )
        .into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}

/// GET /api/data - Paginated standard records
async fn get_data(Query(query): Query<PageQuery>) -> Response {
    let request = match query.validate() {
        Ok(request) => request,
        Err(err) => return unprocessable(err),
    };

    let plan = pagination::plan(request.page, request.page_size, request.total_records);
    let mut rng = rand::thread_rng();
    let data: Vec<DataRecord> = plan
        .identities()
        .map(|id| generate_record(&mut rng, id))
        .collect();

    Json(PageEnvelope::assemble(&plan, data)).into_response()
}

/// GET /api/data-with-date-formats - Paginated multi-date records
async fn get_data_with_date_formats(Query(query): Query<PageQuery>) -> Response {
    let request = match query.validate() {
        Ok(request) => request,
        Err(err) => return unprocessable(err),
    };

    let plan = pagination::plan(request.page, request.page_size, request.total_records);
    let mut rng = rand::thread_rng();
    let data: Vec<MultiDateRecord> = plan
        .identities()
        .map(|id| generate_multi_date_record(&mut rng, id))
        .collect();

    Json(PageEnvelope::assemble(&plan, data)).into_response()
}

/// GET /api/schema - JSON Schema of the standard record
async fn get_schema() -> impl IntoResponse {
    Json(record_schema())
}

/// GET /api/endpoints - Catalog of the public endpoints
async fn get_endpoints() -> impl IntoResponse {
    Json(endpoint_catalog())
}

/// GET / - Serve the explorer page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("🚀 Data Serve API v{VERSION}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/data", get(get_data))
        .route("/data-with-date-formats", get(get_data_with_date_formats))
        .route("/schema", get(get_schema))
        .route("/endpoints", get(get_endpoints));

    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("DATA_SERVE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    let port = addr.rsplit(':').next().unwrap_or("8000");
    println!("\n📍 Server available at:");
    println!("   - Web UI: http://localhost:{port}");
    println!("   - API:    http://localhost:{port}/api/data");
    println!("\n✨ Press Ctrl+C to stop the server\n");

    axum::serve(listener, app).await?;

    Ok(())
}
