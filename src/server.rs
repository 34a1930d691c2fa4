use crate::app::LookupService;
use crate::error::LookupError;
use crate::normalize::{self, CategoryListing, CategorySummary};
use crate::observability::metrics;
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
}

/// Maps lookup failures onto HTTP responses.
pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            LookupError::UnknownCategory(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            LookupError::RemoteQuery(e) => {
                error!("Category lookup failed with no fallback: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Unable to contact remote service.".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// All categories that `/service-locations/:category/` can be queried by
async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let categories = state
        .lookup
        .catalog
        .list_categories()
        .iter()
        .map(CategorySummary::from)
        .collect();
    Json(categories)
}

/// Listings for one category, shaped for its source type
async fn category_listings(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryListing>, ApiError> {
    let source_type = state.lookup.catalog.get_category(&category_id)?.source_type();
    let records = state.lookup.get_for_category(&category_id).await?;
    Ok(Json(normalize::shape(source_type, records)))
}

async fn prometheus_metrics() -> Response {
    match metrics::render() {
        Some(body) => body.into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// Create the HTTP router for the read API
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/service-locations/categories/", get(list_categories))
        .route("/service-locations/:category/", get(category_listings))
        .route("/metrics", get(prometheus_metrics))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(state: AppState, port: u16) -> Result<(), hyper::Error> {
    let app = create_server(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("Categories: http://localhost:{port}/service-locations/categories/");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
}
