use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use study_catalog::Catalog;
use study_catalog::mcp_api::{FacetsResponse, GuideEntry, ListGuidesResponse, ListLinksResponse};

use crate::query::CatalogQuery;
use crate::render::{self, Shell};
use crate::server::StudyHubServer;

#[derive(Clone)]
pub struct WebState {
    pub catalog: Catalog,
    pub shell: Arc<Shell>,
}

/// Build the page and API routes. Cancelling `shutdown` closes open MCP sessions,
/// including their long-lived event streams.
pub fn router(state: WebState, shutdown: &CancellationToken) -> Router {
    let catalog = state.catalog;
    let mcp = StreamableHttpService::new(
        move || Ok(StudyHubServer::new(catalog)),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            cancellation_token: shutdown.child_token(),
            ..Default::default()
        },
    );

    Router::new()
        .route("/", get(index))
        .route("/api/guides", get(api_guides))
        .route("/api/links", get(api_links))
        .route("/api/facets", get(api_facets))
        .route("/healthz", get(healthz))
        .nest_service("/mcp", mcp)
        .with_state(state)
}

async fn index(
    State(state): State<WebState>,
    Query(query): Query<CatalogQuery>,
    headers: HeaderMap,
) -> Response {
    let body = match render::render_index(&state.catalog, &state.shell, &query) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "page render failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response();
        }
    };

    let etag = render::etag(&body);
    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| render::etag_matches(v, &etag));

    let mut response = if not_modified {
        debug!(filtered = !query.is_empty(), "page not modified");
        StatusCode::NOT_MODIFIED.into_response()
    } else {
        Html(body).into_response()
    };
    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}

async fn api_guides(
    State(state): State<WebState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ListGuidesResponse> {
    let guides = match query.guide_filter() {
        Some(filter) => state
            .catalog
            .filter_guides(&filter)
            .into_iter()
            .map(GuideEntry::from)
            .collect(),
        None => Vec::new(),
    };
    Json(ListGuidesResponse { guides })
}

async fn api_links(
    State(state): State<WebState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ListLinksResponse> {
    Json(ListLinksResponse::from_catalog(
        &state.catalog,
        &query.link_filter(),
    ))
}

async fn api_facets(State(state): State<WebState>) -> Json<FacetsResponse> {
    Json(state.catalog.facets().into())
}

async fn healthz() -> &'static str {
    "ok"
}
