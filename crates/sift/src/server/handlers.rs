//! Request handlers and error responses.

use std::{fmt, sync::Arc};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use sift_index::{CatalogService, Document, FilterResult, IndexPort, SearchError, SearchResult};
use sift_query::SearchQuery;
use tokio::task;
use tracing::{debug, warn};

/// Failure of an HTTP request.
#[derive(Debug)]
pub enum ApiError {
    /// The catalog rejected or failed the request.
    Search(SearchError),
    /// The request could not be parsed.
    BadRequest(String),
    /// The blocking task running the request failed.
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Search(SearchError::InvalidQuery(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Search(SearchError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Search(SearchError::IndexUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Search(SearchError::Deserialization(_)) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error kind reported in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Search(err) => err.kind(),
            Self::BadRequest(_) => "InvalidQuery",
            Self::Internal(_) => "Internal",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(err) => write!(f, "{err}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = json!({ "error": self.kind(), "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Runs catalog work on the blocking pool.
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, SearchError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /search/list`
pub async fn search<P>(
    State(catalog): State<Arc<CatalogService<P>>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResult>, ApiError>
where
    P: IndexPort + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let result = blocking(move || catalog.search(&query)).await?;
    Ok(Json(result))
}

/// `GET /search/{id}`
pub async fn get_product<P>(
    State(catalog): State<Arc<CatalogService<P>>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Document>, ApiError>
where
    P: IndexPort + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let doc = blocking(move || catalog.get(id)).await?;
    Ok(Json(doc))
}

/// `POST /search/filters`
pub async fn filters<P>(
    State(catalog): State<Arc<CatalogService<P>>>,
    query: Result<Json<SearchQuery>, JsonRejection>,
) -> Result<Json<FilterResult>, ApiError>
where
    P: IndexPort + Send + Sync + 'static,
{
    let Json(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let result = blocking(move || catalog.filters(&query)).await?;
    Ok(Json(result))
}
