//! HTTP search service.
//!
//! Exposes the catalog over the storefront REST surface:
//!
//! - `GET /search/list` with query-string criteria returns one page of products
//! - `GET /search/{id}` returns a single product
//! - `POST /search/filters` with a JSON body returns the top categories and brands
//! - `GET /health` is a liveness check
//!
//! Index work is blocking, so each request runs it on the tokio blocking pool. The only state
//! shared between requests is the read-only catalog behind an `Arc`.

mod handlers;

use std::{future, io, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
pub use handlers::ApiError;
use sift_index::{CatalogService, IndexPort};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

/// Builds the router over a shared catalog.
pub fn router<P>(catalog: Arc<CatalogService<P>>) -> Router
where
    P: IndexPort + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/search/list", get(handlers::search::<P>))
        .route("/search/filters", post(handlers::filters::<P>))
        .route("/search/{id}", get(handlers::get_product::<P>))
        .with_state(catalog)
}

/// Serves the catalog on `bind` until Ctrl-C.
///
/// Returns the port once every in-flight request has finished, so the caller can close it.
/// Returns `None` when a request still holds the catalog at shutdown.
pub async fn serve<P>(catalog: CatalogService<P>, bind: &str) -> io::Result<Option<P>>
where
    P: IndexPort + Send + Sync + 'static,
{
    let addr: SocketAddr = bind.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid bind address '{bind}': {e}"),
        )
    })?;

    let catalog = Arc::new(catalog);
    let app = router(Arc::clone(&catalog));

    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        index = %catalog.settings().index_name,
        "sift listening"
    );
    info!("  GET  /search/list     - search products");
    info!("  GET  /search/{{id}}     - product by id");
    info!("  POST /search/filters  - category and brand filters");
    info!("  GET  /health          - liveness");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("sift stopped");

    Ok(Arc::try_unwrap(catalog)
        .ok()
        .map(CatalogService::into_port))
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for shutdown signal");
        future::pending::<()>().await;
    }
}
