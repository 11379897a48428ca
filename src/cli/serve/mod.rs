//! Development server.
//!
//! Serves the archive with dynamic rendering: pages are built per request
//! from the in-memory catalog, papers stream from disk. One `CatalogStore`
//! is shared across all request threads, so the catalog file is read once
//! per server lifetime.

mod lifecycle;
mod path;
mod response;
mod router;

use crate::catalog::CatalogStore;
use crate::config::{SiteConfig, cfg};
use crate::core::{is_serving, is_shutdown, register_server, set_serving};
use crate::{debug, log};
use anyhow::Result;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bind and run the dev server (blocking until Ctrl+C).
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    let store = Arc::new(CatalogStore::new(&config.build.catalog));

    // Warm the catalog cache without blocking the request loop; a failure
    // is not cached, so the first page to need the data retries and
    // surfaces the error itself.
    {
        let store = Arc::clone(&store);
        std::thread::spawn(move || {
            if let Err(e) = store.load() {
                debug!("serve"; "catalog warmup failed: {}", e);
            }
            set_serving();
        });
    }

    run_request_loop(&server, &store);
    Ok(())
}

fn run_request_loop(server: &Server, store: &Arc<CatalogStore>) {
    let config = cfg();
    // Thread pool keeps a large paper download from blocking page loads
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        let store = Arc::clone(store);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, &store) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, store: &CatalogStore) -> Result<()> {
    // Early exit if shutdown requested
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !is_serving() {
        return response::respond_loading(request);
    }

    router::route(request, config, store)
}
