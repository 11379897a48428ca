//! HTTP response handlers.

use crate::utils::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a rendered HTML page.
pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    send_body(request, status, mime::types::HTML, body.into_bytes())
}

/// Respond with the embedded stylesheet.
pub fn respond_css(request: Request, body: &str) -> Result<()> {
    send_body(request, 200, mime::types::CSS, body.as_bytes().to_vec())
}

/// Respond with a static file (paper documents).
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with 303 See Other (search navigation).
pub fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let response = Response::empty(StatusCode(303))
        .with_header(Header::from_bytes("Location", location).unwrap());
    request.respond(response)?;
    Ok(())
}

/// Respond with plain 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(
        request,
        404,
        mime::types::PLAIN,
        b"404 Not Found".to_vec(),
    )
}

/// Respond with a self-refreshing page while the catalog warms up.
pub fn respond_loading(request: Request) -> Result<()> {
    let body = "<!doctype html><html><head><meta http-equiv=\"refresh\" content=\"1\">\
                <title>Loading</title></head><body><p>Loading the archive…</p></body></html>";
    send_body(request, 200, mime::types::HTML, body.as_bytes().to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(
        request,
        503,
        mime::types::PLAIN,
        b"503 Service Unavailable".to_vec(),
    )
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
