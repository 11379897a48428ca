//! Request routing: URL → rendered page, redirect, or file.
//!
//! The dev server keeps the reference addressing: the detail page lives at
//! `/subject.html?id=<subject>&exam=<n>`, and the landing form submits to
//! `/search?q=<keyword>`.

use super::{path, response};
use crate::catalog::{CatalogStore, find_by_keyword};
use crate::config::SiteConfig;
use crate::core::{RouteScheme, Routes};
use crate::render;
use crate::view::{
    DetailErrorKind, DetailState, DetailView, GridView, LandingView, SearchNotice,
};
use anyhow::Result;
use tiny_http::Request;
use url::form_urlencoded;

const ROUTES: Routes = Routes::new(RouteScheme::Query);

/// Dispatch a request to the matching page handler.
pub fn route(request: Request, config: &SiteConfig, store: &CatalogStore) -> Result<()> {
    let url = request.url().to_string();
    let (page, query) = split_url(&url);

    match page {
        "/" | "/index.html" => landing(request, config),
        "/subjects.html" => subjects(request, config, store),
        "/subject.html" => detail(request, config, store, query),
        "/search" => search(request, config, store, query),
        "/style.css" => response::respond_css(request, crate::embed::page::STYLE_CSS),
        _ => {
            if let Some(rel) = page.strip_prefix("/papers/")
                && let Some(file) = path::resolve_path(rel, &config.build.papers)
            {
                return response::respond_file(request, &file);
            }
            response::respond_not_found(request)
        }
    }
}

// ============================================================================
// Page handlers
// ============================================================================

fn landing(request: Request, config: &SiteConfig) -> Result<()> {
    let view = LandingView::new(&config.site.title, &ROUTES);
    response::respond_html(request, 200, render::render_landing(&view))
}

fn subjects(request: Request, config: &SiteConfig, store: &CatalogStore) -> Result<()> {
    let (status, view) = match store.load() {
        Ok(catalog) => (200, GridView::from_catalog(&catalog, &ROUTES)),
        Err(e) => (500, GridView::Failed(e.to_string())),
    };
    response::respond_html(
        request,
        status,
        render::render_subjects(&view, &config.site.title),
    )
}

fn detail(
    request: Request,
    config: &SiteConfig,
    store: &CatalogStore,
    query: &str,
) -> Result<()> {
    let id = query_param(query, "id");
    let exam = query_param(query, "exam").and_then(|raw| raw.parse::<usize>().ok());

    let state = DetailState::resolve(store.load(), id.as_deref(), exam);
    let status = detail_status(&state);
    let view = DetailView::project(&state, &config.site.title, &ROUTES);
    response::respond_html(
        request,
        status,
        render::render_detail(&view, &config.site.title),
    )
}

/// Search: blank keyword browses all subjects, a match deep-links into the
/// detail page, a miss re-renders the landing page with a notice.
fn search(
    request: Request,
    config: &SiteConfig,
    store: &CatalogStore,
    query: &str,
) -> Result<()> {
    let keyword = query_param(query, "q").unwrap_or_default();
    if keyword.trim().is_empty() {
        return response::respond_redirect(request, &ROUTES.subjects());
    }

    let catalog = match store.load() {
        Ok(catalog) => catalog,
        Err(_) => {
            let view = LandingView::new(&config.site.title, &ROUTES)
                .with_notice(SearchNotice::LoadFailed);
            return response::respond_html(request, 200, render::render_landing(&view));
        }
    };

    match find_by_keyword(&keyword, &catalog) {
        Some(found) => {
            let subject = &catalog.subjects[found.subject_index];
            let target = ROUTES.detail(&subject.id, Some(found.exam_index));
            response::respond_redirect(request, &target)
        }
        None => {
            let view =
                LandingView::new(&config.site.title, &ROUTES).with_notice(SearchNotice::NoMatch);
            response::respond_html(request, 200, render::render_landing(&view))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Split a request URL into path and raw query string.
fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((page, query)) => (page, query),
        None => (url, ""),
    }
}

/// First value of a query parameter, percent-decoded.
fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// HTTP status for a resolved detail state.
fn detail_status(state: &DetailState) -> u16 {
    match state {
        DetailState::Error {
            kind: DetailErrorKind::LoadFailed,
        } => 500,
        DetailState::Error { .. } => 404,
        _ => 200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url() {
        assert_eq!(split_url("/subject.html?id=math"), ("/subject.html", "id=math"));
        assert_eq!(split_url("/subjects.html"), ("/subjects.html", ""));
    }

    #[test]
    fn test_query_param_decodes() {
        assert_eq!(query_param("q=a%20b", "q"), Some("a b".to_string()));
        assert_eq!(query_param("id=math&exam=2", "exam"), Some("2".to_string()));
        assert_eq!(query_param("id=math", "exam"), None);
    }

    #[test]
    fn test_query_param_takes_first_value() {
        assert_eq!(query_param("q=one&q=two", "q"), Some("one".to_string()));
    }

    #[test]
    fn test_detail_status_distinguishes_error_kinds() {
        let not_found = DetailState::Error {
            kind: DetailErrorKind::NotFound,
        };
        let load_failed = DetailState::Error {
            kind: DetailErrorKind::LoadFailed,
        };
        assert_eq!(detail_status(&not_found), 404);
        assert_eq!(detail_status(&load_failed), 500);
        assert_eq!(detail_status(&DetailState::Uninitialized), 200);
    }
}
