//! Page addressing.
//!
//! The dev server keeps the reference query-parameter scheme
//! (`/subject.html?id=math&exam=1`); the static build cannot read query
//! strings without scripting, so it enumerates every selection state as a
//! real page (`/subject/math/exam-1.html`). `Routes` is the single owner
//! of both schemes so no page ever hand-builds a URL.

use url::form_urlencoded;

/// Which addressing scheme rendered links use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteScheme {
    /// Query parameters, resolved dynamically by the dev server.
    Query,
    /// Path-per-state pages, written by the static build.
    Static,
}

/// URL builder for one scheme.
#[derive(Debug, Clone, Copy)]
pub struct Routes {
    scheme: RouteScheme,
}

impl Routes {
    pub const fn new(scheme: RouteScheme) -> Self {
        Self { scheme }
    }

    pub const fn scheme(&self) -> RouteScheme {
        self.scheme
    }

    /// Landing page.
    pub fn landing(&self) -> String {
        "/".to_string()
    }

    /// Subjects grid page.
    pub fn subjects(&self) -> String {
        "/subjects.html".to_string()
    }

    /// Search endpoint (dev server only; the static landing form still
    /// points here and works under `papershelf serve`).
    pub fn search(&self) -> String {
        "/search".to_string()
    }

    /// Detail page for a subject, optionally addressing a specific exam.
    pub fn detail(&self, subject_id: &str, exam: Option<usize>) -> String {
        match self.scheme {
            RouteScheme::Query => {
                let mut query = form_urlencoded::Serializer::new(String::new());
                query.append_pair("id", subject_id);
                if let Some(index) = exam {
                    query.append_pair("exam", &index.to_string());
                }
                format!("/subject.html?{}", query.finish())
            }
            RouteScheme::Static => match exam {
                None => format!("/subject/{subject_id}/"),
                Some(index) => format!("/subject/{subject_id}/exam-{index}.html"),
            },
        }
    }

    /// A paper document, served from the papers directory.
    pub fn paper(&self, file: &str) -> String {
        format!("/papers/{}", file.trim_start_matches('/'))
    }

    /// Site stylesheet.
    pub fn stylesheet(&self) -> String {
        "/style.css".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_detail_routes() {
        let routes = Routes::new(RouteScheme::Query);
        assert_eq!(routes.detail("math", None), "/subject.html?id=math");
        assert_eq!(routes.detail("math", Some(2)), "/subject.html?id=math&exam=2");
    }

    #[test]
    fn test_query_detail_escapes_id() {
        let routes = Routes::new(RouteScheme::Query);
        assert_eq!(routes.detail("a b", None), "/subject.html?id=a+b");
    }

    #[test]
    fn test_static_detail_routes() {
        let routes = Routes::new(RouteScheme::Static);
        assert_eq!(routes.detail("math", None), "/subject/math/");
        assert_eq!(routes.detail("math", Some(2)), "/subject/math/exam-2.html");
    }

    #[test]
    fn test_paper_route_strips_leading_slash() {
        let routes = Routes::new(RouteScheme::Query);
        assert_eq!(routes.paper("math/a.pdf"), "/papers/math/a.pdf");
        assert_eq!(routes.paper("/math/a.pdf"), "/papers/math/a.pdf");
    }
}
