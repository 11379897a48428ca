//! View models - pure projections from catalog data to render-ready values.
//!
//! Nothing in this module touches HTML or the network: controllers build
//! these values, `render` turns them into markup. This keeps every page
//! testable without a server or an output directory.

mod detail;

pub use detail::{
    DetailErrorKind, DetailState, DetailView, ExamItem, PLACEHOLDER_NO_EXAMS,
    PLACEHOLDER_UNSELECTED, Preview,
};

use crate::catalog::Catalog;
use crate::core::Routes;

// ============================================================================
// Landing page
// ============================================================================

/// Inline notice shown on the landing page after a failed search.
///
/// The reference UI flashed a transient validation bubble; server-rendered
/// pages carry the message inline instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    /// The keyword matched neither a subject nor a paper.
    NoMatch,
    /// The catalog could not be loaded at all.
    LoadFailed,
}

impl SearchNotice {
    /// User-facing notice text.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoMatch => "No matching subject or paper was found.",
            Self::LoadFailed => "The paper catalog could not be loaded.",
        }
    }
}

/// Landing page view: search form plus an optional notice.
#[derive(Debug, Clone)]
pub struct LandingView {
    pub site_title: String,
    pub search_action: String,
    pub subjects_href: String,
    pub notice: Option<SearchNotice>,
}

impl LandingView {
    pub fn new(site_title: &str, routes: &Routes) -> Self {
        Self {
            site_title: site_title.to_string(),
            search_action: routes.search(),
            subjects_href: routes.subjects(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: SearchNotice) -> Self {
        self.notice = Some(notice);
        self
    }
}

// ============================================================================
// Subjects grid
// ============================================================================

/// Default tile accent when the subject does not declare one.
pub const DEFAULT_ACCENT: &str = "#d7c4f5";

/// One tile on the subjects grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTile {
    pub id: String,
    pub name: String,
    pub accent: String,
    pub exam_count: usize,
    pub href: String,
}

/// Subjects grid view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// One tile per subject, in catalog order.
    Subjects(Vec<SubjectTile>),
    /// The catalog loaded but holds no subjects.
    NoSubjects,
    /// The catalog could not be loaded; message is shown in place of the grid.
    Failed(String),
}

impl GridView {
    /// Literal text shown for an empty catalog.
    pub const EMPTY_MESSAGE: &'static str = "No subjects yet - add some to the catalog file.";

    /// Project the catalog onto grid tiles.
    pub fn from_catalog(catalog: &Catalog, routes: &Routes) -> Self {
        if catalog.is_empty() {
            return Self::NoSubjects;
        }

        let tiles = catalog
            .subjects
            .iter()
            .map(|subject| SubjectTile {
                id: subject.id.clone(),
                name: subject.name.clone(),
                accent: subject
                    .accent
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
                exam_count: subject.exams.len(),
                href: routes.detail(&subject.id, None),
            })
            .collect();
        Self::Subjects(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Exam, Subject};
    use crate::core::{RouteScheme, Routes};

    fn catalog_with(subjects: Vec<Subject>) -> Catalog {
        Catalog { subjects }
    }

    fn subject(id: &str, name: &str, accent: Option<&str>, exam_count: usize) -> Subject {
        let exams = (0..exam_count)
            .map(|i| Exam {
                title: format!("Paper {i}"),
                year: None,
                season: None,
                note: None,
                file: format!("{id}/paper-{i}.pdf"),
            })
            .collect();
        Subject {
            id: id.into(),
            name: name.into(),
            description: None,
            accent: accent.map(Into::into),
            exams,
        }
    }

    #[test]
    fn test_grid_projects_tiles_in_order() {
        let routes = Routes::new(RouteScheme::Query);
        let catalog = catalog_with(vec![
            subject("math", "Mathematics", Some("#123456"), 2),
            subject("cs", "Computer Science", None, 0),
        ]);

        let GridView::Subjects(tiles) = GridView::from_catalog(&catalog, &routes) else {
            panic!("expected tiles");
        };
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].name, "Mathematics");
        assert_eq!(tiles[0].accent, "#123456");
        assert_eq!(tiles[0].exam_count, 2);
        assert_eq!(tiles[1].accent, DEFAULT_ACCENT);
        assert_eq!(tiles[1].href, "/subject.html?id=cs");
    }

    #[test]
    fn test_empty_catalog_projects_no_subjects() {
        let routes = Routes::new(RouteScheme::Query);
        let view = GridView::from_catalog(&catalog_with(vec![]), &routes);
        assert_eq!(view, GridView::NoSubjects);
    }

    #[test]
    fn test_landing_notice_messages_are_distinct() {
        assert_ne!(
            SearchNotice::NoMatch.message(),
            SearchNotice::LoadFailed.message()
        );
    }
}
