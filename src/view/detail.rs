//! Detail page state machine and its render projection.
//!
//! The selection logic is an explicit finite-state value instead of state
//! scattered across rendered markup:
//!
//! ```text
//! Uninitialized --enter--> Loaded | Error
//! Loaded --select_initial--> Selected | Empty
//! Selected/Loaded --select--> Selected | Loaded (invalid index reverts)
//! ```
//!
//! `Error` is terminal. `DetailView::project` turns any state into a flat
//! render model; the renderer never inspects the state machine itself.

use crate::catalog::{Catalog, CatalogError, Subject};
use crate::core::Routes;
use std::sync::Arc;

// ============================================================================
// State machine
// ============================================================================

/// Why the detail page could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailErrorKind {
    /// No subject id in the request at all.
    MissingId,
    /// Catalog loaded, id not in it.
    NotFound,
    /// Catalog read or parse failed.
    LoadFailed,
}

impl DetailErrorKind {
    /// Heading shown in place of the subject name.
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingId => "No subject selected",
            Self::NotFound | Self::LoadFailed => "Something went wrong",
        }
    }

    /// Meta line under the heading.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingId => "Open a subject from the subjects page.",
            Self::NotFound => "This subject is not in the catalog - check that the link is correct.",
            Self::LoadFailed => "The paper catalog could not be loaded.",
        }
    }
}

/// Selection state of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Nothing resolved yet.
    Uninitialized,
    /// Subject found, nothing selected; preview shows a placeholder.
    Loaded { subject: Subject },
    /// Exactly one exam selected and previewed.
    Selected { subject: Subject, index: usize },
    /// Subject found but has no exams.
    Empty { subject: Subject },
    /// Terminal: the page renders an error message.
    Error { kind: DetailErrorKind },
}

impl DetailState {
    pub fn new() -> Self {
        Self::Uninitialized
    }

    /// Resolve the subject id against the load result.
    pub fn enter(
        self,
        loaded: Result<Arc<Catalog>, CatalogError>,
        subject_id: Option<&str>,
    ) -> Self {
        let Some(id) = subject_id.filter(|id| !id.is_empty()) else {
            return Self::Error {
                kind: DetailErrorKind::MissingId,
            };
        };

        match loaded {
            Err(_) => Self::Error {
                kind: DetailErrorKind::LoadFailed,
            },
            Ok(catalog) => match catalog.subject(id) {
                Some(subject) => Self::Loaded {
                    subject: subject.clone(),
                },
                None => Self::Error {
                    kind: DetailErrorKind::NotFound,
                },
            },
        }
    }

    /// Initial selection on page entry: the requested index if valid,
    /// otherwise 0; subjects without exams go to `Empty`.
    pub fn select_initial(self, requested: Option<usize>) -> Self {
        match self {
            Self::Loaded { subject } | Self::Selected { subject, .. } => {
                if subject.exams.is_empty() {
                    return Self::Empty { subject };
                }
                let index = requested.filter(|&i| i < subject.exams.len()).unwrap_or(0);
                Self::Selected { subject, index }
            }
            Self::Empty { subject } => Self::Empty { subject },
            other => other,
        }
    }

    /// Select a specific exam (list click). An out-of-range index reverts
    /// to the unselected state, clearing the active highlight.
    pub fn select(self, index: usize) -> Self {
        match self {
            Self::Loaded { subject } | Self::Selected { subject, .. } => {
                if subject.exams.is_empty() {
                    Self::Empty { subject }
                } else if index < subject.exams.len() {
                    Self::Selected { subject, index }
                } else {
                    Self::Loaded { subject }
                }
            }
            other => other,
        }
    }

    /// Convenience: `enter` then `select_initial`, the full page-entry path.
    pub fn resolve(
        loaded: Result<Arc<Catalog>, CatalogError>,
        subject_id: Option<&str>,
        requested: Option<usize>,
    ) -> Self {
        Self::new().enter(loaded, subject_id).select_initial(requested)
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Render projection
// ============================================================================

/// One row in the exam list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamItem {
    /// Stable `subjectid-index` key.
    pub key: String,
    pub title: String,
    pub meta: String,
    pub href: String,
    pub active: bool,
}

/// Right-hand preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// An exam is selected: metadata plus the embedded document.
    Document {
        title: String,
        meta: String,
        file_href: String,
        download_label: String,
    },
    /// Nothing to preview; `text` explains why.
    Placeholder { text: String },
}

/// Placeholder text when nothing is selected yet.
pub const PLACEHOLDER_UNSELECTED: &str = "Pick a paper from the list to preview it.";
/// Placeholder text for subjects without papers.
pub const PLACEHOLDER_NO_EXAMS: &str = "This subject has no papers yet.";
/// Placeholder text for error states.
pub const PLACEHOLDER_ERROR: &str = "This subject could not be loaded.";
/// Literal list entry when there are no exams to list.
pub const EMPTY_LIST_ITEM: &str = "No papers yet";

/// Flat render model for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub breadcrumb: String,
    pub title: String,
    pub meta: String,
    /// Empty when the subject has no exams or the page is in an error state.
    pub items: Vec<ExamItem>,
    /// Literal placeholder row shown when `items` is empty.
    pub empty_list_text: String,
    pub preview: Preview,
}

impl DetailView {
    /// Project any state onto the render model.
    pub fn project(state: &DetailState, site_title: &str, routes: &Routes) -> Self {
        match state {
            DetailState::Uninitialized => Self::error_view(site_title, "", PLACEHOLDER_UNSELECTED),
            DetailState::Error { kind } => {
                let mut view = Self::error_view(site_title, kind.message(), PLACEHOLDER_ERROR);
                view.title = kind.title().to_string();
                view
            }
            DetailState::Loaded { subject } => Self::subject_view(
                subject,
                None,
                site_title,
                routes,
                Preview::Placeholder {
                    text: PLACEHOLDER_UNSELECTED.to_string(),
                },
            ),
            DetailState::Empty { subject } => Self::subject_view(
                subject,
                None,
                site_title,
                routes,
                Preview::Placeholder {
                    text: PLACEHOLDER_NO_EXAMS.to_string(),
                },
            ),
            DetailState::Selected { subject, index } => {
                let exam = &subject.exams[*index];
                let preview = Preview::Document {
                    title: exam.title.clone(),
                    meta: exam.meta_line(),
                    file_href: routes.paper(&exam.file),
                    download_label: format!("Download {}", exam.title),
                };
                Self::subject_view(subject, Some(*index), site_title, routes, preview)
            }
        }
    }

    fn subject_view(
        subject: &Subject,
        active: Option<usize>,
        site_title: &str,
        routes: &Routes,
        preview: Preview,
    ) -> Self {
        let items = subject
            .exams
            .iter()
            .enumerate()
            .map(|(index, exam)| ExamItem {
                key: format!("{}-{}", subject.id, index),
                title: exam.title.clone(),
                meta: exam.meta_line(),
                href: routes.detail(&subject.id, Some(index)),
                active: active == Some(index),
            })
            .collect();

        Self {
            breadcrumb: format!("{site_title} / {}", subject.name),
            title: subject.name.clone(),
            meta: format!(
                "{} · {}",
                subject.description.as_deref().unwrap_or(""),
                crate::utils::plural_count(subject.exams.len(), "paper")
            ),
            items,
            empty_list_text: EMPTY_LIST_ITEM.to_string(),
            preview,
        }
    }

    fn error_view(site_title: &str, meta: &str, placeholder: &str) -> Self {
        Self {
            breadcrumb: site_title.to_string(),
            title: String::new(),
            meta: meta.to_string(),
            items: Vec::new(),
            empty_list_text: "No data".to_string(),
            preview: Preview::Placeholder {
                text: placeholder.to_string(),
            },
        }
    }
}
