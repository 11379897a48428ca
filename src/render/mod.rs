//! HTML rendering - projects view models onto markup.
//!
//! Rendering is a pure function of the view model; controllers decide what
//! to render, this module decides how it looks. All catalog-derived text
//! passes through `utils::html::escape` on the way in.

use crate::embed::page::{LAYOUT_HTML, LayoutVars};
use crate::utils::html::{escape, escape_attr};
use crate::view::{DetailView, GridView, LandingView, Preview};
use std::fmt::Write;

/// Wrap rendered `<main>` content in the shared page shell.
fn page(page_title: &str, site_title: &str, page_kind: &'static str, content: String) -> String {
    LAYOUT_HTML.render(&LayoutVars {
        page_title: escape(page_title).into_owned(),
        site_title: escape(site_title).into_owned(),
        page_kind,
        content,
    })
}

// ============================================================================
// Landing
// ============================================================================

/// Render the landing page with its search form.
pub fn render_landing(view: &LandingView) -> String {
    let mut content = String::new();
    let _ = write!(
        content,
        r#"<section class="hero">
  <h1>{title}</h1>
  <p>Search a subject or paper, or browse everything.</p>
  <form class="search-form" action="{action}" method="get">
    <input type="search" name="q" placeholder="Subject, year or season" aria-label="Search papers">
    <button type="submit">Search</button>
  </form>"#,
        title = escape(&view.site_title),
        action = escape_attr(&view.search_action),
    );

    if let Some(notice) = view.notice {
        let _ = write!(
            content,
            "\n  <p class=\"search-notice\">{}</p>",
            escape(notice.message())
        );
    }

    let _ = write!(
        content,
        "\n  <p><a href=\"{}\">Browse all subjects</a></p>\n</section>",
        escape_attr(&view.subjects_href),
    );

    page(&view.site_title, &view.site_title, "landing", content)
}

// ============================================================================
// Subjects grid
// ============================================================================

/// Render the subjects grid (or its empty/error replacement).
pub fn render_subjects(view: &GridView, site_title: &str) -> String {
    let content = match view {
        GridView::Failed(message) => {
            format!("<p class=\"error\">{}</p>", escape(message))
        }
        GridView::NoSubjects => {
            format!("<p class=\"error\">{}</p>", escape(GridView::EMPTY_MESSAGE))
        }
        GridView::Subjects(tiles) => {
            let mut grid = String::from("<section class=\"subject-grid\">\n");
            for tile in tiles {
                let _ = write!(
                    grid,
                    r#"  <a class="subject-square" href="{href}" data-subject-id="{id}">
    <div class="subject-square__accent" style="background: {accent}"></div>
    <span class="subject-square__name">{name}</span>
    <span class="subject-square__count">{count}</span>
  </a>
"#,
                    href = escape_attr(&tile.href),
                    id = escape_attr(&tile.id),
                    accent = escape_attr(&tile.accent),
                    name = escape(&tile.name),
                    count = crate::utils::plural_count(tile.exam_count, "paper"),
                );
            }
            grid.push_str("</section>");
            grid
        }
    };

    page(
        &format!("Subjects · {site_title}"),
        site_title,
        "subjects",
        content,
    )
}

// ============================================================================
// Detail
// ============================================================================

/// Render the detail page: exam list plus preview pane.
pub fn render_detail(view: &DetailView, site_title: &str) -> String {
    let mut content = String::new();
    let _ = write!(
        content,
        r#"<section class="detail-head">
  <p class="breadcrumb">{breadcrumb}</p>
  <h1>{title}</h1>
  <p class="detail-meta">{meta}</p>
</section>
<section class="finder">
  <ul class="finder-list">
"#,
        breadcrumb = escape(&view.breadcrumb),
        title = escape(&view.title),
        meta = escape(&view.meta),
    );

    if view.items.is_empty() {
        let _ = write!(
            content,
            "    <li class=\"finder-item finder-item--empty\">{}</li>\n",
            escape(&view.empty_list_text)
        );
    } else {
        for item in &view.items {
            let class = if item.active {
                "finder-item finder-item--active"
            } else {
                "finder-item"
            };
            let _ = write!(
                content,
                r#"    <li class="{class}" data-exam-id="{key}">
      <a href="{href}">
        <span class="finder-item__title">{title}</span>
        <span class="finder-item__meta">{meta}</span>
      </a>
    </li>
"#,
                key = escape_attr(&item.key),
                href = escape_attr(&item.href),
                title = escape(&item.title),
                meta = escape(&item.meta),
            );
        }
    }

    content.push_str("  </ul>\n  <div class=\"preview\">\n");
    render_preview(&mut content, &view.preview);
    content.push_str("  </div>\n</section>");

    let page_title = if view.title.is_empty() {
        site_title.to_string()
    } else {
        format!("{} · {site_title}", view.title)
    };
    page(&page_title, site_title, "detail", content)
}

fn render_preview(out: &mut String, preview: &Preview) {
    match preview {
        Preview::Placeholder { text } => {
            let _ = write!(
                out,
                "    <div class=\"preview-placeholder\"><p>{}</p></div>\n",
                escape(text)
            );
        }
        Preview::Document {
            title,
            meta,
            file_href,
            download_label,
        } => {
            let _ = write!(
                out,
                r#"    <div class="preview-info">
      <h2>{title}</h2>
      <a class="preview-download" href="{href}" download aria-label="{label}">Download</a>
    </div>
    <p class="detail-meta">{meta}</p>
    <iframe class="preview-frame" src="{href}" title="{title}"></iframe>
"#,
                title = escape(title),
                meta = escape(meta),
                href = escape_attr(file_href),
                label = escape_attr(download_label),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Exam, Subject};
    use crate::core::{RouteScheme, Routes};
    use crate::view::{DetailState, SearchNotice};
    use std::sync::Arc;

    fn sample_catalog() -> Arc<Catalog> {
        Arc::new(Catalog {
            subjects: vec![Subject {
                id: "math".into(),
                name: "Maths & <Stats>".into(),
                description: Some("Numbers".into()),
                accent: Some("#123456".into()),
                exams: vec![
                    Exam {
                        title: "Midterm 2020".into(),
                        year: Some("2020".into()),
                        season: Some("Spring".into()),
                        note: None,
                        file: "math/midterm-2020.pdf".into(),
                    },
                    Exam {
                        title: "Final 2021".into(),
                        year: Some("2021".into()),
                        season: None,
                        note: None,
                        file: "math/final-2021.pdf".into(),
                    },
                ],
            }],
        })
    }

    #[test]
    fn test_landing_contains_search_form() {
        let routes = Routes::new(RouteScheme::Query);
        let html = render_landing(&LandingView::new("Paper Studio", &routes));
        assert!(html.contains("action=\"/search\""));
        assert!(html.contains("name=\"q\""));
        assert!(html.contains("data-page=\"landing\""));
        assert!(!html.contains("search-notice"));
    }

    #[test]
    fn test_landing_notice_is_rendered() {
        let routes = Routes::new(RouteScheme::Query);
        let view = LandingView::new("Paper Studio", &routes).with_notice(SearchNotice::NoMatch);
        let html = render_landing(&view);
        assert!(html.contains(SearchNotice::NoMatch.message()));
    }

    #[test]
    fn test_subjects_grid_escapes_names() {
        let routes = Routes::new(RouteScheme::Query);
        let view = GridView::from_catalog(&sample_catalog(), &routes);
        let html = render_subjects(&view, "Paper Studio");
        assert!(html.contains("Maths &amp; &lt;Stats&gt;"));
        assert!(html.contains("2 papers"));
        assert!(!html.contains("<Stats>"));
    }

    #[test]
    fn test_empty_grid_renders_literal_message() {
        let html = render_subjects(&GridView::NoSubjects, "Paper Studio");
        assert!(html.contains(GridView::EMPTY_MESSAGE));
    }

    #[test]
    fn test_detail_marks_single_active_item() {
        let routes = Routes::new(RouteScheme::Query);
        let state = DetailState::resolve(Ok(sample_catalog()), Some("math"), Some(1));
        let view = DetailView::project(&state, "Paper Studio", &routes);
        let html = render_detail(&view, "Paper Studio");

        assert_eq!(html.matches("finder-item--active").count(), 1);
        assert!(html.contains("data-exam-id=\"math-1\""));
        assert!(html.contains("src=\"/papers/math/final-2021.pdf\""));
        assert!(html.contains("aria-label=\"Download Final 2021\""));
    }

    #[test]
    fn test_detail_empty_subject_has_no_preview_frame() {
        let routes = Routes::new(RouteScheme::Query);
        let empty = Arc::new(Catalog {
            subjects: vec![Subject {
                id: "cs".into(),
                name: "CS".into(),
                description: None,
                accent: None,
                exams: vec![],
            }],
        });
        let state = DetailState::resolve(Ok(empty), Some("cs"), Some(3));
        let view = DetailView::project(&state, "Paper Studio", &routes);
        let html = render_detail(&view, "Paper Studio");

        assert!(html.contains("finder-item--empty"));
        assert!(!html.contains("preview-frame"));
        assert!(html.contains(crate::view::PLACEHOLDER_NO_EXAMS));
    }
}
