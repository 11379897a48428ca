//! Build command implementation.
//!
//! Renders the whole site into the output directory:
//!
//! - `index.html` - landing page with the search form
//! - `subjects.html` - subjects grid
//! - `subject/<id>/index.html` - detail page, default selection
//! - `subject/<id>/exam-<n>.html` - detail page, exam `n` selected
//! - `style.css` - embedded stylesheet
//! - `papers/**` - copied paper documents
//!
//! Pages whose content fingerprint matches what is already on disk are not
//! rewritten, so repeated builds only touch changed files.

use crate::catalog::{Catalog, CatalogStore};
use crate::config::SiteConfig;
use crate::core::{RouteScheme, Routes};
use crate::embed;
use crate::logger::ProgressLine;
use crate::render;
use crate::utils::{hash, plural_count};
use crate::view::{DetailState, DetailView, GridView, LandingView};
use crate::{debug, log};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build the static site into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let start = std::time::Instant::now();
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let store = CatalogStore::new(&config.build.catalog);
    let catalog = store
        .load()
        .with_context(|| "Failed to load the paper catalog")?;

    let pages = collect_pages(&catalog, config);
    let papers = collect_papers(&config.build.papers);

    let progress = ProgressLine::new(&[("pages", pages.len() + 1), ("papers", papers.len())]);
    let written = AtomicUsize::new(0);

    // Pages render independently; fan out across cores.
    pages
        .par_iter()
        .try_for_each(|(rel, html)| -> Result<()> {
            if write_if_changed(&output.join(rel), html.as_bytes())? {
                written.fetch_add(1, Ordering::Relaxed);
            } else {
                debug!("build"; "unchanged: {}", rel.display());
            }
            progress.inc("pages");
            Ok(())
        })?;

    if write_if_changed(&output.join("style.css"), embed::page::STYLE_CSS.as_bytes())? {
        written.fetch_add(1, Ordering::Relaxed);
    }
    progress.inc("pages");

    copy_papers(&papers, &config.build.papers, output, &progress)?;

    progress.finish();
    log!(
        "build";
        "{} written ({} unchanged), {} copied in {:.2}s",
        plural_count(written.load(Ordering::Relaxed), "page"),
        pages.len() + 1 - written.load(Ordering::Relaxed),
        plural_count(papers.len(), "paper"),
        start.elapsed().as_secs_f32()
    );
    Ok(())
}

/// Enumerate every page of the site as `(relative path, html)`.
///
/// The static build cannot read query strings, so each selection state of a
/// detail page becomes its own file.
fn collect_pages(catalog: &Arc<Catalog>, config: &SiteConfig) -> Vec<(PathBuf, String)> {
    let routes = Routes::new(RouteScheme::Static);
    let title = &config.site.title;
    let mut pages = Vec::new();

    pages.push((
        PathBuf::from("index.html"),
        render::render_landing(&LandingView::new(title, &routes)),
    ));
    pages.push((
        PathBuf::from("subjects.html"),
        render::render_subjects(&GridView::from_catalog(catalog, &routes), title),
    ));

    for subject in &catalog.subjects {
        let dir = PathBuf::from("subject").join(&subject.id);

        let default_state =
            DetailState::resolve(Ok(Arc::clone(catalog)), Some(&subject.id), None);
        pages.push((
            dir.join("index.html"),
            render::render_detail(&DetailView::project(&default_state, title, &routes), title),
        ));

        for index in 0..subject.exams.len() {
            let state =
                DetailState::resolve(Ok(Arc::clone(catalog)), Some(&subject.id), Some(index));
            pages.push((
                dir.join(format!("exam-{index}.html")),
                render::render_detail(&DetailView::project(&state, title, &routes), title),
            ));
        }
    }

    pages
}

/// Write `content` to `path` unless an identical file is already there.
///
/// Returns true when the file was (re)written.
fn write_if_changed(path: &Path, content: &[u8]) -> Result<bool> {
    if let Ok(existing) = fs::read(path)
        && hash::compute(&existing) == hash::compute(content)
    {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Collect all paper files under the papers directory.
fn collect_papers(papers_dir: &Path) -> Vec<PathBuf> {
    if !papers_dir.is_dir() {
        return Vec::new();
    }

    jwalk::WalkDir::new(papers_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .collect()
}

/// Copy papers into `output/papers/`, preserving the directory layout.
fn copy_papers(
    papers: &[PathBuf],
    papers_dir: &Path,
    output: &Path,
    progress: &ProgressLine,
) -> Result<()> {
    let dest_root = output.join("papers");

    papers.par_iter().try_for_each(|source| -> Result<()> {
        let rel = source.strip_prefix(papers_dir).unwrap_or(source);
        let dest = dest_root.join(rel);

        let content =
            fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?;
        write_if_changed(&dest, &content)?;
        progress.inc("papers");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Exam, Subject};

    fn sample_catalog() -> Arc<Catalog> {
        Arc::new(Catalog {
            subjects: vec![
                Subject {
                    id: "math".into(),
                    name: "Mathematics".into(),
                    description: None,
                    accent: None,
                    exams: vec![
                        Exam {
                            title: "Midterm 2020".into(),
                            year: Some("2020".into()),
                            season: None,
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
                },
                Subject {
                    id: "cs".into(),
                    name: "Computer Science".into(),
                    description: None,
                    accent: None,
                    exams: vec![],
                },
            ],
        })
    }

    fn test_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = root.to_path_buf();
        config.build.catalog = root.join("data/catalog.json");
        config.build.papers = root.join("papers");
        config.build.output = root.join("dist");
        config
    }

    #[test]
    fn test_collect_pages_enumerates_every_selection_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let pages = collect_pages(&sample_catalog(), &config);

        let paths: Vec<_> = pages.iter().map(|(p, _)| p.to_string_lossy().to_string()).collect();
        assert!(paths.contains(&"index.html".to_string()));
        assert!(paths.contains(&"subjects.html".to_string()));
        assert!(paths.contains(&"subject/math/index.html".to_string()));
        assert!(paths.contains(&"subject/math/exam-0.html".to_string()));
        assert!(paths.contains(&"subject/math/exam-1.html".to_string()));
        // Empty subject still gets its detail page, but no exam pages.
        assert!(paths.contains(&"subject/cs/index.html".to_string()));
        assert!(!paths.iter().any(|p| p.starts_with("subject/cs/exam-")));
    }

    #[test]
    fn test_write_if_changed_skips_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");

        assert!(write_if_changed(&path, b"hello").unwrap());
        assert!(!write_if_changed(&path, b"hello").unwrap());
        assert!(write_if_changed(&path, b"changed").unwrap());
    }

    #[test]
    fn test_build_site_writes_output_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::create_dir_all(root.join("papers/math")).unwrap();
        fs::write(root.join("papers/math/midterm-2020.pdf"), b"%PDF-fake").unwrap();
        fs::write(
            root.join("data/catalog.json"),
            r#"{"subjects": [{"id": "math", "name": "Mathematics", "exams": [
                {"title": "Midterm 2020", "year": "2020", "file": "math/midterm-2020.pdf"}
            ]}]}"#,
        )
        .unwrap();

        let config = test_config(root);
        build_site(&config).unwrap();

        assert!(root.join("dist/index.html").exists());
        assert!(root.join("dist/subjects.html").exists());
        assert!(root.join("dist/style.css").exists());
        assert!(root.join("dist/subject/math/exam-0.html").exists());
        assert!(root.join("dist/papers/math/midterm-2020.pdf").exists());

        let detail = fs::read_to_string(root.join("dist/subject/math/index.html")).unwrap();
        assert!(detail.contains("Midterm 2020"));
        assert!(detail.contains("/papers/math/midterm-2020.pdf"));
    }

    #[test]
    fn test_build_site_fails_without_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        assert!(build_site(&config).is_err());
    }
}
