//! Catalog validation.
//!
//! Checks the things that silently break pages at serve time: duplicate
//! subject ids (deep links become ambiguous), blank names/titles, and
//! catalog entries whose paper file is missing from the papers directory.

use crate::catalog::{Catalog, CatalogStore};
use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Execute validate command
pub fn validate_catalog(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let store = CatalogStore::new(&config.build.catalog);
    let catalog = store
        .load()
        .with_context(|| "Failed to load the paper catalog")?;

    let issues = scan_catalog(&catalog, &config.build.papers);

    if issues.is_empty() {
        log!(
            "validate";
            "catalog ok: {} checked",
            plural_count(catalog.subjects.len(), "subject")
        );
        return Ok(());
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for issue in &issues {
        match issue.severity {
            Severity::Error if args.warn_only => {
                warnings += 1;
                eprintln!("{} {}", "⚠".yellow(), issue.message);
            }
            Severity::Error => {
                errors += 1;
                eprintln!("{} {}", "✗".red(), issue.message);
            }
            Severity::Warning => {
                warnings += 1;
                eprintln!("{} {}", "⚠".yellow(), issue.message);
            }
        }
    }

    if errors > 0 {
        bail!(
            "validation failed: {}, {}",
            plural_count(errors, "error"),
            plural_count(warnings, "warning")
        );
    }

    log!(
        "validate";
        "catalog ok with {}",
        plural_count(warnings, "warning")
    );
    Ok(())
}

/// Scan the catalog for problems. Pure: no logging, no exit.
pub fn scan_catalog(catalog: &Catalog, papers_dir: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_ids = FxHashSet::default();

    for subject in &catalog.subjects {
        if subject.id.trim().is_empty() {
            issues.push(Issue::error(format!(
                "subject `{}` has an empty id",
                subject.name
            )));
        } else if !seen_ids.insert(subject.id.as_str()) {
            issues.push(Issue::error(format!(
                "duplicate subject id `{}` - deep links are ambiguous",
                subject.id
            )));
        }

        if subject
            .id
            .contains(|c: char| c.is_whitespace() || c == '/' || c == '?')
        {
            issues.push(Issue::error(format!(
                "subject id `{}` contains characters that break URLs",
                subject.id
            )));
        }

        if subject.name.trim().is_empty() {
            issues.push(Issue::error(format!(
                "subject `{}` has an empty name",
                subject.id
            )));
        }

        if subject.exams.is_empty() {
            issues.push(Issue::warning(format!(
                "subject `{}` has no papers",
                subject.id
            )));
        }

        for (index, exam) in subject.exams.iter().enumerate() {
            if exam.title.trim().is_empty() {
                issues.push(Issue::error(format!(
                    "paper {}-{} has an empty title",
                    subject.id, index
                )));
            }

            if exam.file.trim().is_empty() {
                issues.push(Issue::error(format!(
                    "paper {}-{} has no file",
                    subject.id, index
                )));
            } else if !papers_dir.join(exam.file.trim_start_matches('/')).is_file() {
                issues.push(Issue::error(format!(
                    "paper {}-{}: file `{}` not found under {}",
                    subject.id,
                    index,
                    exam.file,
                    papers_dir.display()
                )));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Exam, Subject};
    use std::fs;

    fn subject(id: &str, name: &str, exams: Vec<Exam>) -> Subject {
        Subject {
            id: id.into(),
            name: name.into(),
            description: None,
            accent: None,
            exams,
        }
    }

    fn exam(title: &str, file: &str) -> Exam {
        Exam {
            title: title.into(),
            year: None,
            season: None,
            note: None,
            file: file.into(),
        }
    }

    #[test]
    fn test_clean_catalog_has_no_issues() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("math")).unwrap();
        fs::write(dir.path().join("math/m.pdf"), b"x").unwrap();

        let catalog = Catalog {
            subjects: vec![subject(
                "math",
                "Mathematics",
                vec![exam("Midterm", "math/m.pdf")],
            )],
        };
        assert!(scan_catalog(&catalog, dir.path()).is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            subjects: vec![
                subject("math", "Mathematics", vec![]),
                subject("math", "More Maths", vec![]),
            ],
        };
        let issues = scan_catalog(&catalog, dir.path());
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Error && i.message.contains("duplicate"))
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            subjects: vec![subject(
                "math",
                "Mathematics",
                vec![exam("Midterm", "math/gone.pdf")],
            )],
        };
        let issues = scan_catalog(&catalog, dir.path());
        assert!(issues.iter().any(|i| i.message.contains("not found")));
    }

    #[test]
    fn test_empty_subject_is_warning_only() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            subjects: vec![subject("math", "Mathematics", vec![])],
        };
        let issues = scan_catalog(&catalog, dir.path());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_id_with_slash_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog {
            subjects: vec![subject("ma/th", "Mathematics", vec![])],
        };
        let issues = scan_catalog(&catalog, dir.path());
        assert!(issues.iter().any(|i| i.message.contains("break URLs")));
    }
}
