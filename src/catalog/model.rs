//! Catalog data model.
//!
//! The catalog is a single JSON document of shape
//! `{ "subjects": [ { id, name, description?, accent?, exams: [...] } ] }`.
//! Subjects are ordered; exams are ordered within their subject, and that
//! order is the addressing scheme for deep links (`(subject_id, index)`).

use serde::{Deserialize, Serialize};

/// A single previewable paper entry with descriptive metadata.
///
/// Exams carry no identity of their own - they are addressed by their
/// position within the owning subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Display title (e.g. "Midterm 2020").
    pub title: String,

    /// Exam year, free-form (e.g. "2020").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Exam season/session (e.g. "Spring").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    /// Free-form note (e.g. "with solutions").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Path to the previewable document, relative to the papers directory.
    pub file: String,
}

impl Exam {
    /// Meta line shown under the title: `"year season"` then note,
    /// dot-separated, with empty parts dropped.
    pub fn meta_line(&self) -> String {
        let when = format!(
            "{} {}",
            self.year.as_deref().unwrap_or(""),
            self.season.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        [Some(when), self.note.clone()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Searchable text: title, year, season and note space-joined,
    /// missing fields treated as empty.
    pub(crate) fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.year.as_deref().unwrap_or(""),
            self.season.as_deref().unwrap_or(""),
            self.note.as_deref().unwrap_or("")
        )
    }
}

/// A top-level catalog category containing an ordered list of exams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique id, used in URLs (e.g. "math").
    pub id: String,

    /// Display name (e.g. "Mathematics").
    pub name: String,

    /// Short description shown on the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Accent color for the subject tile (any CSS color string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    /// Ordered papers; index is the stable address of each exam.
    #[serde(default)]
    pub exams: Vec<Exam>,
}

/// The full dataset of subjects, loaded once from the catalog file.
///
/// A payload without a `subjects` key parses as an empty catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Look up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// True when the catalog holds no subjects at all.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_shape() {
        let catalog = Catalog::from_json(
            r##"{
                "subjects": [{
                    "id": "math",
                    "name": "Mathematics",
                    "description": "Algebra and analysis",
                    "accent": "#6750a4",
                    "exams": [
                        {"title": "Midterm 2020", "year": "2020", "season": "Spring", "file": "math/midterm-2020.pdf"}
                    ]
                }]
            }"##,
        )
        .unwrap();

        assert_eq!(catalog.subjects.len(), 1);
        let subject = catalog.subject("math").unwrap();
        assert_eq!(subject.name, "Mathematics");
        assert_eq!(subject.exams[0].title, "Midterm 2020");
        assert_eq!(subject.exams[0].season.as_deref(), Some("Spring"));
    }

    #[test]
    fn test_missing_subjects_key_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_optional_exam_fields_default_to_none() {
        let catalog = Catalog::from_json(
            r#"{"subjects": [{"id": "cs", "name": "CS", "exams": [{"title": "Final", "file": "cs/final.pdf"}]}]}"#,
        )
        .unwrap();

        let exam = &catalog.subjects[0].exams[0];
        assert!(exam.year.is_none());
        assert!(exam.season.is_none());
        assert!(exam.note.is_none());
    }

    #[test]
    fn test_subject_lookup_unknown_id() {
        let catalog = Catalog::from_json(r#"{"subjects": []}"#).unwrap();
        assert!(catalog.subject("ghost").is_none());
    }

    #[test]
    fn test_meta_line_joins_present_parts() {
        let exam = Exam {
            title: "Final".into(),
            year: Some("2021".into()),
            season: Some("Autumn".into()),
            note: Some("with solutions".into()),
            file: "f.pdf".into(),
        };
        assert_eq!(exam.meta_line(), "2021 Autumn · with solutions");
    }

    #[test]
    fn test_meta_line_drops_missing_parts() {
        let exam = Exam {
            title: "Final".into(),
            year: None,
            season: None,
            note: Some("resit".into()),
            file: "f.pdf".into(),
        };
        assert_eq!(exam.meta_line(), "resit");

        let bare = Exam {
            title: "Final".into(),
            year: None,
            season: None,
            note: None,
            file: "f.pdf".into(),
        };
        assert_eq!(bare.meta_line(), "");
    }
}
