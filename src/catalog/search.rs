//! Keyword search over the catalog.
//!
//! A linear substring scan in catalog order - no index, which is fine for
//! the tens of entries a paper archive holds. Matching is case-insensitive.
//!
//! Precedence: the first matching subject wins over anything later; within
//! a subject, a name match beats any exam match and selects the first exam.

use super::model::Catalog;

/// A successful keyword match, addressing an exam by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Index of the matched subject within the catalog.
    pub subject_index: usize,
    /// Index of the matched exam within that subject (0 for name matches).
    pub exam_index: usize,
}

/// Find the first subject or exam matching `keyword`.
///
/// The keyword is trimmed and case-folded; an empty or whitespace-only
/// keyword never matches. Subjects match on their name; exams match on the
/// space-joined title/year/season/note text.
pub fn find_by_keyword(keyword: &str, catalog: &Catalog) -> Option<KeywordMatch> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    for (subject_index, subject) in catalog.subjects.iter().enumerate() {
        if subject.name.to_lowercase().contains(&needle) {
            return Some(KeywordMatch {
                subject_index,
                exam_index: 0,
            });
        }

        let exam_index = subject
            .exams
            .iter()
            .position(|exam| exam.haystack().to_lowercase().contains(&needle));
        if let Some(exam_index) = exam_index {
            return Some(KeywordMatch {
                subject_index,
                exam_index,
            });
        }
    }

    None
}
