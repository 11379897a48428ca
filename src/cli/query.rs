//! Query command implementation.
//!
//! Prints the catalog as JSON, or the result of a keyword search when a
//! keyword is given. Output goes to stdout so it can be piped into `jq`.

use crate::catalog::{CatalogStore, find_by_keyword};
use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;
use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let store = CatalogStore::new(&config.build.catalog);
    let catalog = store
        .load()
        .with_context(|| "Failed to load the paper catalog")?;

    debug!("query"; "catalog has {} subjects", catalog.subjects.len());

    let value: JsonValue = match &args.keyword {
        None => serde_json::to_value(&*catalog)?,
        Some(keyword) => match find_by_keyword(keyword, &catalog) {
            None => json!({ "subject": JsonValue::Null, "exam": JsonValue::Null }),
            Some(found) => {
                let subject = &catalog.subjects[found.subject_index];
                json!({
                    "subject": subject.id,
                    "name": subject.name,
                    "exam": found.exam_index,
                    "title": subject.exams.get(found.exam_index).map(|exam| exam.title.clone()),
                })
            }
        },
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_with_catalog(json: &str) -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, json).unwrap();

        let mut config = SiteConfig::default();
        config.build.catalog = path;
        (dir, config)
    }

    #[test]
    fn test_query_whole_catalog() {
        let (_dir, config) = config_with_catalog(
            r#"{"subjects": [{"id": "math", "name": "Mathematics", "exams": []}]}"#,
        );
        let args = QueryArgs {
            keyword: None,
            pretty: false,
        };
        assert!(run_query(&args, &config).is_ok());
    }

    #[test]
    fn test_query_with_keyword() {
        let (_dir, config) = config_with_catalog(
            r#"{"subjects": [{"id": "math", "name": "Mathematics", "exams": [
                {"title": "Midterm 2020", "file": "math/m.pdf"}
            ]}]}"#,
        );
        let args = QueryArgs {
            keyword: Some("2020".into()),
            pretty: true,
        };
        assert!(run_query(&args, &config).is_ok());
    }

    #[test]
    fn test_query_missing_catalog_fails() {
        let mut config = SiteConfig::default();
        config.build.catalog = std::path::PathBuf::from("/nonexistent/catalog.json");
        let args = QueryArgs {
            keyword: None,
            pretty: false,
        };
        assert!(run_query(&args, &config).is_err());
    }
}
