//! URL to filesystem path resolution for paper downloads.

use std::path::{Path, PathBuf};

/// Resolve a URL path (already stripped of its route prefix) to a file
/// under `serve_root`.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.contains("..") || clean.is_empty() {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    // This prevents traversal via symlinks or encoded sequences
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        // Path escapes serve_root - reject
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("math")).unwrap();
        fs::write(dir.path().join("math/m.pdf"), b"x").unwrap();

        let resolved = resolve_path("math/m.pdf", dir.path()).unwrap();
        assert!(resolved.ends_with("math/m.pdf"));
    }

    #[test]
    fn test_percent_decoding() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a b.pdf"), b"x").unwrap();
        assert!(resolve_path("a%20b.pdf", dir.path()).is_some());
    }

    #[test]
    fn test_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_path("../secret.txt", dir.path()).is_none());
        assert!(resolve_path("%2e%2e/secret.txt", dir.path()).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_path("nope.pdf", dir.path()).is_none());
    }

    #[test]
    fn test_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("math")).unwrap();
        assert!(resolve_path("math", dir.path()).is_none());
    }
}
