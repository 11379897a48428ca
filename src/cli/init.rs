//! Archive initialization.
//!
//! Creates a new archive: configuration, a starter catalog, and an empty
//! papers directory.

use crate::{config::SiteConfig, embed, log};
use anyhow::{Context, Result};
use std::fs;

/// Create a new archive with default structure
///
/// # Steps
/// 1. Refuse to overwrite an existing config
/// 2. Create directory structure (`data/`, `papers/`)
/// 3. Write configuration and starter catalog
pub fn new_archive(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if config.config_path.exists() {
        log!(
            "error";
            "'{}' already exists - refusing to overwrite",
            config.config_path.display()
        );
        std::process::exit(1);
    }

    fs::create_dir_all(root.join("data"))
        .with_context(|| format!("Failed to create {}", root.join("data").display()))?;
    fs::create_dir_all(root.join("papers"))
        .with_context(|| format!("Failed to create {}", root.join("papers").display()))?;

    fs::write(&config.config_path, embed::init::CONFIG_TOML)
        .with_context(|| format!("Failed to write {}", config.config_path.display()))?;

    let catalog_path = root.join("data").join("catalog.json");
    fs::write(&catalog_path, embed::init::STARTER_CATALOG)
        .with_context(|| format!("Failed to write {}", catalog_path.display()))?;

    log!("init"; "Archive initialized at {}", root.display());
    log!("init"; "Drop papers under papers/ and describe them in data/catalog.json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::embed;

    #[test]
    fn test_starter_catalog_parses() {
        let catalog = Catalog::from_json(embed::init::STARTER_CATALOG).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.subject("math").is_some());
    }

    #[test]
    fn test_config_template_parses() {
        let config = crate::config::SiteConfig::from_str(embed::init::CONFIG_TOML).unwrap();
        assert_eq!(config.site.title, "Paper Studio");
        assert_eq!(config.serve.port, 5277);
    }
}
