//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Paper Studio"
//! description = "Past papers, organised by subject"
//!
//! [build]
//! catalog = "data/catalog.json"
//! papers = "papers"
//! output = "dist"
//!
//! [serve]
//! interface = "127.0.0.1"
//! port = 5277
//! ```

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// `[site]` section: archive metadata shown on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Archive title (header brand, breadcrumbs, page titles).
    pub title: String,

    /// Short description shown on the landing page.
    pub description: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Paper Studio".to_string(),
            description: "Past papers, organised by subject".to_string(),
        }
    }
}

/// `[build]` section: paths in and out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Catalog file describing subjects and papers.
    pub catalog: PathBuf,

    /// Directory holding the paper documents referenced by the catalog.
    pub papers: PathBuf,

    /// Where the static site is written.
    pub output: PathBuf,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/catalog.json"),
            papers: PathBuf::from("papers"),
            output: PathBuf::from("dist"),
            clean: false,
        }
    }
}

/// `[serve]` section: development server settings.
///
/// Use `interface = "0.0.0.0"` to make the server accessible from LAN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeSection {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
        }
    }
}
