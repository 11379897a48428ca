//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `page` - Page shell (layout.html) and stylesheet
//! - `init` - Scaffolding written by `papershelf init`
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{LAYOUT_HTML, LayoutVars};
//!
//! let html = LAYOUT_HTML.render(&LayoutVars {
//!     page_title: "Mathematics".to_string(),
//!     site_title: "Paper Studio".to_string(),
//!     page_kind: "detail",
//!     content: "<p>…</p>".to_string(),
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    use super::{Template, TemplateVars};

    /// Variables for layout.html.
    pub struct LayoutVars {
        /// Already-escaped document title.
        pub page_title: String,
        /// Already-escaped site title (header brand and footer).
        pub site_title: String,
        /// Page kind marker (`landing` | `subjects` | `detail`), mirrored
        /// into `data-page` the way the reference markup declares it.
        pub page_kind: &'static str,
        /// Rendered `<main>` content.
        pub content: String,
    }

    impl TemplateVars for LayoutVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__PAGE_TITLE__", &self.page_title)
                .replace("__SITE_TITLE__", &self.site_title)
                .replace("__PAGE_KIND__", self.page_kind)
                .replace("__CONTENT__", &self.content)
        }
    }

    /// Page shell shared by every rendered page.
    pub const LAYOUT_HTML: Template<LayoutVars> = Template::new(include_str!("layout.html"));

    /// Default stylesheet, written to the output root as `style.css`.
    pub const STYLE_CSS: &str = include_str!("style.css");
}

pub mod init {
    /// Default configuration written by `papershelf init`.
    pub const CONFIG_TOML: &str = include_str!("init/papershelf.toml");

    /// Starter catalog with one subject and one paper entry.
    pub const STARTER_CATALOG: &str = include_str!("init/catalog.json");
}

#[cfg(test)]
mod tests {
    use super::page::{LAYOUT_HTML, LayoutVars};

    #[test]
    fn test_layout_injects_all_vars() {
        let html = LAYOUT_HTML.render(&LayoutVars {
            page_title: "Mathematics".to_string(),
            site_title: "Paper Studio".to_string(),
            page_kind: "detail",
            content: "<p>hello</p>".to_string(),
        });

        assert!(html.contains("<title>Mathematics</title>"));
        assert!(html.contains("data-page=\"detail\""));
        assert!(html.contains("<p>hello</p>"));
        assert!(!html.contains("__PAGE_TITLE__"));
        assert!(!html.contains("__CONTENT__"));
    }
}
