mod heading;
mod list;
mod rewrite;
mod scan;

pub use heading::{Heading, HeadingLevel};
pub use list::render_list;
pub use rewrite::apply_toc;
pub use scan::{scan_page, PageScan};

use crate::config::Config;
use crate::utils::error::PagetocError;

/// What a TOC pass did (or would do) to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocOutcome {
    /// A list with this many entries was attached to the container
    Inserted { entries: usize },
    /// Too few headings; the container was removed
    Removed,
}

/// A rewritten page together with its outcome.
#[derive(Debug, Clone)]
pub struct TocResult {
    pub html: String,
    pub outcome: TocOutcome,
}

/// Build the page table of contents for one rendered page.
///
/// Scans the direct children of the content root for headings, then either
/// attaches a navigation list to the TOC container or removes the container
/// when the page has fewer than `min_headings` headings. Fails if either
/// element is missing from the page.
pub fn insert_page_toc(html: &str, config: &Config) -> Result<TocResult, PagetocError> {
    let scan = scan_page(html, config)?;
    apply_toc(html, &scan, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_page_toc_end_to_end() {
        let html = "<html><body>\
                    <div id=\"toc\"></div>\
                    <div id=\"body\"><h1>One</h1><h2>Two</h2></div>\
                    </body></html>";
        let result = insert_page_toc(html, &Config::default()).unwrap();

        assert_eq!(result.outcome, TocOutcome::Inserted { entries: 2 });
        assert!(result.html.contains("<a href=\"#toc0\">One</a>"));
        assert!(result.html.contains("<a href=\"#toc1\">Two</a>"));
    }

    #[test]
    fn test_insert_page_toc_surfaces_lookup_errors() {
        let err = insert_page_toc("<p>nothing here</p>", &Config::default()).unwrap_err();
        assert!(matches!(err, PagetocError::ContentRootMissing(_)));
    }

    #[test]
    fn test_custom_element_ids() {
        let config = Config {
            content_root_id: "main".to_string(),
            toc_container_id: "outline".to_string(),
            ..Config::default()
        };
        let html = "<body><div id=\"outline\"></div>\
                    <div id=\"main\"><h2>A</h2><h2>B</h2></div></body>";
        let result = insert_page_toc(html, &config).unwrap();

        assert_eq!(result.outcome, TocOutcome::Inserted { entries: 2 });
        assert!(result.html.contains("<div id=\"outline\"><ul class=\"toc\">"));
    }
}
