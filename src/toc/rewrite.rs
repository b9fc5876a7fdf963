use std::cell::Cell;
use std::rc::Rc;

use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};

use crate::config::Config;
use crate::toc::heading::HeadingLevel;
use crate::toc::list::render_list;
use crate::toc::scan::PageScan;
use crate::toc::{TocOutcome, TocResult};
use crate::utils::error::PagetocError;

/// Apply a scanned TOC plan to the page.
///
/// With too few headings the TOC container is removed outright. Otherwise a
/// fresh list is attached to the container, any previously generated list is
/// dropped first, and headings that were scanned without an identifier get
/// their synthesized one written back. Everything the pass does not touch is
/// preserved byte-for-byte.
///
/// Config identifiers are validated at load time, so the selectors built
/// here always parse.
pub fn apply_toc(html: &str, scan: &PageScan, config: &Config) -> Result<TocResult, PagetocError> {
    let container = format!("#{}", config.toc_container_id);

    if scan.outcome(config) == TocOutcome::Removed {
        let output = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(container, |el| {
                    el.remove();
                    Ok(())
                })],
                ..RewriteStrSettings::default()
            },
        )?;
        return Ok(TocResult {
            html: output,
            outcome: TocOutcome::Removed,
        });
    }

    let list_html = render_list(&scan.headings, config);
    let stale_list = format!("#{} > .{}", config.toc_container_id, config.list_class);
    let headings = Rc::new(scan.headings.clone());
    // Counts candidate headings in stream order, which is the scan's
    // document order, so the cursor stays in lockstep with the snapshot.
    let cursor = Rc::new(Cell::new(0usize));

    let mut handlers = vec![
        element!(stale_list, |el| {
            el.remove();
            Ok(())
        }),
        element!(container, move |el| {
            el.append(&list_html, ContentType::Html);
            Ok(())
        }),
    ];
    for level in HeadingLevel::ALL {
        let selector = format!("#{} > {}", config.content_root_id, level.tag_name());
        let headings = Rc::clone(&headings);
        let cursor = Rc::clone(&cursor);
        handlers.push(element!(selector, move |el| {
            let index = cursor.get();
            cursor.set(index + 1);
            if let Some(heading) = headings.get(index) {
                if heading.synthesized {
                    el.set_attribute("id", &heading.id)?;
                }
            }
            Ok(())
        }));
    }

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )?;

    Ok(TocResult {
        html: output,
        outcome: TocOutcome::Inserted {
            entries: scan.headings.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::scan::scan_page;
    use pretty_assertions::assert_eq;

    fn apply(html: &str, config: &Config) -> TocResult {
        let scan = scan_page(html, config).unwrap();
        apply_toc(html, &scan, config).unwrap()
    }

    #[test]
    fn test_removes_container_when_no_headings() {
        let html = "<body><div id=\"body\"><p>text</p></div><div id=\"toc\"></div></body>";
        let result = apply(html, &Config::default());

        assert_eq!(result.outcome, TocOutcome::Removed);
        assert_eq!(
            result.html,
            "<body><div id=\"body\"><p>text</p></div></body>"
        );
    }

    #[test]
    fn test_removes_container_and_its_content_for_single_heading() {
        let html = "<body><div id=\"body\"><h1>Title</h1></div>\
                    <div id=\"toc\"><p>placeholder</p></div></body>";
        let result = apply(html, &Config::default());

        assert_eq!(result.outcome, TocOutcome::Removed);
        assert!(!result.html.contains("placeholder"));
        assert!(!result.html.contains("<div id=\"toc\">"));
        // The rest of the page is untouched
        assert!(result.html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_inserts_list_and_assigns_missing_ids() {
        let html = "<body><div id=\"body\">\
                    <h1>Intro</h1><p>text</p><h2 id=\"setup\">Setup</h2><h3>Details</h3>\
                    </div><div id=\"toc\"></div></body>";
        let result = apply(html, &Config::default());

        assert_eq!(result.outcome, TocOutcome::Inserted { entries: 3 });
        assert!(result.html.contains("<h1 id=\"toc0\">Intro</h1>"));
        assert!(result.html.contains("<h2 id=\"setup\">Setup</h2>"));
        assert!(result.html.contains("<h3 id=\"toc2\">Details</h3>"));
        assert!(result.html.contains(
            "<div id=\"toc\"><ul class=\"toc\">\n\
             <li class=\"tocH1\"><a href=\"#toc0\">Intro</a></li>\n\
             <li class=\"tocH2\"><a href=\"#setup\">Setup</a></li>\n\
             <li class=\"tocH3\"><a href=\"#toc2\">Details</a></li>\n\
             </ul></div>"
        ));
    }

    #[test]
    fn test_nested_headings_keep_their_markup_untouched() {
        let html = "<body><div id=\"body\">\
                    <h2>Top</h2><h2>Other</h2>\
                    <div class=\"aside\"><h3>Nested</h3></div>\
                    </div><div id=\"toc\"></div></body>";
        let result = apply(html, &Config::default());

        assert_eq!(result.outcome, TocOutcome::Inserted { entries: 2 });
        // Nested heading gains no id and no entry
        assert!(result.html.contains("<h3>Nested</h3>"));
        assert!(!result.html.contains("Nested</a>"));
    }

    #[test]
    fn test_container_keeps_unrelated_content() {
        let html = "<body><div id=\"body\"><h1>A</h1><h2>B</h2></div>\
                    <div id=\"toc\"><h2 class=\"toc-title\">Contents</h2></div></body>";
        let result = apply(html, &Config::default());

        assert!(result
            .html
            .contains("<h2 class=\"toc-title\">Contents</h2><ul class=\"toc\">"));
    }

    #[test]
    fn test_reinvocation_is_idempotent() {
        let html = "<body><div id=\"body\">\
                    <h1>Intro</h1><h2 id=\"setup\">Setup</h2><h3>Details</h3>\
                    </div><div id=\"toc\"></div></body>";
        let config = Config::default();

        let first = apply(html, &config);
        let second = apply(&first.html, &config);

        assert_eq!(second.outcome, TocOutcome::Inserted { entries: 3 });
        assert_eq!(second.html, first.html);
    }
}
