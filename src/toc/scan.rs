use scraper::{ElementRef, Html};

use crate::config::Config;
use crate::toc::heading::{Heading, HeadingLevel};
use crate::toc::TocOutcome;
use crate::utils::error::PagetocError;

/// Immutable snapshot of one page's TOC-relevant structure.
///
/// The snapshot is taken over a parsed copy of the page, so the rewrite pass
/// that consumes it can never invalidate the traversal that produced it.
#[derive(Debug, Clone)]
pub struct PageScan {
    /// Candidate headings in document order
    pub headings: Vec<Heading>,
}

impl PageScan {
    /// What a rewrite pass driven by this snapshot will do.
    pub fn outcome(&self, config: &Config) -> TocOutcome {
        if self.headings.len() < config.min_headings {
            TocOutcome::Removed
        } else {
            TocOutcome::Inserted {
                entries: self.headings.len(),
            }
        }
    }
}

/// Scan a rendered page for TOC candidates.
///
/// Collects the direct children of the content root whose tag is one of the
/// six heading levels, in document order. Headings nested deeper than one
/// level do not participate. Fails if the content root or the TOC container
/// cannot be located.
pub fn scan_page(html: &str, config: &Config) -> Result<PageScan, PagetocError> {
    let document = Html::parse_document(html);

    let root = element_with_id(&document, &config.content_root_id)
        .ok_or_else(|| PagetocError::ContentRootMissing(config.content_root_id.clone()))?;
    if element_with_id(&document, &config.toc_container_id).is_none() {
        return Err(PagetocError::TocContainerMissing(
            config.toc_container_id.clone(),
        ));
    }

    let mut headings = Vec::new();
    for child in root.children() {
        let Some(element) = ElementRef::wrap(child) else {
            continue;
        };
        let Some(level) = HeadingLevel::from_tag(element.value().name()) else {
            continue;
        };

        // An empty id attribute counts as missing; synthesized ids are
        // indexed over headings only, so they stay unique within the page.
        let existing = element.value().attr("id").filter(|id| !id.is_empty());
        let (id, synthesized) = match existing {
            Some(id) => (id.to_string(), false),
            None => (format!("{}{}", config.id_prefix, headings.len()), true),
        };

        headings.push(Heading {
            level,
            id,
            synthesized,
            label: element.inner_html(),
        });
    }

    Ok(PageScan { headings })
}

fn element_with_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().id() == Some(id))
}
