use crate::config::Config;
use crate::toc::heading::Heading;

/// Render the navigation list for a set of scanned headings.
///
/// Entry labels are the headings' inner HTML, copied verbatim; identifier
/// values are attribute-escaped before they land in `href`.
pub fn render_list(headings: &[Heading], config: &Config) -> String {
    let tag = if config.ordered_list { "ol" } else { "ul" };

    let mut html = format!(
        "<{} class=\"{}\">\n",
        tag,
        html_escape::encode_double_quoted_attribute(&config.list_class)
    );
    for heading in headings {
        html.push_str(&format!(
            "<li class=\"{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level.item_class(),
            html_escape::encode_double_quoted_attribute(&heading.id),
            heading.label
        ));
    }
    html.push_str(&format!("</{}>", tag));

    html
}
