use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source directory holding the rendered site
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory for the processed site
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Identifier of the element whose direct children are scanned
    #[serde(default = "defaults::default_content_root_id")]
    pub content_root_id: String,

    /// Identifier of the element the generated list is attached to
    #[serde(default = "defaults::default_toc_container_id")]
    pub toc_container_id: String,

    /// CSS class carried by the generated list element
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,

    /// Prefix for identifiers synthesized onto headings that lack one
    #[serde(default = "defaults::default_id_prefix")]
    pub id_prefix: String,

    /// Emit an `<ol>` instead of a `<ul>`
    #[serde(default = "defaults::default_ordered_list")]
    pub ordered_list: bool,

    /// Pages with fewer headings than this lose their TOC container
    #[serde(default = "defaults::default_min_headings")]
    pub min_headings: usize,

    /// File extensions treated as pages
    #[serde(default = "defaults::default_html_extensions")]
    pub html_extensions: Vec<String>,

    /// Glob patterns of files to leave out of the pass entirely
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            content_root_id: defaults::default_content_root_id(),
            toc_container_id: defaults::default_toc_container_id(),
            list_class: defaults::default_list_class(),
            id_prefix: defaults::default_id_prefix(),
            ordered_list: defaults::default_ordered_list(),
            min_headings: defaults::default_min_headings(),
            html_extensions: defaults::default_html_extensions(),
            exclude: defaults::default_exclude(),
        }
    }
}
