//! Inject page table-of-contents lists into rendered HTML sites.
//!
//! The core operation scans the direct children of a page's content root for
//! headings and either attaches a navigation list to a designated container
//! or removes that container when the page has too few headings to warrant
//! one. The builder applies the operation across a site tree; the CLI wraps
//! the builder.

pub mod builder;
pub mod cli;
pub mod config;
pub mod toc;
pub mod utils;

pub use config::Config;
pub use toc::{insert_page_toc, TocOutcome, TocResult};
