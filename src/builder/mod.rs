pub mod site;
pub mod types;

pub use site::{build_site, check_site, clean_destination};
pub use types::BuildStats;
