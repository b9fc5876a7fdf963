mod build;
mod check;
mod clean;

pub use build::handle_build_command;
pub use check::handle_check_command;
pub use clean::handle_clean_command;
