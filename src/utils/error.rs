use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for pagetoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for pagetoc operations
#[derive(Debug)]
pub enum PagetocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// The content root element could not be located
    ContentRootMissing(String),
    /// The TOC container element could not be located
    TocContainerMissing(String),
    /// The HTML rewriter rejected the page
    Rewrite(lol_html::errors::RewritingError),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PagetocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagetocError::Io(err) => write!(f, "IO error: {}", err),
            PagetocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PagetocError::ContentRootMissing(id) => {
                write!(f, "Content root element '#{}' not found", id)
            }
            PagetocError::TocContainerMissing(id) => {
                write!(f, "TOC container element '#{}' not found", id)
            }
            PagetocError::Rewrite(err) => write!(f, "HTML rewrite error: {}", err),
            PagetocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PagetocError {}

impl From<io::Error> for PagetocError {
    fn from(err: io::Error) -> Self {
        PagetocError::Io(err)
    }
}

impl From<lol_html::errors::RewritingError> for PagetocError {
    fn from(err: lol_html::errors::RewritingError) -> Self {
        PagetocError::Rewrite(err)
    }
}

impl From<String> for PagetocError {
    fn from(msg: String) -> Self {
        PagetocError::Generic(msg)
    }
}

impl From<&str> for PagetocError {
    fn from(msg: &str) -> Self {
        PagetocError::Generic(msg.to_string())
    }
}
