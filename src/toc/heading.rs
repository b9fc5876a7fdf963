/// The six heading levels a page can carry, from most to least significant.
///
/// Keeping this an enum (rather than raw tag-name strings) makes invalid
/// levels unrepresentable in the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Parse a lowercase element tag name ("h1".."h6") into a level.
    pub fn from_tag(tag: &str) -> Option<HeadingLevel> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// Numeric rank of the level (h1 = 1, h6 = 6)
    pub fn rank(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// The element tag name for this level
    pub fn tag_name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// CSS class applied to this level's list entry, e.g. `tocH2`.
    ///
    /// The uppercase tag matches what browser-side generators derive from
    /// `nodeName`, so existing stylesheets keep working.
    pub fn item_class(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "tocH1",
            HeadingLevel::H2 => "tocH2",
            HeadingLevel::H3 => "tocH3",
            HeadingLevel::H4 => "tocH4",
            HeadingLevel::H5 => "tocH5",
            HeadingLevel::H6 => "tocH6",
        }
    }
}

/// One heading captured during a page scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, used for per-entry styling
    pub level: HeadingLevel,
    /// Anchor identifier the entry links to
    pub id: String,
    /// Whether the identifier was synthesized (the heading had none)
    pub synthesized: bool,
    /// Inner HTML of the heading, copied verbatim into the entry label
    pub label: String,
}
