/// Counters aggregated over one site pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    /// Pages picked up by the pass
    pub pages: usize,
    /// Pages that received a generated list
    pub inserted: usize,
    /// Pages whose TOC container was removed
    pub removed: usize,
    /// Non-page files mirrored into the destination
    pub copied: usize,
    /// Pages that could not be processed
    pub failed: usize,
}
