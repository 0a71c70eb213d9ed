//! List Item Port - a delete link and the list item that encloses it

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ListItemPort: Send + Sync {
    /// The link's `href`, if it has one.
    fn href(&self) -> Option<String>;

    /// Fade the enclosing list item out over `duration_ms`, then hide it.
    fn fade_out(&self, duration_ms: u32);
}
