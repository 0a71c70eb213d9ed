//! Navigation Port - full-page navigation

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NavigationPort: Send + Sync {
    /// Point the page at `url`. Unless `url` is fragment-only the page
    /// unloads afterwards; an `Err` means it stays where it is.
    fn navigate(&self, url: &str) -> anyhow::Result<()>;
}
