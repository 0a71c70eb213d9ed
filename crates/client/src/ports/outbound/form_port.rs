//! Form Port - the bound form element

use repodash_domain::FormPayload;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FormPort: Send + Sync {
    /// Target URL from the form's `action` attribute.
    fn action(&self) -> String;

    /// Current values of the form's successful controls.
    fn serialize(&self) -> FormPayload;

    /// Enable or disable the form's submit controls.
    fn set_submit_enabled(&self, enabled: bool);
}
