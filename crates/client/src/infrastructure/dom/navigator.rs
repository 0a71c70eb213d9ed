use anyhow::Context;

use crate::infrastructure::dom::js_error;
use crate::ports::outbound::NavigationPort;

/// Navigates through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl NavigationPort for WindowNavigator {
    fn navigate(&self, url: &str) -> anyhow::Result<()> {
        let window = web_sys::window().context("no window to navigate")?;
        window
            .location()
            .set_href(url)
            .map_err(js_error("location.href rejected the target"))
    }
}
