use std::sync::{Mutex, PoisonError};

use crate::ports::outbound::NavigationPort;

/// Records navigation targets instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
    refuse: bool,
}

impl RecordingNavigator {
    /// A navigator whose every attempt fails, as when the browser blocks
    /// the target.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NavigationPort for RecordingNavigator {
    fn navigate(&self, url: &str) -> anyhow::Result<()> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        if self.refuse {
            anyhow::bail!("navigation to {url} was blocked");
        }
        Ok(())
    }
}
