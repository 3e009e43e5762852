//! Browser-backed preference store and viewport detection.

use swap_header::providers::{PreferenceStore, ViewportDetector};
use web_sys::Storage;

const DARK_MODE_KEY: &str = "streetswap.darkMode";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Dark-mode flag persisted in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn dark_mode(&self) -> bool {
        local_storage()
            .and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten())
            .is_some_and(|v| v == "true")
    }

    fn set_dark_mode(&mut self, dark: bool) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage
            .set_item(DARK_MODE_KEY, if dark { "true" } else { "false" })
            .is_err()
        {
            web_sys::console::warn_1(&"failed to persist dark mode".into());
        }
    }
}

/// Small/touch device, judged from the user agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserAgentViewport;

impl ViewportDetector for UserAgentViewport {
    fn is_mobile(&self) -> bool {
        let Some(agent) = web_sys::window().and_then(|w| w.navigator().user_agent().ok()) else {
            return false;
        };
        ["Mobi", "Android", "iPhone", "iPad", "iPod"]
            .iter()
            .any(|marker| agent.contains(marker))
    }
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or(1440)
}
