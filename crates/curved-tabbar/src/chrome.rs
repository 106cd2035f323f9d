//! Host-owned UI chrome configuration.
//!
//! Hiding the platform's default navigation chrome is a decision of the
//! app shell, applied once at composition time. The widget itself never
//! touches global chrome.

use web_sys::window;

/// CSS class set on `<body>` while the native tab bar is suppressed.
/// Stylesheets key off it to hide whatever default chrome the host page
/// carries.
pub const NATIVE_TAB_BAR_HIDDEN_CLASS: &str = "native-tabbar-hidden";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ChromeConfig {
    pub native_tab_bar_hidden: bool,
}

impl ChromeConfig {
    /// The configuration a screen hosting [`CurvedTabBar`](crate::CurvedTabBar)
    /// normally wants.
    pub fn without_native_tab_bar() -> Self {
        Self {
            native_tab_bar_hidden: true,
        }
    }

    /// Applies the configuration to the document. Idempotent; safe to call
    /// again if the shell recomposes.
    pub fn apply(&self) {
        let body = window().and_then(|w| w.document()).and_then(|d| d.body());
        let Some(body) = body else {
            log::warn!("chrome config: document body unavailable");
            return;
        };
        let classes = body.class_list();
        let result = if self.native_tab_bar_hidden {
            classes.add_1(NATIVE_TAB_BAR_HIDDEN_CLASS)
        } else {
            classes.remove_1(NATIVE_TAB_BAR_HIDDEN_CLASS)
        };
        if result.is_err() {
            log::warn!("chrome config: failed to toggle body class");
        } else {
            log::debug!(
                "chrome config applied: native tab bar hidden = {}",
                self.native_tab_bar_hidden
            );
        }
    }
}
