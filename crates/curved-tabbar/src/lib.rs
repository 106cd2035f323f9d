//! Curved bottom tab bar for Leptos (CSR).
//!
//! A bottom navigation bar with a scalloped cutout nesting a central
//! floating action button. The host owns the selection signal and supplies
//! tab content through a validated [`TabBarConfig`]; the widget renders the
//! matching pane, the frosted bar with per-tab icons and indicator dots,
//! and the action button above the cutout.

pub mod chrome;
pub mod config;
pub mod icons;
pub mod item_count;
pub mod shape;
pub mod tab_bar;

pub use chrome::ChromeConfig;
pub use config::{ConfigError, TabBarConfig};
pub use item_count::ItemCount;
pub use shape::{curved_outline, CurvedOutline};
pub use tab_bar::CurvedTabBar;
