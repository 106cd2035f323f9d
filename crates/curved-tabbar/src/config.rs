//! Tab bar configuration.
//!
//! The configuration is an explicit immutable value constructed by the
//! host: parallel `views` / `icons` sequences plus an [`ItemCount`]
//! declaring how many of them are rendered. Entries beyond the declared
//! count are ignored. Validation happens once, in [`TabBarConfig::new`];
//! the widget trusts the value afterwards.

use std::fmt;

use leptos::children::ViewFn;
use thiserror::Error;

use crate::item_count::ItemCount;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{supplied} views supplied, item count declares {declared}")]
    NotEnoughViews { supplied: usize, declared: usize },
    #[error("{supplied} icons supplied, item count declares {declared}")]
    NotEnoughIcons { supplied: usize, declared: usize },
    #[error("duplicate icon identifier `{0}` among active tabs")]
    DuplicateIcon(String),
}

/// Immutable tab content description passed to the widget at construction.
///
/// `icons[i]` labels `views[i]` for every active index; each identifier
/// doubles as the selection tag and as the glyph name.
#[derive(Clone)]
pub struct TabBarConfig {
    views: Vec<ViewFn>,
    icons: Vec<String>,
    count: ItemCount,
}

// `views` holds opaque render closures, so Debug reports only their count.
impl fmt::Debug for TabBarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarConfig")
            .field("icons", &self.icons)
            .field("count", &self.count)
            .field("views", &self.views.len())
            .finish()
    }
}

impl TabBarConfig {
    /// Builds a configuration, checking that both sequences cover the
    /// declared count and that active icon identifiers are unique.
    pub fn new(
        views: Vec<ViewFn>,
        icons: Vec<String>,
        count: ItemCount,
    ) -> Result<Self, ConfigError> {
        let declared = count.get();
        if views.len() < declared {
            return Err(ConfigError::NotEnoughViews {
                supplied: views.len(),
                declared,
            });
        }
        if icons.len() < declared {
            return Err(ConfigError::NotEnoughIcons {
                supplied: icons.len(),
                declared,
            });
        }
        for (i, icon) in icons[..declared].iter().enumerate() {
            if icons[..i].contains(icon) {
                return Err(ConfigError::DuplicateIcon(icon.clone()));
            }
        }
        Ok(Self {
            views,
            icons,
            count,
        })
    }

    pub fn count(&self) -> ItemCount {
        self.count
    }

    /// Identifiers of the rendered tabs, in display order.
    pub fn active_icons(&self) -> &[String] {
        &self.icons[..self.count.get()]
    }

    /// Content of the rendered tabs, index-aligned with [`active_icons`](Self::active_icons).
    pub fn active_views(&self) -> &[ViewFn] {
        &self.views[..self.count.get()]
    }

    /// Index of the tab whose identifier equals `selected`, if any.
    /// A foreign value is a valid no-match state, not an error.
    pub fn selected_index(&self, selected: &str) -> Option<usize> {
        self.active_icons().iter().position(|icon| icon == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(label: &'static str) -> ViewFn {
        ViewFn::from(move || label)
    }

    fn four_tabs() -> TabBarConfig {
        TabBarConfig::new(
            vec![pane("Home"), pane("Alerts"), pane("Profile"), pane("Settings")],
            vec!["house", "bell", "person", "gear"]
                .into_iter()
                .map(String::from)
                .collect(),
            ItemCount::Four,
        )
        .unwrap()
    }

    #[test]
    fn test_active_prefix() {
        let config = four_tabs();
        assert_eq!(config.active_icons().len(), 4);
        assert_eq!(config.active_views().len(), 4);
        assert_eq!(config.active_icons()[0], "house");
        assert_eq!(config.active_icons()[3], "gear");
    }

    #[test]
    fn test_extra_entries_are_ignored() {
        let config = TabBarConfig::new(
            vec![pane("a"), pane("b"), pane("c")],
            vec!["house".into(), "bell".into(), "star".into()],
            ItemCount::Two,
        )
        .unwrap();
        assert_eq!(config.active_icons(), ["house", "bell"]);
        assert_eq!(config.active_views().len(), 2);
        // The third entry is present but never offered for selection.
        assert_eq!(config.selected_index("star"), None);
    }

    #[test]
    fn test_selected_index() {
        let config = four_tabs();
        assert_eq!(config.selected_index("house"), Some(0));
        assert_eq!(config.selected_index("person"), Some(2));
        assert_eq!(config.selected_index("rocket"), None);
        assert_eq!(config.selected_index(""), None);
    }

    #[test]
    fn test_short_views_rejected() {
        let err = TabBarConfig::new(
            vec![pane("only")],
            vec!["house".into(), "bell".into()],
            ItemCount::Two,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotEnoughViews {
                supplied: 1,
                declared: 2
            }
        );
    }

    #[test]
    fn test_short_icons_rejected() {
        let err = TabBarConfig::new(
            vec![pane("a"), pane("b")],
            vec!["house".into()],
            ItemCount::Two,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotEnoughIcons {
                supplied: 1,
                declared: 2
            }
        );
    }

    #[test]
    fn test_duplicate_active_icon_rejected() {
        let err = TabBarConfig::new(
            vec![pane("a"), pane("b"), pane("c"), pane("d")],
            vec!["house".into(), "bell".into(), "house".into(), "gear".into()],
            ItemCount::Four,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateIcon("house".into()));
    }

    #[test]
    fn test_duplicate_beyond_count_allowed() {
        // Duplicates among ignored entries cannot confuse selection.
        let config = TabBarConfig::new(
            vec![pane("a"), pane("b"), pane("c")],
            vec!["house".into(), "bell".into(), "house".into()],
            ItemCount::Two,
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_debug_reports_view_count() {
        let rendered = format!("{:?}", four_tabs());
        assert!(rendered.contains("\"house\""));
        assert!(rendered.contains("count: Four"));
        assert!(rendered.contains("views: 4"));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NotEnoughIcons {
            supplied: 3,
            declared: 4,
        };
        assert_eq!(err.to_string(), "3 icons supplied, item count declares 4");
        assert_eq!(
            ConfigError::DuplicateIcon("bell".into()).to_string(),
            "duplicate icon identifier `bell` among active tabs"
        );
    }
}
