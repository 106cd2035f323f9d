//! The composite curved tab bar widget.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::TabBarConfig;
use crate::icons::glyph;
use crate::shape::curved_outline;

/// Height of the bar panel, in CSS pixels.
const BAR_HEIGHT: f64 = 65.0;
/// Width of the spacer reserving room under the action button.
const GAP_WIDTH: f64 = 80.0;
const TAB_ICON_SIZE: u32 = 27;
const ACTION_ICON_SIZE: u32 = 35;

/// Bottom navigation bar with a scalloped cutout and a central floating
/// action button.
///
/// The host owns the selection signal and passes it in; the widget writes
/// it when a tab is tapped and never initializes it. The action button is
/// independent of selection.
#[component]
pub fn CurvedTabBar(
    /// Identifier of the active tab, owned by the host
    selected: RwSignal<String>,
    /// Validated tab content description
    config: TabBarConfig,
    /// Glyph name shown inside the floating action button
    #[prop(into)]
    action_icon: String,
    /// CSS color for the indicator dots and the action button fill
    #[prop(into)]
    accent_color: String,
    /// Invoked when the floating action button is pressed
    on_action: Callback<()>,
) -> impl IntoView {
    let bar_ref = NodeRef::<Div>::new();
    let bar_width = RwSignal::new(0.0_f64);

    let measure = move || {
        if let Some(el) = bar_ref.get_untracked() {
            // try_set: a resize firing during teardown must not touch a
            // disposed signal
            let _ = bar_width.try_set(el.get_bounding_client_rect().width());
        }
    };

    // First measurement right after the bar mounts, then again whenever
    // the window resizes (the clip path depends on the rendered width).
    Effect::new(move |_| {
        if bar_ref.get().is_some() {
            measure();
        }
    });
    let on_resize = Closure::<dyn Fn()>::new(measure);
    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    // Each instance owns its listener and detaches it on unmount, so
    // remounting the bar cannot accumulate handlers.
    let resize_handle = StoredValue::new_local(on_resize);
    on_cleanup(move || {
        resize_handle.with_value(|cb| {
            if let Some(win) = web_sys::window() {
                let _ = win
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
        });
    });

    let clip_path = move || {
        let width = bar_width.get();
        if width > 0.0 {
            format!("path('{}')", curved_outline(width, BAR_HEIGHT).to_svg_path())
        } else {
            "none".to_string()
        }
    };

    let inset = format!("{}px", config.count().padding());
    let gap_index = config.count().gap_index();

    let panes = config
        .active_icons()
        .iter()
        .cloned()
        .zip(config.active_views().iter().cloned())
        .map(|(icon_name, content)| {
            view! {
                <section
                    class="curved-tabbar__pane"
                    style:display=move || {
                        if selected.get() == icon_name { "block" } else { "none" }
                    }
                >
                    {content.run()}
                </section>
            }
        })
        .collect_view();

    let items = config
        .active_icons()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, icon_name)| {
            let tap_target = icon_name.clone();
            let dot_target = icon_name.clone();
            let accent = accent_color.clone();
            let gap = (index == gap_index).then(|| {
                view! {
                    <span
                        class="curved-tabbar__gap"
                        style:width=format!("{}px", GAP_WIDTH)
                    ></span>
                }
            });
            view! {
                {gap}
                <button
                    class="curved-tabbar__item"
                    on:click=move |_| {
                        log::debug!("tab selected: {}", tap_target);
                        selected.set(tap_target.clone());
                    }
                >
                    {glyph(&icon_name, TAB_ICON_SIZE)}
                    <span
                        class="curved-tabbar__dot"
                        style:background-color=move || {
                            dot_color(&dot_target, &selected.get(), &accent)
                        }
                    ></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="curved-tabbar">
            <div class="curved-tabbar__content">{panes}</div>
            <div
                class="curved-tabbar__dock"
                style:padding-left=inset.clone()
                style:padding-right=inset
            >
                <div
                    class="curved-tabbar__bar"
                    node_ref=bar_ref
                    style:height=format!("{}px", BAR_HEIGHT)
                    style:clip-path=clip_path
                >
                    <div class="curved-tabbar__items">{items}</div>
                </div>
                <button
                    class="curved-tabbar__action"
                    style:background-color=action_fill(&accent_color)
                    on:click=move |_| on_action.run(())
                >
                    {glyph(&action_icon, ACTION_ICON_SIZE)}
                </button>
            </div>
        </div>
    }
}

/// Indicator dot fill: accent for the active tab, transparent otherwise.
fn dot_color(icon: &str, selected: &str, accent: &str) -> String {
    if icon == selected {
        accent.to_string()
    } else {
        "transparent".to_string()
    }
}

/// Action button fill: the accent color at 70% opacity, whatever CSS form
/// the accent takes.
fn action_fill(accent: &str) -> String {
    format!("color-mix(in srgb, {} 70%, transparent)", accent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabBarConfig;
    use crate::item_count::ItemCount;
    use leptos::children::ViewFn;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn four_tabs() -> TabBarConfig {
        let pane = |label: &'static str| ViewFn::from(move || label);
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
    fn test_dot_color() {
        assert_eq!(dot_color("house", "house", "#e91e63"), "#e91e63");
        assert_eq!(dot_color("bell", "house", "#e91e63"), "transparent");
        assert_eq!(dot_color("house", "", "#e91e63"), "transparent");
    }

    #[test]
    fn test_action_fill() {
        assert_eq!(
            action_fill("#e91e63"),
            "color-mix(in srgb, #e91e63 70%, transparent)"
        );
    }

    #[test]
    fn test_action_does_not_touch_selection() {
        let selected = RwSignal::new("house".to_string());
        let hits = Arc::new(AtomicU32::new(0));
        let on_action = {
            let hits = Arc::clone(&hits);
            Callback::new(move |_| {
                hits.fetch_add(1, Ordering::Relaxed);
            })
        };

        // Same invocation the action button performs.
        on_action.run(());
        assert_eq!(hits.load(Ordering::Relaxed), 1);
        assert_eq!(selected.get_untracked(), "house");
    }

    #[test]
    fn test_width_write_is_inert_after_dispose() {
        let owner = Owner::new();
        let bar_width = owner.with(|| RwSignal::new(0.0_f64));
        assert!(bar_width.try_set(320.0).is_none());

        drop(owner);
        // A late resize event must be rejected, not panic.
        assert!(bar_width.try_set(640.0).is_some());
    }

    #[test]
    fn test_tap_selects_person_end_to_end() {
        let config = four_tabs();
        let selected = RwSignal::new("house".to_string());
        assert_eq!(config.selected_index(&selected.get_untracked()), Some(0));

        // Same write the tap handler performs for icon index 2.
        selected.set(config.active_icons()[2].clone());
        assert_eq!(selected.get_untracked(), "person");
        assert_eq!(config.selected_index(&selected.get_untracked()), Some(2));
    }

    #[test]
    fn test_foreign_selection_matches_nothing() {
        let config = four_tabs();
        let selected = RwSignal::new("rocket".to_string());
        assert_eq!(config.selected_index(&selected.get_untracked()), None);
        for icon in config.active_icons() {
            assert_eq!(
                dot_color(icon, &selected.get_untracked(), "#e91e63"),
                "transparent"
            );
        }
    }
}
