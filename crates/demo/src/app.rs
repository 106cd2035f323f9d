use curved_tabbar::{ChromeConfig, CurvedTabBar, ItemCount, TabBarConfig};
use leptos::children::ViewFn;
use leptos::prelude::*;

fn pane(title: &'static str, body: &'static str) -> ViewFn {
    ViewFn::from(move || {
        view! {
            <div class="demo-pane">
                <h1>{title}</h1>
                <p>{body}</p>
            </div>
        }
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Chrome is the shell's decision, taken once at composition time.
    ChromeConfig::without_native_tab_bar().apply();

    let config = TabBarConfig::new(
        vec![
            pane("Home", "Everything starts here."),
            pane("Alerts", "Nothing new at the moment."),
            pane("Profile", "Who you are on this device."),
            pane("Settings", "Knobs and switches."),
        ],
        vec!["house", "bell", "person", "gear"]
            .into_iter()
            .map(String::from)
            .collect(),
        ItemCount::Four,
    )
    .expect("demo tab configuration is valid");

    let selected = RwSignal::new("house".to_string());
    let on_action = Callback::new(|_| {
        log::info!("action button pressed");
    });

    view! {
        <CurvedTabBar
            selected=selected
            config=config
            action_icon="plus"
            accent_color="#e91e63"
            on_action=on_action
        />
    }
}
