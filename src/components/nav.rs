//! Navigation Component
//!
//! Header bar with brand, route links and the theme toggle.

use leptos::*;
use leptos_router::*;

use crate::components::Icon;
use crate::state::theme::ThemeStore;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_context::<ThemeStore>().expect("ThemeStore not found");

    let is_dark = theme.is_dark_mode;
    let toggle = move |_| theme.toggle_dark_mode();

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                // Brand
                <A href="/" class="brand">
                    <Icon name="map-pin" size=20 />
                    <span class="brand-name">"AirMap"</span>
                </A>

                // Navigation links
                <div class="nav-links">
                    <NavLink href="/" label="Map" />
                    <NavLink href="/anomalies" label="Anomalies" />
                </div>

                // Theme toggle
                <button class="btn btn-ghost" on:click=toggle title="Toggle theme">
                    {move || {
                        if is_dark.get() {
                            view! { <Icon name="sun" size=18 /> }
                        } else {
                            view! { <Icon name="moon" size=18 /> }
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="nav-link"
            active_class="nav-link-active"
        >
            {label}
        </A>
    }
}
