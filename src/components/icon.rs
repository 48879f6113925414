//! Icon Component
//!
//! Renders a named icon from the registry as inline SVG.

use leptos::*;

use crate::icons;

/// Inline-SVG icon looked up by registry name
#[component]
pub fn Icon(
    /// Registry name, e.g. "bell-solid"
    name: &'static str,
    #[prop(default = 16)] size: u32,
) -> impl IntoView {
    match icons::lookup(name) {
        Some(def) => {
            let (fill, stroke) = if def.solid {
                ("currentColor", "none")
            } else {
                ("none", "currentColor")
            };

            view! {
                <svg
                    class="icon"
                    width=size
                    height=size
                    viewBox=def.view_box
                    fill=fill
                    stroke=stroke
                    stroke-width="1.8"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <path d=def.path />
                </svg>
            }
            .into_view()
        }
        None => {
            web_sys::console::warn_1(&format!("Unregistered icon: {}", name).into());
            view! { <span class="icon icon-missing" /> }.into_view()
        }
    }
}
