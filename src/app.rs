//! App Root Component
//!
//! Root component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Anomalies, Dashboard};
use crate::platform;
use crate::state::map::provide_map_store;
use crate::state::notices::provide_notices;
use crate::state::theme::{provide_theme_store, ThemeStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the stores to all components
    provide_map_store();
    provide_notices();
    provide_theme_store();

    // Resolve the theme once per session, before the first paint
    let theme = use_context::<ThemeStore>().expect("ThemeStore not found");
    theme.init_theme(platform::system_prefers_dark());

    view! {
        <Router>
            <div class="app-shell">
                // Navigation header
                <Nav />

                // Main content area
                <main class="container main">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/anomalies" view=Anomalies />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page Not Found"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">"Back to the map"</A>
        </div>
    }
}
