//! Dashboard Page
//!
//! Map view with the query controls: time window, pollutant selection,
//! reading load, bound fitting and region density.

use leptos::*;

use crate::api;
use crate::components::{Icon, Loading, MapView};
use crate::state::map::{bounds_of, MapStore, Marker};
use crate::state::notices::Notices;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let map = use_context::<MapStore>().expect("MapStore not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (pollutants, set_pollutants) = create_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(false);
    let (density, set_density) = create_signal(None::<f64>);

    // Fetch the pollutant list on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_pollutants().await {
                Ok(list) => set_pollutants.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch pollutants: {}", e).into());
                }
            }
        });
    });

    // Load readings for the current window and repopulate the markers
    let load_readings = move |_| {
        set_loading.set(true);

        spawn_local(async move {
            let from = map.time_from.get_untracked();
            let to = map.time_to.get_untracked();
            let pollutant = map.selected_pollutant.get_untracked();

            match api::fetch_pollutions(&from, &to, pollutant.as_deref()).await {
                Ok(readings) => {
                    map.clear_markers();
                    let count = readings.len();
                    for reading in readings {
                        map.add_marker(Marker {
                            lat: reading.latitude,
                            lng: reading.longitude,
                            value: reading.value,
                        });
                    }
                    notices.show_success(&format!("Loaded {} readings", count));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch pollutions: {}", e).into());
                    notices.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    };

    // Derive the bounding box from the plotted markers
    let fit_bounds = move |_| {
        match bounds_of(&map.markers.get_untracked()) {
            Some(extent) => map.graph_bound.set(extent),
            None => notices.show_error("No markers to fit"),
        }
    };

    // Query the average density for the active bounds and window
    let query_density = move |_| {
        let bound = map.graph_bound.get_untracked();
        if bound.len() != 4 {
            notices.show_error("Fit the map bounds first");
            return;
        }
        let Some(pollutant) = map.selected_pollutant.get_untracked() else {
            notices.show_error("Select a pollutant first");
            return;
        };

        let query = api::DensityQuery {
            lat_from: bound[0],
            lat_to: bound[1],
            long_from: bound[2],
            long_to: bound[3],
            from: map.time_from.get_untracked(),
            to: map.time_to.get_untracked(),
        };

        spawn_local(async move {
            match api::fetch_region_density(&pollutant, &query).await {
                Ok(result) => set_density.set(Some(result.density)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch density: {}", e).into());
                    notices.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="page">
            // Page header
            <div class="page-header">
                <div>
                    <h1>"Pollution Map"</h1>
                    <p class="muted">"Readings for the selected window"</p>
                </div>
            </div>

            // Query controls
            <section class="card">
                <div class="controls">
                    <label class="field">
                        <span>"From"</span>
                        <input
                            type="date"
                            prop:value=move || map.time_from.get()
                            on:input=move |ev| map.time_from.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span>"To"</span>
                        <input
                            type="date"
                            prop:value=move || map.time_to.get()
                            on:input=move |ev| map.time_to.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span>"Pollutant"</span>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            map.selected_pollutant.set(if value.is_empty() { None } else { Some(value) });
                        }>
                            <option value="">"All pollutants"</option>
                            {move || pollutants.get().into_iter().map(|p| view! {
                                <option value=p.clone()>{p}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <button
                        class="btn btn-primary"
                        on:click=load_readings
                        disabled=move || loading.get()
                    >
                        <Icon name="plus-circle" size=16 />
                        {move || if loading.get() { "Loading..." } else { "Load readings" }}
                    </button>

                    <button class="btn" on:click=fit_bounds title="Fit bounds to markers">
                        <Icon name="expand" size=16 />
                        "Fit bounds"
                    </button>

                    <button class="btn" on:click=query_density>
                        "Region density"
                    </button>
                </div>
            </section>

            // Density result
            {move || density.get().map(|value| view! {
                <section class="card density-card">
                    <div class="density-row">
                        <span>{format!("Average density in view: {:.2}", value)}</span>
                        <button
                            class="btn btn-ghost"
                            on:click=move |_| set_density.set(None)
                            title="Dismiss"
                        >
                            <Icon name="close" size=14 />
                        </button>
                    </div>
                </section>
            })}

            // Marker layer
            <section class="card">
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <MapView /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
