//! Anomalies Page
//!
//! Readings flagged as anomalous within the selected time range.

use leptos::*;

use crate::api;
use crate::components::{Icon, Loading};
use crate::state::map::MapStore;
use crate::state::notices::Notices;

/// Render an API timestamp for display
fn format_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Anomalies page component
#[component]
pub fn Anomalies() -> impl IntoView {
    let map = use_context::<MapStore>().expect("MapStore not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (anomalies, set_anomalies) = create_signal(Vec::<api::PollutionReading>::new());
    let (loading, set_loading) = create_signal(false);
    let (loaded, set_loaded) = create_signal(false);

    let load_anomalies = move |_| {
        set_loading.set(true);

        spawn_local(async move {
            let from = map.time_from.get_untracked();
            let to = map.time_to.get_untracked();

            match api::fetch_anomalies_of_range(&from, &to).await {
                Ok(list) => {
                    set_anomalies.set(list);
                    set_loaded.set(true);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch anomalies: {}", e).into());
                    notices.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page">
            // Page header
            <div class="page-header">
                <div>
                    <h1>"Anomalies"</h1>
                    <p class="muted">"Readings flagged as anomalous in the selected window"</p>
                </div>

                <button
                    class="btn btn-primary"
                    on:click=load_anomalies
                    disabled=move || loading.get()
                >
                    <Icon name="bell-solid" size=16 />
                    {move || if loading.get() { "Loading..." } else { "Check range" }}
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let list = anomalies.get();
                if list.is_empty() {
                    if loaded.get() {
                        view! { <p class="muted">"No anomalies in this range."</p> }.into_view()
                    } else {
                        view! {
                            <p class="muted">
                                "Pick a window on the map page, then check the range."
                            </p>
                        }
                        .into_view()
                    }
                } else {
                    view! {
                        <ul class="anomaly-list">
                            {list.into_iter().map(|reading| view! {
                                <AnomalyRow reading=reading />
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Single anomaly entry
#[component]
fn AnomalyRow(reading: api::PollutionReading) -> impl IntoView {
    let icon = if reading.is_anomaly { "bell-solid" } else { "bell-regular" };

    view! {
        <li class="anomaly-row">
            <Icon name=icon size=18 />
            <div class="anomaly-meta">
                <span class="anomaly-title">
                    {format!("{} {:.2}", reading.pollutant, reading.value)}
                </span>
                <span class="muted">
                    {format!(
                        "{} ({:.4}, {:.4})",
                        format_time(&reading.time),
                        reading.latitude,
                        reading.longitude
                    )}
                </span>
            </div>
            {(!reading.region.is_empty()).then(|| view! {
                <span class="anomaly-region">{reading.region.clone()}</span>
            })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_renders_rfc3339() {
        assert_eq!(format_time("2024-03-05T14:30:00Z"), "2024-03-05 14:30");
    }

    #[test]
    fn format_time_passes_through_unparseable_input() {
        assert_eq!(format_time("yesterday"), "yesterday");
    }
}
