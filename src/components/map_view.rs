//! Map View Component
//!
//! Plots the store's markers inside the active bounding box as a plain SVG
//! layer. Tile rendering belongs to the embedding map library, not to this
//! crate.

use leptos::*;

use crate::state::map::{bounds_of, MapStore, Marker};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 480.0;

/// Bounding box as `(lat_from, lat_to, long_from, long_to)`: the explicit
/// bound when set, otherwise the marker extent
fn active_bounds(bound: &[f64], markers: &[Marker]) -> Option<(f64, f64, f64, f64)> {
    if let [lat_from, lat_to, long_from, long_to] = bound {
        return Some((*lat_from, *lat_to, *long_from, *long_to));
    }

    bounds_of(markers).and_then(|extent| match extent.as_slice() {
        [lat_from, lat_to, long_from, long_to] => {
            Some((*lat_from, *lat_to, *long_from, *long_to))
        }
        _ => None,
    })
}

/// Project a coordinate into the SVG viewport; north is up
fn project(lat: f64, lng: f64, bounds: (f64, f64, f64, f64)) -> (f64, f64) {
    let (lat_from, lat_to, long_from, long_to) = bounds;
    let lat_span = (lat_to - lat_from).abs().max(f64::EPSILON);
    let lng_span = (long_to - long_from).abs().max(f64::EPSILON);

    let x = (lng - long_from.min(long_to)) / lng_span * WIDTH;
    let y = HEIGHT - (lat - lat_from.min(lat_to)) / lat_span * HEIGHT;
    (x, y)
}

/// Marker layer over the current bounds
#[component]
pub fn MapView() -> impl IntoView {
    let map = use_context::<MapStore>().expect("MapStore not found");

    view! {
        <div class="map-view">
            {move || {
                let markers = map.markers.get();
                let bound = map.graph_bound.get();

                match active_bounds(&bound, &markers) {
                    Some(bounds) => {
                        let max_value = markers
                            .iter()
                            .map(|m| m.value)
                            .fold(f64::MIN, f64::max)
                            .max(1.0);

                        view! {
                            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="map-canvas">
                                {markers.iter().map(|marker| {
                                    let (x, y) = project(marker.lat, marker.lng, bounds);
                                    let intensity = (marker.value / max_value).clamp(0.0, 1.0);
                                    let radius = 4.0 + intensity * 6.0;
                                    let opacity = 0.35 + intensity * 0.65;

                                    view! {
                                        <circle
                                            class="map-marker"
                                            cx=x
                                            cy=y
                                            r=radius
                                            opacity=opacity
                                        />
                                    }
                                }).collect_view()}
                            </svg>
                        }
                        .into_view()
                    }
                    None => view! {
                        <div class="map-empty">
                            <p class="muted">"No readings loaded yet."</p>
                        </div>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_bound_wins_over_marker_extent() {
        let markers = vec![Marker { lat: 0.0, lng: 0.0, value: 1.0 }];
        let bound = vec![10.0, 20.0, 30.0, 40.0];

        assert_eq!(active_bounds(&bound, &markers), Some((10.0, 20.0, 30.0, 40.0)));
    }

    #[test]
    fn empty_bound_falls_back_to_marker_extent() {
        let markers = vec![
            Marker { lat: 1.0, lng: 5.0, value: 1.0 },
            Marker { lat: 3.0, lng: 7.0, value: 1.0 },
        ];

        assert_eq!(active_bounds(&[], &markers), Some((1.0, 3.0, 5.0, 7.0)));
        assert_eq!(active_bounds(&[], &[]), None);
    }

    #[test]
    fn projection_maps_corners_to_viewport() {
        let bounds = (10.0, 20.0, 30.0, 40.0);

        // South-west corner lands bottom-left
        assert_eq!(project(10.0, 30.0, bounds), (0.0, HEIGHT));
        // North-east corner lands top-right
        assert_eq!(project(20.0, 40.0, bounds), (WIDTH, 0.0));
    }
}
