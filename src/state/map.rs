//! Map State Store
//!
//! Reactive working set for the map: the plotted markers plus the ambient
//! query parameters pages read when building API requests. Mutations are
//! synchronous; each field is an independent write.

use leptos::*;

/// A single map data point: coordinate plus measured value
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub value: f64,
}

/// Map state provided to all components
#[derive(Clone, Copy)]
pub struct MapStore {
    /// Markers currently plotted, in insertion order
    pub markers: RwSignal<Vec<Marker>>,
    /// Active bounding box as `[lat_from, lat_to, long_from, long_to]`, empty until set
    pub graph_bound: RwSignal<Vec<f64>>,
    /// Start of the query window (ISO date)
    pub time_from: RwSignal<String>,
    /// End of the query window (ISO date)
    pub time_to: RwSignal<String>,
    /// Pollutant the queries are limited to, if any
    pub selected_pollutant: RwSignal<Option<String>>,
}

impl MapStore {
    pub fn new() -> Self {
        let today = chrono::Utc::now().date_naive();
        let week_ago = today - chrono::Days::new(7);

        Self {
            markers: create_rw_signal(Vec::new()),
            graph_bound: create_rw_signal(Vec::new()),
            time_from: create_rw_signal(week_ago.format("%Y-%m-%d").to_string()),
            time_to: create_rw_signal(today.format("%Y-%m-%d").to_string()),
            selected_pollutant: create_rw_signal(None),
        }
    }

    /// Append a marker to the plotted sequence
    pub fn add_marker(&self, marker: Marker) {
        self.markers.update(|markers| markers.push(marker));
    }

    /// Drop every plotted marker
    pub fn clear_markers(&self) {
        self.markers.set(Vec::new());
    }
}

/// Extent of a marker sequence as `[lat_from, lat_to, long_from, long_to]`
pub fn bounds_of(markers: &[Marker]) -> Option<Vec<f64>> {
    if markers.is_empty() {
        return None;
    }

    let mut lat_min = f64::INFINITY;
    let mut lat_max = f64::NEG_INFINITY;
    let mut lng_min = f64::INFINITY;
    let mut lng_max = f64::NEG_INFINITY;
    for marker in markers {
        lat_min = lat_min.min(marker.lat);
        lat_max = lat_max.max(marker.lat);
        lng_min = lng_min.min(marker.lng);
        lng_max = lng_max.max(marker.lng);
    }

    Some(vec![lat_min, lat_max, lng_min, lng_max])
}

/// Provide the map store to the component tree
pub fn provide_map_store() {
    provide_context(MapStore::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_append_in_order_and_clear() {
        let runtime = create_runtime();
        let store = MapStore::new();

        store.add_marker(Marker { lat: 1.0, lng: 2.0, value: 3.0 });
        store.add_marker(Marker { lat: 4.0, lng: 5.0, value: 6.0 });
        assert_eq!(
            store.markers.get_untracked(),
            vec![
                Marker { lat: 1.0, lng: 2.0, value: 3.0 },
                Marker { lat: 4.0, lng: 5.0, value: 6.0 },
            ]
        );

        store.clear_markers();
        assert!(store.markers.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn query_fields_are_independent_writes() {
        let runtime = create_runtime();
        let store = MapStore::new();

        store.graph_bound.set(vec![10.0, 20.0, 30.0, 40.0]);
        store.selected_pollutant.set(Some("PM2.5".to_string()));
        store.time_from.set("2024-01-01".to_string());

        assert_eq!(store.graph_bound.get_untracked(), vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(store.selected_pollutant.get_untracked().as_deref(), Some("PM2.5"));
        assert_eq!(store.time_from.get_untracked(), "2024-01-01");

        runtime.dispose();
    }

    #[test]
    fn default_window_spans_the_last_week() {
        let runtime = create_runtime();
        let store = MapStore::new();

        let from = store.time_from.get_untracked();
        let to = store.time_to.get_untracked();
        assert!(from < to);

        runtime.dispose();
    }

    #[test]
    fn bounds_of_spans_marker_extent() {
        let markers = vec![
            Marker { lat: 15.0, lng: 35.0, value: 1.0 },
            Marker { lat: 10.0, lng: 40.0, value: 2.0 },
            Marker { lat: 20.0, lng: 30.0, value: 3.0 },
        ];

        assert_eq!(bounds_of(&markers), Some(vec![10.0, 20.0, 30.0, 40.0]));
        assert_eq!(bounds_of(&[]), None);
    }
}
