//! Icon Registry
//!
//! Named inline-SVG icons registered once at startup and rendered through
//! [`crate::components::Icon`]. The registry is thread-local; the UI runs on
//! a single thread.

use std::cell::RefCell;
use std::collections::HashMap;

/// Geometry and fill style for one icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconDef {
    pub view_box: &'static str,
    pub path: &'static str,
    /// Filled silhouette when true, stroked outline otherwise
    pub solid: bool,
}

thread_local! {
    static REGISTRY: RefCell<HashMap<&'static str, IconDef>> = RefCell::new(HashMap::new());
}

/// Register an icon under a name; a later registration replaces an earlier one
pub fn register(name: &'static str, def: IconDef) {
    REGISTRY.with(|registry| {
        registry.borrow_mut().insert(name, def);
    });
}

/// Look up an icon by name
pub fn lookup(name: &str) -> Option<IconDef> {
    REGISTRY.with(|registry| registry.borrow().get(name).copied())
}

const VIEW_BOX: &str = "0 0 24 24";

/// Install the icons the UI uses. Must run before the first render.
pub fn register_builtin_icons() {
    register("bell-solid", IconDef {
        view_box: VIEW_BOX,
        solid: true,
        path: "M12 2a7 7 0 0 0-7 7v4.3L3 16v2h18v-2l-2-2.7V9a7 7 0 0 0-7-7zm-2 17a2 2 0 0 0 4 0z",
    });
    register("bell-regular", IconDef {
        view_box: VIEW_BOX,
        solid: false,
        path: "M12 3a6 6 0 0 0-6 6v4.6L4.4 16.2v.8h15.2v-.8L18 13.6V9a6 6 0 0 0-6-6zm-2 16a2 2 0 0 0 4 0",
    });
    register("moon", IconDef {
        view_box: VIEW_BOX,
        solid: true,
        path: "M20.6 14.6A8.7 8.7 0 0 1 9.4 3.4 9 9 0 1 0 20.6 14.6z",
    });
    register("sun", IconDef {
        view_box: VIEW_BOX,
        solid: false,
        path: "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zm0-6.5v3M12 19.5v3M1.5 12h3M19.5 12h3M4.6 4.6l2.1 2.1M17.3 17.3l2.1 2.1M4.6 19.4l2.1-2.1M17.3 6.7l2.1-2.1",
    });
    register("expand", IconDef {
        view_box: VIEW_BOX,
        solid: false,
        path: "M3 9V3h6M15 3h6v6M21 15v6h-6M9 21H3v-6",
    });
    register("plus-circle", IconDef {
        view_box: VIEW_BOX,
        solid: false,
        path: "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zm0 5v8M8 12h8",
    });
    register("close", IconDef {
        view_box: VIEW_BOX,
        solid: false,
        path: "M5 5l14 14M19 5L5 19",
    });
    register("map-pin", IconDef {
        view_box: VIEW_BOX,
        solid: true,
        path: "M12 2a7 7 0 0 0-7 7c0 5.2 7 13 7 13s7-7.8 7-13a7 7 0 0 0-7-7zm0 9.5A2.5 2.5 0 1 1 12 6.5a2.5 2.5 0 0 1 0 5z",
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_icons_are_all_registered() {
        register_builtin_icons();

        for name in [
            "bell-solid",
            "bell-regular",
            "moon",
            "sun",
            "expand",
            "plus-circle",
            "close",
            "map-pin",
        ] {
            assert!(lookup(name).is_some(), "missing icon: {}", name);
        }
    }

    #[test]
    fn unknown_name_yields_none() {
        register_builtin_icons();
        assert!(lookup("ghost").is_none());
    }

    #[test]
    fn later_registration_replaces_earlier() {
        register_builtin_icons();

        let replacement = IconDef {
            view_box: "0 0 16 16",
            path: "M0 0h16v16H0z",
            solid: true,
        };
        register("close", replacement);
        assert_eq!(lookup("close"), Some(replacement));
    }
}
