//! State Management
//!
//! Reactive stores shared across the component tree, constructed once at
//! application start and handed out through context.

pub mod map;
pub mod notices;
pub mod theme;

pub use map::{provide_map_store, MapStore, Marker};
pub use notices::{provide_notices, Notices};
pub use theme::{provide_theme_store, ThemeStore};
