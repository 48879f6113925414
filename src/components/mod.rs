//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod icon;
pub mod loading;
pub mod map_view;
pub mod nav;
pub mod toast;

pub use icon::Icon;
pub use loading::Loading;
pub use map_view::MapView;
pub use nav::Nav;
pub use toast::Toast;
