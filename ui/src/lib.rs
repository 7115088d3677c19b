//! Shared UI crate for LifeRhythm. Renderers, session state and every view
//! live here; the platform crates only launch them.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod render;
pub mod views;

pub mod components {
    // Localized application header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
