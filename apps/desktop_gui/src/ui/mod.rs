//! UI layer for the storefront shell: paints display models and collects user actions.

pub mod app;

pub use app::StorefrontApp;
