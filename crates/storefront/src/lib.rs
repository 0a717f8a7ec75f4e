//! Storefront core: application state, interaction controller, and the pure
//! display models the UI shell paints.

pub mod categories;
pub mod controller;
pub mod fetch;
pub mod pledge;
pub mod state;
pub mod view;

pub use categories::{pair_category_labels, LabelPairing, DEFAULT_CATEGORY_LABELS};
pub use controller::{Controller, SelectionOutcome};
pub use pledge::{PledgeForm, PledgeNotice};
pub use state::{AppState, PlantRequest, RequestToken};
