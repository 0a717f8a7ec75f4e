//! Backend commands queued from UI to backend worker.

use storefront::PlantRequest;

pub enum BackendCommand {
    LoadCategories,
    FetchPlants { request: PlantRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCategories => "load_categories",
            BackendCommand::FetchPlants { .. } => "fetch_plants",
        }
    }
}
