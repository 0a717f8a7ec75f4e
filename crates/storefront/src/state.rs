use cart::Cart;
use client_core::LoadingIndicator;
use shared::{
    domain::{Category, CategoryId, Plant, PlantId},
    error::CatalogError,
};

use crate::pledge::{PledgeForm, PledgeNotice};

/// Monotonic tag attached to every plant-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// A plant-list fetch issued for one category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRequest {
    pub token: RequestToken,
    pub category_id: CategoryId,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub categories: Vec<Category>,
    pub active_category_id: CategoryId,
    pub plants: Vec<Plant>,
    pub cart: Cart,
    pub detail: Option<PlantId>,
    pub pledge_form: PledgeForm,
    pub pledge_notice: Option<PledgeNotice>,
    pub last_error: Option<CatalogError>,
    loading: LoadingIndicator,
    latest_request: u64,
}

impl AppState {
    pub fn new(loading: LoadingIndicator) -> Self {
        Self {
            active_category_id: CategoryId::all(),
            loading,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_indicator(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub(crate) fn issue_plant_request(&mut self, category_id: CategoryId) -> PlantRequest {
        self.latest_request += 1;
        self.active_category_id = category_id.clone();
        PlantRequest {
            token: RequestToken(self.latest_request),
            category_id,
        }
    }

    /// Undoes `issue_plant_request` when its fetch was never dispatched.
    /// Returns false if a newer request has been issued since.
    pub(crate) fn withdraw_plant_request(
        &mut self,
        request: &PlantRequest,
        previous_category_id: CategoryId,
    ) -> bool {
        if !self.is_current(request.token) {
            return false;
        }
        self.latest_request -= 1;
        self.active_category_id = previous_category_id;
        true
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest_request
    }

    pub fn find_plant(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| &plant.id == id)
    }
}
