//! Interaction controller: user actions in, state transitions and fetches out.
//!
//! Plant-list selection is split in two halves so a UI that runs fetches on
//! another thread can drive it: `begin_select_category` tags the request,
//! `finish_select_category` applies a result only if no newer selection was
//! issued in the meantime.

use std::sync::Arc;

use cart::CartSummary;
use client_core::CatalogClient;
use shared::{
    domain::{CategoryId, Plant, PlantId, RawCategory},
    error::CatalogError,
};
use tracing::{debug, info, warn};

use crate::{
    categories::{default_labels, pair_category_labels, LabelPairing},
    fetch,
    pledge::{PledgeForm, PledgeNotice},
    state::{AppState, PlantRequest, RequestToken},
    view::{self, CartPanel, CategoryButton, DetailPanel, GridElement},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Applied,
    /// A newer selection superseded this one; the result was dropped.
    Stale,
}

pub struct Controller {
    client: Arc<dyn CatalogClient>,
    state: AppState,
    labels: Vec<String>,
    pairing: LabelPairing,
}

impl Controller {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        let state = AppState::new(client.loading());
        Self {
            client,
            state,
            labels: default_labels(),
            pairing: LabelPairing::default(),
        }
    }

    pub fn with_category_labels(mut self, labels: Vec<String>, pairing: LabelPairing) -> Self {
        self.labels = labels;
        self.pairing = pairing;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn client(&self) -> Arc<dyn CatalogClient> {
        self.client.clone()
    }

    /// Loads categories, then selects the sentinel category.
    pub async fn start(&mut self) -> Result<SelectionOutcome, CatalogError> {
        self.load_categories().await?;
        self.select_category(CategoryId::all()).await
    }

    pub async fn load_categories(&mut self) -> Result<(), CatalogError> {
        let client = self.client.clone();
        match fetch::categories(client.as_ref()).await {
            Ok(raw) => {
                self.apply_categories(&raw);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load categories");
                self.state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Replaces the category list wholesale.
    pub fn apply_categories(&mut self, raw: &[RawCategory]) {
        self.state.categories = pair_category_labels(&self.labels, raw, self.pairing);
        info!(count = self.state.categories.len(), "categories loaded");
    }

    pub async fn select_category(
        &mut self,
        category_id: CategoryId,
    ) -> Result<SelectionOutcome, CatalogError> {
        let client = self.client.clone();
        let request = self.begin_select_category(category_id);
        let result = fetch::plants_for(client.as_ref(), &request.category_id).await;
        self.finish_select_category(request.token, result)
    }

    pub fn begin_select_category(&mut self, category_id: CategoryId) -> PlantRequest {
        let request = self.state.issue_plant_request(category_id);
        debug!(
            category = %request.category_id,
            token = request.token.0,
            "category selected"
        );
        request
    }

    /// Rolls back a selection whose fetch could not be dispatched, restoring
    /// the previous active category so the grid and the strip stay in step.
    /// A response still in flight for that category becomes current again.
    pub fn abandon_select_category(
        &mut self,
        request: &PlantRequest,
        previous_category_id: CategoryId,
    ) -> bool {
        let restored = self
            .state
            .withdraw_plant_request(request, previous_category_id);
        if restored {
            warn!(
                category = %request.category_id,
                token = request.token.0,
                "category selection abandoned"
            );
        }
        restored
    }

    pub fn finish_select_category(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Plant>, CatalogError>,
    ) -> Result<SelectionOutcome, CatalogError> {
        if !self.state.is_current(token) {
            warn!(token = token.0, "discarding stale plant list");
            return Ok(SelectionOutcome::Stale);
        }

        match result {
            Ok(plants) => {
                debug!(count = plants.len(), "plant list replaced");
                self.state.plants = plants;
                self.state.detail = None;
                self.state.last_error = None;
                Ok(SelectionOutcome::Applied)
            }
            Err(err) => {
                warn!(error = %err, "plant list fetch failed");
                self.state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Adds the displayed plant with `id`; unknown ids are ignored.
    pub fn add_to_cart(&mut self, id: &PlantId) -> bool {
        match self.state.find_plant(id).cloned() {
            Some(plant) => {
                self.state.cart.add(plant);
                true
            }
            None => false,
        }
    }

    pub fn remove_from_cart(&mut self, id: &PlantId) -> usize {
        self.state.cart.remove_all(id)
    }

    /// Opens the detail panel for a displayed plant; unknown ids are ignored.
    pub fn open_detail(&mut self, id: &PlantId) -> bool {
        if self.state.find_plant(id).is_none() {
            return false;
        }
        self.state.detail = Some(id.clone());
        true
    }

    pub fn close_detail(&mut self) {
        self.state.detail = None;
    }

    pub fn pledge_form_mut(&mut self) -> &mut PledgeForm {
        &mut self.state.pledge_form
    }

    pub fn submit_pledge(&mut self) -> PledgeNotice {
        let notice = self.state.pledge_form.submit();
        info!(count = notice.count, "pledge submitted");
        self.state.pledge_notice = Some(notice.clone());
        notice
    }

    pub fn dismiss_pledge_notice(&mut self) {
        self.state.pledge_notice = None;
    }

    pub fn dismiss_error(&mut self) {
        self.state.last_error = None;
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.state.cart.summarize()
    }

    pub fn category_strip(&self) -> Vec<CategoryButton> {
        view::category_strip(&self.state.categories, &self.state.active_category_id)
    }

    pub fn plant_grid(&self) -> Vec<GridElement> {
        view::plant_grid(&self.state.plants)
    }

    pub fn detail_panel(&self) -> Option<DetailPanel> {
        let id = self.state.detail.as_ref()?;
        view::detail_panel(&self.state.plants, id)
    }

    pub fn cart_panel(&self) -> CartPanel {
        view::cart_panel(&self.cart_summary())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
