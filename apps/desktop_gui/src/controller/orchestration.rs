//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::CategoryId;
use storefront::Controller;

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. Returns false, with `status` set,
/// when the command was not queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend queue full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend worker disconnected");
            *status = "Catalog worker disconnected; restart the storefront".to_string();
            false
        }
    }
}

/// Selects `category_id` and queues its plant fetch. The selection is rolled
/// back when the fetch cannot be queued, so the active category never points
/// at plants nobody will load.
pub fn request_plants(
    controller: &mut Controller,
    cmd_tx: &Sender<BackendCommand>,
    category_id: CategoryId,
    status: &mut String,
) -> bool {
    let previous = controller.state().active_category_id.clone();
    let request = controller.begin_select_category(category_id);
    let queued = dispatch_backend_command(
        cmd_tx,
        BackendCommand::FetchPlants {
            request: request.clone(),
        },
        status,
    );
    if !queued {
        controller.abandon_select_category(&request, previous);
    }
    queued
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_core::{CatalogClient, LoadingIndicator};
    use crossbeam_channel::bounded;
    use shared::{
        domain::{Plant, PlantId},
        error::CatalogError,
        protocol::RawRecord,
    };
    use storefront::SelectionOutcome;

    use super::*;

    #[derive(Default)]
    struct IdleClient {
        loading: LoadingIndicator,
    }

    #[async_trait]
    impl CatalogClient for IdleClient {
        async fn fetch_categories(&self) -> Result<Vec<RawRecord>, CatalogError> {
            Ok(Vec::new())
        }

        async fn fetch_all_plants(&self) -> Result<Vec<RawRecord>, CatalogError> {
            Ok(Vec::new())
        }

        async fn fetch_plants_by_category(
            &self,
            _category_id: &CategoryId,
        ) -> Result<Vec<RawRecord>, CatalogError> {
            Ok(Vec::new())
        }

        async fn fetch_plant_detail(
            &self,
            _plant_id: &PlantId,
        ) -> Result<Option<RawRecord>, CatalogError> {
            Ok(None)
        }

        fn loading(&self) -> LoadingIndicator {
            self.loading.clone()
        }
    }

    fn neem() -> Plant {
        Plant {
            id: PlantId::from("neem"),
            name: "Neem".to_string(),
            image: String::new(),
            price: 300.0,
            description: String::new(),
            category: "Medicinal Tree".to_string(),
        }
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();

        assert!(dispatch_backend_command(&tx, BackendCommand::LoadCategories, &mut status));
        assert!(status.is_empty());

        assert!(!dispatch_backend_command(&tx, BackendCommand::LoadCategories, &mut status));
        assert!(status.contains("full"));

        drop(rx);
        assert!(!dispatch_backend_command(&tx, BackendCommand::LoadCategories, &mut status));
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn unqueued_selection_keeps_previous_category_active() {
        let mut controller = Controller::new(Arc::new(IdleClient::default()));
        let (tx, rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();

        assert!(request_plants(&mut controller, &tx, CategoryId::all(), &mut status));
        assert!(!request_plants(&mut controller, &tx, CategoryId::from("2"), &mut status));
        assert!(status.contains("full"));
        assert!(controller.state().active_category_id.is_all());

        let Ok(BackendCommand::FetchPlants { request }) = rx.try_recv() else {
            panic!("expected the first plant fetch to be queued");
        };
        assert!(request.category_id.is_all());
        let outcome = controller
            .finish_select_category(request.token, Ok(vec![neem()]))
            .expect("queued fetch applies");
        assert_eq!(outcome, SelectionOutcome::Applied);
        assert_eq!(controller.state().plants.len(), 1);
    }

    #[test]
    fn disconnected_worker_rolls_back_selection() {
        let mut controller = Controller::new(Arc::new(IdleClient::default()));
        let (tx, rx) = bounded::<BackendCommand>(4);
        drop(rx);
        let mut status = String::new();

        assert!(!request_plants(&mut controller, &tx, CategoryId::from("5"), &mut status));
        assert!(controller.state().active_category_id.is_all());
        assert!(status.contains("disconnected"));
    }
}
