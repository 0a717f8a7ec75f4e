//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::CatalogClient;
use crossbeam_channel::{Receiver, Sender};
use storefront::fetch;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Runs catalog requests on a dedicated tokio runtime. Each command gets its
/// own task so a slow fetch never blocks a newer selection.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    client: Arc<dyn CatalogClient>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = run_command(client.as_ref(), cmd).await;
                    deliver(&ui_tx, event);
                });
            }
            tracing::info!("ui command channel closed; backend worker exiting");
        });
    });
}

/// Hands a backend result to the UI thread; a full or closed channel drops it
/// with a warning.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(err) => {
            let disconnected = err.is_disconnected();
            tracing::warn!(
                event = err.into_inner().name(),
                disconnected,
                "ui event channel unavailable; dropping backend result"
            );
            false
        }
    }
}

async fn run_command(client: &dyn CatalogClient, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadCategories => match fetch::categories(client).await {
            Ok(categories) => UiEvent::CategoriesLoaded(categories),
            Err(err) => UiEvent::Error(UiError::from_catalog(UiErrorContext::Categories, &err)),
        },
        BackendCommand::FetchPlants { request } => UiEvent::PlantsLoaded {
            token: request.token,
            result: fetch::plants_for(client, &request.category_id).await,
        },
    }
}
