use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{CatalogClient, CatalogEndpoints, HttpCatalogClient};
use crossbeam_channel::bounded;
use eframe::egui;
use storefront::{categories::default_labels, Controller, LabelPairing};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::load_settings;
use crate::controller::events::UiEvent;
use crate::ui::StorefrontApp;

#[derive(Parser, Debug)]
#[command(about = "Green Earth plant storefront")]
struct Args {
    /// Base URL of the catalog API; overrides storefront.toml and environment.
    #[arg(long)]
    api_base_url: Option<String>,
    /// How category labels are attached to catalog ids: positional or by_name.
    #[arg(long)]
    category_pairing: Option<LabelPairing>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(pairing) = args.category_pairing {
        settings.category_pairing = pairing;
    }

    let endpoints = CatalogEndpoints::new(&settings.api_base_url)
        .with_context(|| format!("unusable catalog base url '{}'", settings.api_base_url))?;
    let http_client = HttpCatalogClient::new(endpoints);
    tracing::info!(
        categories = %http_client.endpoints().categories(),
        pairing = ?settings.category_pairing,
        "starting storefront"
    );
    let client: Arc<dyn CatalogClient> = Arc::new(http_client);

    let labels = settings.category_labels.unwrap_or_else(default_labels);
    let controller =
        Controller::new(client.clone()).with_category_labels(labels, settings.category_pairing);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, client);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Green Earth")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Green Earth",
        options,
        Box::new(move |_cc| Ok(Box::new(StorefrontApp::new(controller, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("storefront window failed: {err}"))
}
