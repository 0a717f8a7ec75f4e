//! Fetch-then-normalize helpers shared by the controller and the desktop
//! backend worker.

use client_core::CatalogClient;
use shared::{
    domain::{CategoryId, Plant, RawCategory},
    error::CatalogError,
    normalize::{normalize_category, normalize_plants},
};
use tracing::debug;

/// The sentinel reads the unfiltered catalog; any other id reads the
/// category endpoint.
pub async fn plants_for(
    client: &dyn CatalogClient,
    category_id: &CategoryId,
) -> Result<Vec<Plant>, CatalogError> {
    let raw = if category_id.is_all() {
        client.fetch_all_plants().await?
    } else {
        client.fetch_plants_by_category(category_id).await?
    };
    debug!(category = %category_id, count = raw.len(), "fetched plants");
    Ok(normalize_plants(&raw))
}

pub async fn categories(client: &dyn CatalogClient) -> Result<Vec<RawCategory>, CatalogError> {
    let raw = client.fetch_categories().await?;
    Ok(raw.iter().map(normalize_category).collect())
}
