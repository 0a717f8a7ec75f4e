use std::str::FromStr;

use serde::Deserialize;
use shared::domain::{Category, CategoryId, RawCategory};
use thiserror::Error;

pub const ALL_CATEGORY_LABEL: &str = "All Trees";

/// Display labels in the order the catalog is expected to list its categories.
pub const DEFAULT_CATEGORY_LABELS: &[&str] = &[
    "Fruit Tree",
    "Flowering Tree",
    "Shade Tree",
    "Medicinal Tree",
    "Timber Tree",
    "Evergreen Tree",
    "Ornamental Plant",
    "Bamboo",
    "Climber",
    "Aquatic Plant",
];

/// How fixed display labels are attached to the category ids the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPairing {
    /// The n-th label goes to the n-th returned category.
    #[default]
    Positional,
    /// A label is matched against the returned category name
    /// (case-insensitive); unmatched entries keep their own name.
    ByName,
}

#[derive(Debug, Error)]
#[error("unknown label pairing '{0}', expected 'positional' or 'by_name'")]
pub struct ParseLabelPairingError(String);

impl FromStr for LabelPairing {
    type Err = ParseLabelPairingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "positional" => Ok(Self::Positional),
            "by_name" | "name" => Ok(Self::ByName),
            other => Err(ParseLabelPairingError(other.to_string())),
        }
    }
}

/// Builds the selectable category list: the "all" sentinel first, then one
/// entry per returned category in API order.
pub fn pair_category_labels(
    labels: &[String],
    raw: &[RawCategory],
    pairing: LabelPairing,
) -> Vec<Category> {
    let mut categories = Vec::with_capacity(raw.len() + 1);
    categories.push(Category {
        id: CategoryId::all(),
        label: ALL_CATEGORY_LABEL.to_string(),
    });

    for (position, category) in raw.iter().filter(|c| !c.id.is_all()).enumerate() {
        let positional = labels.get(position).cloned();
        let label = match pairing {
            LabelPairing::Positional => positional.or_else(|| category.name.clone()),
            LabelPairing::ByName => match_by_name(labels, category)
                .or_else(|| category.name.clone())
                .or(positional),
        };

        categories.push(Category {
            id: category.id.clone(),
            label: label.unwrap_or_else(|| format!("Category {}", category.id)),
        });
    }

    categories
}

fn match_by_name(labels: &[String], category: &RawCategory) -> Option<String> {
    let name = category.name.as_deref()?.trim();
    labels
        .iter()
        .find(|label| label.trim().eq_ignore_ascii_case(name))
        .cloned()
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_CATEGORY_LABELS
        .iter()
        .map(|label| label.to_string())
        .collect()
}
