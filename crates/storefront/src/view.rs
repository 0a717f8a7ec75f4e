//! Pure display models. Each function maps data to what a panel shows and
//! returns the same output for the same input; painting happens elsewhere.

use cart::CartSummary;
use shared::domain::{Category, CategoryId, Plant, PlantId};

pub const CURRENCY_SYMBOL: &str = "৳";
pub const NO_RESULTS_MESSAGE: &str = "No plants found in this category.";
const CARD_EXCERPT_CHARS: usize = 90;

pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    format!("{CURRENCY_SYMBOL}{rounded:.0}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub id: CategoryId,
    pub label: String,
    pub active: bool,
}

pub fn category_strip(categories: &[Category], active: &CategoryId) -> Vec<CategoryButton> {
    categories
        .iter()
        .map(|category| CategoryButton {
            id: category.id.clone(),
            label: category.label.clone(),
            active: &category.id == active,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantCard {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub excerpt: String,
    pub category: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridElement {
    Card(PlantCard),
    Placeholder { message: String },
}

pub fn plant_grid(plants: &[Plant]) -> Vec<GridElement> {
    if plants.is_empty() {
        return vec![GridElement::Placeholder {
            message: NO_RESULTS_MESSAGE.to_string(),
        }];
    }

    plants
        .iter()
        .map(|plant| {
            GridElement::Card(PlantCard {
                id: plant.id.clone(),
                name: plant.name.clone(),
                image: plant.image.clone(),
                excerpt: excerpt(&plant.description, CARD_EXCERPT_CHARS),
                category: plant.category.clone(),
                price_label: format_currency(plant.price),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price_label: String,
}

/// `None` when `id` is not among `plants`.
pub fn detail_panel(plants: &[Plant], id: &PlantId) -> Option<DetailPanel> {
    let plant = plants.iter().find(|plant| &plant.id == id)?;
    Some(DetailPanel {
        id: plant.id.clone(),
        name: plant.name.clone(),
        image: plant.image.clone(),
        description: plant.description.clone(),
        category: plant.category.clone(),
        price_label: format_currency(plant.price),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: PlantId,
    pub name: String,
    pub unit_price_label: String,
    pub qty: usize,
    pub line_total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub lines: Vec<CartLine>,
    pub total_label: String,
    /// Raw entry count shown on the cart badge.
    pub badge: String,
}

impl CartPanel {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn cart_panel(summary: &CartSummary) -> CartPanel {
    CartPanel {
        lines: summary
            .groups
            .iter()
            .map(|group| CartLine {
                id: group.item.id.clone(),
                name: group.item.name.clone(),
                unit_price_label: format_currency(group.item.price),
                qty: group.qty,
                line_total_label: format_currency(group.line_total()),
            })
            .collect(),
        total_label: format_currency(summary.total_price),
        badge: summary.total_count.to_string(),
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
