use std::collections::HashMap;

use shared::domain::{Plant, PlantId};
use tracing::debug;

/// Ordered cart. Every "add" appends one entry; entries sharing an id form a
/// group whose size is the quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<Plant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartGroup {
    pub item: Plant,
    pub qty: usize,
}

impl CartGroup {
    pub fn line_total(&self) -> f64 {
        self.item.price * self.qty as f64
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSummary {
    /// Raw entry count, not the number of groups.
    pub total_count: usize,
    /// One group per distinct id, in order of first appearance.
    pub groups: Vec<CartGroup>,
    pub total_price: f64,
}

impl CartSummary {
    pub fn group(&self, id: &PlantId) -> Option<&CartGroup> {
        self.groups.iter().find(|group| &group.item.id == id)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, plant: Plant) {
        debug!(plant_id = %plant.id, "cart add");
        self.entries.push(plant);
    }

    /// Drops the whole group for `id`. Returns how many entries were removed.
    pub fn remove_all(&mut self, id: &PlantId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        let removed = before - self.entries.len();
        debug!(plant_id = %id, removed, "cart remove");
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Plant] {
        &self.entries
    }

    pub fn summarize(&self) -> CartSummary {
        let mut groups: Vec<CartGroup> = Vec::new();
        let mut positions: HashMap<&PlantId, usize> = HashMap::new();

        for entry in &self.entries {
            match positions.get(&entry.id) {
                Some(&index) => groups[index].qty += 1,
                None => {
                    positions.insert(&entry.id, groups.len());
                    groups.push(CartGroup {
                        item: entry.clone(),
                        qty: 1,
                    });
                }
            }
        }

        let total_price = groups.iter().map(CartGroup::line_total).sum();

        CartSummary {
            total_count: self.entries.len(),
            groups,
            total_price,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
