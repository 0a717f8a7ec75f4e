//! Canonicalization of raw catalog records.
//!
//! Each attribute is resolved from a fixed list of candidate keys; the first
//! present key holding a usable value wins, so an object or array under an
//! earlier key never hides a readable alias. Normalization never fails: absent
//! or unusable fields degrade to the defaults below.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::domain::{CategoryId, Plant, PlantId, RawCategory};

pub const UNKNOWN_PLANT_NAME: &str = "Unknown Tree";
pub const DEFAULT_PLANT_CATEGORY: &str = "General";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x300?text=Green+Earth";
pub const DEFAULT_DESCRIPTION: &str = "No description available for this plant yet.";

const PLANT_ID_KEYS: &[&str] = &["id", "plantId", "_id"];
const PLANT_NAME_KEYS: &[&str] = &["name", "plantName"];
const PLANT_IMAGE_KEYS: &[&str] = &["image", "img"];
const PLANT_PRICE_KEYS: &[&str] = &["price", "cost"];
const PLANT_DESCRIPTION_KEYS: &[&str] = &["description", "details"];
const PLANT_CATEGORY_KEYS: &[&str] = &["category", "type"];

const CATEGORY_ID_KEYS: &[&str] = &["id", "category_id", "_id"];
const CATEGORY_NAME_KEYS: &[&str] = &["category_name", "name", "category"];

pub fn normalize_plant(raw: &Value) -> Plant {
    resolve_plant(raw).0
}

/// Normalizes a batch. Ids derived from a name that an earlier record already
/// holds get the record's index appended, so every plant in a batch stays
/// addressable on its own.
pub fn normalize_plants(raw: &[Value]) -> Vec<Plant> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.iter()
        .enumerate()
        .map(|(index, record)| {
            let (mut plant, derived_id) = resolve_plant(record);
            if derived_id && seen.contains(&plant.id) {
                let base = plant.id.as_str().to_string();
                let mut suffix = index;
                while seen.contains(&plant.id) {
                    plant.id = PlantId(format!("{base}-{suffix}"));
                    suffix += 1;
                }
            }
            seen.insert(plant.id.clone());
            plant
        })
        .collect()
}

/// Returns the plant and whether its id was derived from the name.
fn resolve_plant(raw: &Value) -> (Plant, bool) {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let name = first_text(fields, PLANT_NAME_KEYS).unwrap_or_else(|| UNKNOWN_PLANT_NAME.to_string());
    let source_id = first_text(fields, PLANT_ID_KEYS);
    let derived_id = source_id.is_none();
    let id = source_id.unwrap_or_else(|| slugify(&name));

    let plant = Plant {
        id: PlantId(id),
        image: first_text(fields, PLANT_IMAGE_KEYS)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        price: first_scalar(fields, PLANT_PRICE_KEYS)
            .map(coerce_price)
            .unwrap_or(0.0),
        description: first_text(fields, PLANT_DESCRIPTION_KEYS)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        category: first_text(fields, PLANT_CATEGORY_KEYS)
            .unwrap_or_else(|| DEFAULT_PLANT_CATEGORY.to_string()),
        name,
    };
    (plant, derived_id)
}

pub fn normalize_category(raw: &Value) -> RawCategory {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let name = first_text(fields, CATEGORY_NAME_KEYS);
    let id = first_text(fields, CATEGORY_ID_KEYS)
        .unwrap_or_else(|| slugify(name.as_deref().unwrap_or_default()));

    RawCategory {
        id: CategoryId(id),
        name,
    }
}

/// Lowercase ASCII slug; runs of other characters collapse into one `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "plant".to_string()
    } else {
        slug
    }
}

fn present_values<'a>(
    fields: &'a Map<String, Value>,
    keys: &'a [&'a str],
) -> impl Iterator<Item = &'a Value> + 'a {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter(|value| is_present(value))
}

/// First candidate that reads as text; objects and arrays are skipped.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    present_values(fields, keys).find_map(text_of)
}

fn first_scalar<'a>(fields: &'a Map<String, Value>, keys: &'a [&'a str]) -> Option<&'a Value> {
    present_values(fields, keys).find(|value| matches!(value, Value::Number(_) | Value::String(_)))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn coerce_price(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(price) if price.is_finite() && price >= 0.0 => price,
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
