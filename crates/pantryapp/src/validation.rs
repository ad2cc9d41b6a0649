//! Field validation for caller-supplied records.
//!
//! The command layer only accepts [`ItemRecord`]s. Front ends decode whatever
//! they receive into a [`RawItem`] and run it through [`validate_item`] first.
//!
//! # Rules
//! - `id`: required, zero or positive
//! - `name`: required, not blank, at most 255 characters
//! - `type`: required, `fruit` or `vegetable`
//! - `quantity`: required, positive
//! - `unit`: required, one of `g`, `kg`, `grams`, `kilograms`
//!
//! Every violated rule is reported, joined with `", "`.

use crate::error::{PantryError, Result};
use crate::model::{Category, ItemRecord, Unit};
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 255;

/// An undecided record, straight from JSON or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type", alias = "category")]
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Validates one record. Errors carry every violated rule.
///
/// # Examples
/// ```
/// use pantryapp::validation::{validate_item, RawItem};
///
/// let raw = RawItem {
///     id: Some(1),
///     name: Some("Apple".into()),
///     category: Some("fruit".into()),
///     quantity: Some(150.0),
///     unit: Some("grams".into()),
/// };
/// let record = validate_item(&raw).unwrap();
/// assert_eq!(record.unit.as_str(), "g");
///
/// assert!(validate_item(&RawItem::default()).is_err());
/// ```
pub fn validate_item(raw: &RawItem) -> Result<ItemRecord> {
    let mut errors: Vec<String> = Vec::new();

    let id = match raw.id {
        None => {
            errors.push("ID is required".to_string());
            None
        }
        Some(id) if id < 0 => {
            errors.push("ID must be zero or positive".to_string());
            None
        }
        Some(id) => Some(id),
    };

    let name = match raw.name.as_deref() {
        None => {
            errors.push("Name is required".to_string());
            None
        }
        Some(name) if name.trim().is_empty() => {
            errors.push("Name is required".to_string());
            None
        }
        Some(name) if name.chars().count() > MAX_NAME_LEN => {
            errors.push(format!(
                "Name cannot be longer than {} characters",
                MAX_NAME_LEN
            ));
            None
        }
        Some(name) => Some(name.to_string()),
    };

    let category = match raw.category.as_deref() {
        None | Some("") => {
            errors.push("Type is required".to_string());
            None
        }
        Some(value) => match value.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push("Type must be either \"fruit\" or \"vegetable\"".to_string());
                None
            }
        },
    };

    let quantity = match raw.quantity {
        None => {
            errors.push("Quantity is required".to_string());
            None
        }
        Some(q) if !q.is_finite() || q <= 0.0 => {
            errors.push("Quantity must be positive".to_string());
            None
        }
        Some(q) => Some(q),
    };

    let unit = match raw.unit.as_deref() {
        None | Some("") => {
            errors.push("Unit is required".to_string());
            None
        }
        Some(value) => match value.parse::<Unit>() {
            Ok(unit) => Some(unit),
            Err(_) => {
                errors.push("Unit must be g, kg, grams, or kilograms".to_string());
                None
            }
        },
    };

    match (id, name, category, quantity, unit) {
        (Some(id), Some(name), Some(category), Some(quantity), Some(unit)) if errors.is_empty() => {
            Ok(ItemRecord {
                id,
                name,
                category,
                quantity,
                unit,
            })
        }
        _ => Err(PantryError::InvalidArgument(errors.join(", "))),
    }
}

/// Validates a batch. The first failing record aborts with its position.
pub fn validate_batch(raws: &[RawItem]) -> Result<Vec<ItemRecord>> {
    raws.iter()
        .enumerate()
        .map(|(pos, raw)| {
            validate_item(raw).map_err(|e| match e {
                PantryError::InvalidArgument(msg) => {
                    PantryError::InvalidArgument(format!("record {}: {}", pos + 1, msg))
                }
                other => other,
            })
        })
        .collect()
}
