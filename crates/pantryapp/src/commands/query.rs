use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Category, Item, Unit};
use crate::store::StorageBackend;
use serde::Serialize;

/// Optional listing filters. Bounds are inclusive and compare the quantity
/// after conversion to the requested display unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub name: Option<String>,
    pub min_quantity: Option<f64>,
    pub max_quantity: Option<f64>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(name) = &self.name {
            if !item.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(min) = self.min_quantity {
            if item.quantity < min {
                return false;
            }
        }
        if let Some(max) = self.max_quantity {
            if item.quantity > max {
                return false;
            }
        }
        true
    }
}

/// Query result keyed by plural category label. A category that was not
/// requested is absent, not empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruits: Option<Vec<Item>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetables: Option<Vec<Item>>,
}

impl ItemListing {
    pub fn get(&self, category: Category) -> Option<&[Item]> {
        match category {
            Category::Fruit => self.fruits.as_deref(),
            Category::Vegetable => self.vegetables.as_deref(),
        }
    }

    fn set(&mut self, category: Category, items: Vec<Item>) {
        match category {
            Category::Fruit => self.fruits = Some(items),
            Category::Vegetable => self.vegetables = Some(items),
        }
    }
}

/// Lists one category (or both when `category` is `None`), converted to
/// `unit`, keeping only items that pass `filter`.
pub fn run<B: StorageBackend>(
    inventory: &Inventory<B>,
    category: Option<Category>,
    filter: &ItemFilter,
    unit: Unit,
) -> Result<ItemListing> {
    let mut listing = ItemListing::default();

    for c in Category::ALL {
        if category.is_some_and(|wanted| wanted != c) {
            continue;
        }
        let items: Vec<Item> = inventory
            .collection(c)
            .list(unit)
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect();
        listing.set(c, items);
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ItemStore, MemBackend};
    use std::rc::Rc;

    fn inventory() -> Inventory<MemBackend> {
        let backend = MemBackend::with_items(vec![
            Item::new(1, "Apple", Category::Fruit, 1.5, Unit::Kilogram),
            Item::new(2, "Banana", Category::Fruit, 2000.0, Unit::Gram),
            Item::new(3, "Pineapple", Category::Fruit, 500.0, Unit::Gram),
            Item::new(4, "Carrot", Category::Vegetable, 800.0, Unit::Gram),
        ]);
        Inventory::load(Rc::new(ItemStore::open(backend).unwrap())).unwrap()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_category_selects_single_key() {
        let inv = inventory();
        let fruits = run(&inv, Some(Category::Fruit), &ItemFilter::default(), Unit::Gram).unwrap();
        assert_eq!(fruits.get(Category::Fruit).unwrap().len(), 3);
        assert!(fruits.vegetables.is_none());

        let veg = run(
            &inv,
            Some(Category::Vegetable),
            &ItemFilter::default(),
            Unit::Gram,
        )
        .unwrap();
        assert!(veg.fruits.is_none());
        assert_eq!(names(veg.get(Category::Vegetable).unwrap()), vec!["Carrot"]);
    }

    #[test]
    fn test_no_category_returns_both() {
        let listing = run(&inventory(), None, &ItemFilter::default(), Unit::Gram).unwrap();
        assert_eq!(listing.fruits.unwrap().len(), 3);
        assert_eq!(listing.vegetables.unwrap().len(), 1);
    }

    #[test]
    fn test_kilogram_listing_converts_every_item() {
        let listing = run(
            &inventory(),
            Some(Category::Fruit),
            &ItemFilter::default(),
            Unit::Kilogram,
        )
        .unwrap();
        let fruits = listing.fruits.unwrap();
        let quantities: Vec<f64> = fruits.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1.5, 2.0, 0.5]);
        assert!(fruits.iter().all(|i| i.unit == Unit::Kilogram));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = ItemFilter {
            name: Some("APPLE".to_string()),
            ..Default::default()
        };
        let listing = run(&inventory(), None, &filter, Unit::Gram).unwrap();
        assert_eq!(names(listing.fruits.as_deref().unwrap()), vec!["Apple", "Pineapple"]);
        assert!(listing.vegetables.unwrap().is_empty());
    }

    #[test]
    fn test_bounds_apply_after_conversion() {
        // Apple is stored as 1.5 kg; in grams it is 1500 and passes min 1000
        let filter = ItemFilter {
            min_quantity: Some(1000.0),
            ..Default::default()
        };
        let grams = run(&inventory(), Some(Category::Fruit), &filter, Unit::Gram).unwrap();
        assert_eq!(names(grams.fruits.as_deref().unwrap()), vec!["Apple", "Banana"]);

        // Same items in kilograms: max 1.5 keeps Apple (1.5) and Pineapple (0.5)
        let filter = ItemFilter {
            max_quantity: Some(1.5),
            ..Default::default()
        };
        let kilos = run(&inventory(), Some(Category::Fruit), &filter, Unit::Kilogram).unwrap();
        assert_eq!(names(kilos.fruits.as_deref().unwrap()), vec!["Apple", "Pineapple"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = ItemFilter {
            min_quantity: Some(500.0),
            max_quantity: Some(2000.0),
            ..Default::default()
        };
        let listing = run(&inventory(), Some(Category::Fruit), &filter, Unit::Gram).unwrap();
        assert_eq!(
            names(listing.fruits.as_deref().unwrap()),
            vec!["Apple", "Banana", "Pineapple"]
        );

        let exact = ItemFilter {
            min_quantity: Some(800.0),
            max_quantity: Some(800.0),
            ..Default::default()
        };
        let listing = run(&inventory(), Some(Category::Vegetable), &exact, Unit::Gram).unwrap();
        assert_eq!(names(listing.vegetables.as_deref().unwrap()), vec!["Carrot"]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = ItemFilter {
            name: Some("an".to_string()),
            min_quantity: Some(1.0),
            max_quantity: Some(3.0),
        };
        let listing = run(&inventory(), None, &filter, Unit::Kilogram).unwrap();
        assert_eq!(names(listing.fruits.as_deref().unwrap()), vec!["Banana"]);
        assert!(listing.vegetables.unwrap().is_empty());
    }

    #[test]
    fn test_listing_serialization_omits_unrequested_key() {
        let listing = run(
            &inventory(),
            Some(Category::Vegetable),
            &ItemFilter::default(),
            Unit::Kilogram,
        )
        .unwrap();
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("fruits").is_none());
        assert_eq!(json["vegetables"][0]["quantity"], 0.8);
        assert_eq!(json["vegetables"][0]["unit"], "kg");
    }
}
