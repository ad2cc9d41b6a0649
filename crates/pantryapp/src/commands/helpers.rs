use crate::model::{Category, Item, ItemRecord};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Why a record was rejected as a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateReason {
    Id,
    NameAndType,
    Both,
}

impl DuplicateReason {
    fn from_flags(id: bool, key: bool) -> Option<Self> {
        match (id, key) {
            (true, true) => Some(DuplicateReason::Both),
            (true, false) => Some(DuplicateReason::Id),
            (false, true) => Some(DuplicateReason::NameAndType),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateReason::Id => "Duplicate id",
            DuplicateReason::NameAndType => "Duplicate name and type",
            DuplicateReason::Both => "Duplicate id & Duplicate name and type",
        }
    }
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DuplicateReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Snapshot of the ids and `(lower(name), category)` keys already stored.
///
/// Built once per operation and never updated while a batch is checked, so
/// records inside the same batch are not compared with each other.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    ids: HashSet<i64>,
    keys: HashSet<(String, Category)>,
}

impl DuplicateIndex {
    pub fn build<'a>(existing: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut index = Self::default();
        for item in existing {
            index.ids.insert(item.id);
            index.keys.insert(item.duplicate_key());
        }
        index
    }

    pub fn check(&self, record: &ItemRecord) -> Option<DuplicateReason> {
        let id_duplicate = self.ids.contains(&record.id);
        let key_duplicate = self.keys.contains(&record.duplicate_key());
        DuplicateReason::from_flags(id_duplicate, key_duplicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    fn record(id: i64, name: &str, category: Category) -> ItemRecord {
        ItemRecord {
            id,
            name: name.to_string(),
            category,
            quantity: 1.0,
            unit: Unit::Gram,
        }
    }

    fn index() -> DuplicateIndex {
        let existing = [Item::new(1, "Apple", Category::Fruit, 1.0, Unit::Gram)];
        DuplicateIndex::build(existing.iter())
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(DuplicateReason::Id.to_string(), "Duplicate id");
        assert_eq!(
            DuplicateReason::NameAndType.to_string(),
            "Duplicate name and type"
        );
        assert_eq!(
            DuplicateReason::Both.to_string(),
            "Duplicate id & Duplicate name and type"
        );
    }

    #[test]
    fn test_check_id_collision() {
        assert_eq!(
            index().check(&record(1, "Pear", Category::Fruit)),
            Some(DuplicateReason::Id)
        );
    }

    #[test]
    fn test_check_name_collision_ignores_case() {
        assert_eq!(
            index().check(&record(2, "aPpLe", Category::Fruit)),
            Some(DuplicateReason::NameAndType)
        );
    }

    #[test]
    fn test_check_both() {
        assert_eq!(
            index().check(&record(1, "APPLE", Category::Fruit)),
            Some(DuplicateReason::Both)
        );
    }

    #[test]
    fn test_same_name_other_category_is_not_duplicate() {
        assert_eq!(index().check(&record(2, "Apple", Category::Vegetable)), None);
    }

    #[test]
    fn test_reason_serializes_as_message() {
        let json = serde_json::to_string(&DuplicateReason::Both).unwrap();
        assert_eq!(json, "\"Duplicate id & Duplicate name and type\"");
    }
}
