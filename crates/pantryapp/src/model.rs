use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// The closed set of produce partitions. Every stored item belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruit,
    Vegetable,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fruit, Category::Vegetable];

    /// The literal persisted in the `category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruit => "fruit",
            Category::Vegetable => "vegetable",
        }
    }

    /// Plural label used as the listing key (`fruits`, `vegetables`).
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Fruit => "fruits",
            Category::Vegetable => "vegetables",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruit" => Ok(Category::Fruit),
            "vegetable" => Ok(Category::Vegetable),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Weight units. Gram is the canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "g", alias = "grams")]
    Gram,
    #[serde(rename = "kg", alias = "kilograms")]
    Kilogram,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Accepts the short forms plus the long spellings, normalizing to `g`/`kg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" | "grams" => Ok(Unit::Gram),
            "kg" | "kilograms" => Ok(Unit::Kilogram),
            other => Err(format!("unknown unit '{}'", other)),
        }
    }
}

/// A stored inventory record.
///
/// `quantity` is always expressed in `unit`; nothing normalizes it at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    pub quantity: f64,
    pub unit: Unit,
}

impl Item {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: Category,
        quantity: f64,
        unit: Unit,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            quantity,
            unit,
        }
    }

    pub fn to_grams(&self) -> f64 {
        match self.unit {
            Unit::Kilogram => self.quantity * GRAMS_PER_KILOGRAM,
            Unit::Gram => self.quantity,
        }
    }

    pub fn to_kilograms(&self) -> f64 {
        match self.unit {
            Unit::Gram => self.quantity / GRAMS_PER_KILOGRAM,
            Unit::Kilogram => self.quantity,
        }
    }

    /// Returns a copy with `quantity` and `unit` rewritten to `unit`.
    pub fn in_unit(&self, unit: Unit) -> Item {
        let quantity = match unit {
            Unit::Gram => self.to_grams(),
            Unit::Kilogram => self.to_kilograms(),
        };
        Item {
            quantity,
            unit,
            ..self.clone()
        }
    }

    /// Secondary uniqueness key: lower-cased name plus category.
    pub fn duplicate_key(&self) -> (String, Category) {
        (self.name.to_lowercase(), self.category)
    }
}

/// A caller-supplied record that has already passed field validation.
///
/// This is what ingestion echoes back in its per-record outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    pub quantity: f64,
    pub unit: Unit,
}

impl ItemRecord {
    pub fn duplicate_key(&self) -> (String, Category) {
        (self.name.to_lowercase(), self.category)
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: record.id,
            name: record.name,
            category: record.category,
            quantity: record.quantity,
            unit: record.unit,
        }
    }
}
