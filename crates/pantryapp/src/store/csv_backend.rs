use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use crate::model::{Category, Item, Unit};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const HEADER: [&str; 5] = ["id", "name", "category", "quantity", "unit"];
const FIELD_COUNT: usize = HEADER.len();

/// CSV file backend: one header row followed by one row per item.
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(PantryError::Io)?;
        }
        Ok(parent)
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("items.csv");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_csv(path: &Path, items: &[Item]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
        writer.write_record(HEADER).map_err(csv_error)?;
        for item in items {
            writer.write_record([
                item.id.to_string(),
                item.name.clone(),
                item.category.as_str().to_string(),
                item.quantity.to_string(),
                item.unit.as_str().to_string(),
            ])
            .map_err(csv_error)?;
        }
        writer.flush().map_err(PantryError::Io)?;
        Ok(())
    }
}

/// Surfaces I/O failures as `Io` so callers see one error kind for an unwritable store.
fn csv_error(e: csv::Error) -> PantryError {
    if e.is_io_error() {
        PantryError::Io(e.into())
    } else {
        PantryError::Csv(e)
    }
}

/// Decodes one data row. `None` means the row is malformed and should be skipped.
fn parse_row(record: &csv::StringRecord) -> Option<Item> {
    if record.len() < FIELD_COUNT {
        return None;
    }
    let id = record[0].trim().parse::<i64>().ok()?;
    let name = record[1].to_string();
    let category = record[2].trim().parse::<Category>().ok()?;
    let quantity = record[3].trim().parse::<f64>().ok()?;
    let unit = record[4].trim().parse::<Unit>().ok()?;
    Some(Item {
        id,
        name,
        category,
        quantity,
        unit,
    })
}

impl StorageBackend for CsvBackend {
    fn load_items(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(csv_error)?;

        let mut items = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(csv_error(e)),
                Err(e) => {
                    log::warn!("{}: skipping unreadable row {}: {}", self.location(), row + 1, e);
                    continue;
                }
            };
            match parse_row(&record) {
                Some(item) => items.push(item),
                None => log::warn!(
                    "{}: skipping malformed row {} ({} fields)",
                    self.location(),
                    row + 1,
                    record.len()
                ),
            }
        }

        log::debug!("Loaded {} items from {}", items.len(), self.location());
        Ok(items)
    }

    fn write_items(&self, items: &[Item]) -> Result<()> {
        let dir = self.ensure_parent_dir()?;

        // Atomic write: the destination is only replaced once the tmp file is complete
        let tmp_path = self.tmp_path(&dir);
        if let Err(e) = Self::write_csv(&tmp_path, items) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PantryError::Io(e));
        }

        log::debug!("Wrote {} items to {}", items.len(), self.location());
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_rejects_short_rows() {
        let record = csv::StringRecord::from(vec!["1", "Apple", "fruit", "150"]);
        assert!(parse_row(&record).is_none());
    }

    #[test]
    fn test_parse_row_ignores_extra_fields() {
        let record = csv::StringRecord::from(vec!["1", "Apple", "fruit", "150", "g", "extra"]);
        let item = parse_row(&record).unwrap();
        assert_eq!(item, Item::new(1, "Apple", Category::Fruit, 150.0, Unit::Gram));
    }

    #[test]
    fn test_parse_row_rejects_unknown_category() {
        let record = csv::StringRecord::from(vec!["1", "Apple", "grain", "150", "g"]);
        assert!(parse_row(&record).is_none());
    }

    #[test]
    fn test_parse_row_keeps_name_whitespace() {
        let record = csv::StringRecord::from(vec!["3", " Red Onion ", "vegetable", "2.5", "kg"]);
        let item = parse_row(&record).unwrap();
        assert_eq!(item.name, " Red Onion ");
        assert_eq!(item.unit, Unit::Kilogram);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvBackend::new(dir.path().join("absent.csv"));
        assert!(backend.load_items().unwrap().is_empty());
        assert!(!backend.is_initialized());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvBackend::new(dir.path().join("var").join("data").join("items.csv"));
        backend.write_items(&[]).unwrap();
        assert!(backend.is_initialized());
        assert_eq!(
            fs::read_to_string(backend.path()).unwrap(),
            "id,name,category,quantity,unit\n"
        );
    }
}
