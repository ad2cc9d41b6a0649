use crate::api::PantryApi;
use crate::model::{Category, ItemRecord, Unit};
use crate::store::CsvBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub csv_path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let csv_path = temp_dir.path().join("var").join("data").join("items.csv");
        Self {
            _temp_dir: temp_dir,
            csv_path,
        }
    }

    pub fn api(&self) -> PantryApi<CsvBackend> {
        PantryApi::open(&self.csv_path).expect("failed to open store")
    }

    pub fn read_csv(&self) -> String {
        std::fs::read_to_string(&self.csv_path).expect("failed to read store file")
    }
}

pub fn record(id: i64, name: &str, category: Category, quantity: f64, unit: Unit) -> ItemRecord {
    ItemRecord {
        id,
        name: name.to_string(),
        category,
        quantity,
        unit,
    }
}
