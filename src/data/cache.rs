use once_cell::sync::OnceCell;

use super::error::LoadError;
use super::loader::TableSource;
use super::model::Datasets;

// ---------------------------------------------------------------------------
// One-time dataset cache
// ---------------------------------------------------------------------------

/// Owns a [`TableSource`] and the datasets it produced.
///
/// The source is read on the first successful [`DatasetCache::get`]; every
/// later call returns the same `&Datasets` without touching the source. There
/// is no invalidation: edits to the workbook are only seen after a restart.
pub struct DatasetCache<S> {
    source: S,
    datasets: OnceCell<Datasets>,
}

impl<S: TableSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        DatasetCache {
            source,
            datasets: OnceCell::new(),
        }
    }

    /// Return the datasets, loading them on first use.
    ///
    /// A failed load is not remembered; the error is returned to the caller.
    pub fn get(&self) -> Result<&Datasets, LoadError> {
        self.datasets.get_or_try_init(|| {
            log::info!("Loading dashboard datasets");
            let datasets = self.source.load()?;
            log::info!(
                "Loaded {} salary rows, {} inventory rows, {} measurement rows",
                datasets.salary.len(),
                datasets.inventory.len(),
                datasets.measurements.len()
            );
            Ok(datasets)
        })
    }

    /// Whether the datasets have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.datasets.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::{CellValue, Table};

    /// Counts physical reads; fails while `fail` is set.
    struct CountingSource {
        loads: Cell<usize>,
        fail: Cell<bool>,
    }

    impl CountingSource {
        fn new() -> Self {
            CountingSource {
                loads: Cell::new(0),
                fail: Cell::new(false),
            }
        }
    }

    impl TableSource for CountingSource {
        fn load(&self) -> Result<Datasets, LoadError> {
            self.loads.set(self.loads.get() + 1);
            if self.fail.get() {
                return Err(LoadError::MissingSheet {
                    path: PathBuf::from("mepcrete.xlsx"),
                    sheet: "Inventory Data".into(),
                });
            }
            let volume = Table::new(
                "AAC Measurements",
                vec!["Volume (m3)".into()],
                vec![vec![CellValue::Float(0.036)]],
            );
            Ok(Datasets {
                salary: Table::new("Employee Salary Data", Vec::new(), Vec::new()),
                inventory: Table::new("Inventory Data", Vec::new(), Vec::new()),
                measurements: volume,
            })
        }
    }

    #[test]
    fn source_is_read_exactly_once() {
        let cache = DatasetCache::new(CountingSource::new());
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap() as *const Datasets;
        let second = cache.get().unwrap() as *const Datasets;
        let third = cache.get().unwrap();

        assert_eq!(cache.source.loads.get(), 1);
        assert!(cache.is_loaded());
        assert_eq!(first, second);
        assert_eq!(third.measurements.rows, vec![vec![CellValue::Float(0.036)]]);
    }

    #[test]
    fn failed_load_is_propagated_and_not_cached() {
        let source = CountingSource::new();
        source.fail.set(true);
        let cache = DatasetCache::new(source);

        assert!(matches!(cache.get(), Err(LoadError::MissingSheet { .. })));
        assert!(!cache.is_loaded());

        cache.source.fail.set(false);
        assert!(cache.get().is_ok());
        assert!(cache.get().is_ok());
        assert_eq!(cache.source.loads.get(), 2);
    }
}
