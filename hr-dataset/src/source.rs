//! Dataset source selection.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::{DatasetResult, StaticDataset};

/// Where a dataset is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// The built-in fixture compiled into the crate.
    #[default]
    Builtin,
    /// A JSON snapshot file on disk.
    JsonFile(PathBuf),
}

impl DatasetSource {
    /// Chooses a snapshot file when a path is given, the fixture otherwise.
    #[must_use]
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Builtin, Self::JsonFile)
    }

    /// Loads the dataset described by this source.
    ///
    /// # Errors
    ///
    /// Propagates snapshot read and parse failures for
    /// [`DatasetSource::JsonFile`]. The built-in source never fails.
    pub fn load(&self) -> DatasetResult<Arc<StaticDataset>> {
        let dataset = match self {
            Self::Builtin => StaticDataset::shared_fixture(),
            Self::JsonFile(path) => Arc::new(StaticDataset::from_path(path)?),
        };

        info!(
            source = ?self,
            employees = dataset.employee_count(),
            policies = dataset.policy_count(),
            "dataset loaded"
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads_fixture() {
        let dataset = DatasetSource::from_optional_path(None).load().unwrap();
        assert_eq!(dataset.employee_count(), 3);
        assert_eq!(dataset.get_employee("EMP002").unwrap().name(), "Rahul Verma");

        let again = DatasetSource::Builtin.load().unwrap();
        assert!(Arc::ptr_eq(&dataset, &again));
        assert!(std::ptr::eq(Arc::as_ptr(&dataset), StaticDataset::fixture()));
    }

    #[test]
    fn file_source_loads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(
            &path,
            r#"{"employees": [], "policies": [{"policy_key": "travel", "text": "Book economy."}]}"#,
        )
        .unwrap();

        let source = DatasetSource::from_optional_path(Some(path.clone()));
        assert_eq!(source, DatasetSource::JsonFile(path));

        let dataset = source.load().unwrap();
        assert_eq!(dataset.employee_count(), 0);
        assert!(dataset.contains_policy("travel"));
    }
}
