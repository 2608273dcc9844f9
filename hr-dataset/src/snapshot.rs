//! JSON snapshot format for datasets.
//!
//! A snapshot is an object with `employees` and `policies` arrays in
//! declaration order. Deserialization goes through [`DatasetBuilder`], so a
//! snapshot with repeated or empty keys is rejected. Unknown fields are
//! rejected at every level, so a misspelled `employees` key fails instead of
//! loading as an empty dataset.
//!
//! [`DatasetBuilder`]: crate::DatasetBuilder

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DatasetError, DatasetResult, EmployeeRecord, PolicyEntry, StaticDataset};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    employees: &'a [EmployeeRecord],
    policies: &'a [PolicyEntry],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotOwned {
    #[serde(default)]
    employees: Vec<EmployeeRecord>,
    #[serde(default)]
    policies: Vec<PolicyEntry>,
}

impl Serialize for StaticDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotRef {
            employees: self.list_employees(),
            policies: self.list_policies(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StaticDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = SnapshotOwned::deserialize(deserializer)?;
        StaticDataset::builder()
            .employees(snapshot.employees)
            .policies(snapshot.policies)
            .build()
            .map_err(D::Error::custom)
    }
}

impl StaticDataset {
    /// Renders the dataset as pretty-printed snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> DatasetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a dataset from snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Serialization`] for malformed JSON, negative
    /// balances, empty keys, or repeated keys.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a dataset from a reader yielding snapshot JSON.
    ///
    /// # Errors
    ///
    /// See [`StaticDataset::from_json`].
    pub fn from_json_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a snapshot file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise
    /// see [`StaticDataset::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_survives_json_round_trip() {
        let fixture = StaticDataset::fixture();
        let json = fixture.to_json().unwrap();
        let restored = StaticDataset::from_json(&json).unwrap();

        assert_eq!(restored.list_employees(), fixture.list_employees());
        assert_eq!(restored.list_policies(), fixture.list_policies());
    }

    #[test]
    fn snapshot_uses_snake_case_fields() {
        let value = serde_json::to_value(StaticDataset::fixture()).unwrap();
        let first = &value["employees"][0];
        assert_eq!(first["employee_id"], "EMP001");
        assert_eq!(first["leave_balance"], 15);
        assert_eq!(value["policies"][1]["policy_key"], "work_from_home");
    }

    #[test]
    fn duplicate_keys_in_snapshot_are_rejected() {
        let json = serde_json::json!({
            "employees": [],
            "policies": [
                { "policy_key": "benefits", "text": "one" },
                { "policy_key": "benefits", "text": "two" }
            ]
        })
        .to_string();

        let err = StaticDataset::from_json(&json).expect_err("duplicate should fail");
        assert!(matches!(err, DatasetError::Serialization { .. }));
        assert!(err.to_string().contains("benefits"));
    }

    #[test]
    fn empty_keys_in_snapshot_are_rejected() {
        let json = r#"{"policies": [{"policy_key": " ", "text": "blank"}]}"#;
        assert!(StaticDataset::from_json(json).is_err());
    }

    #[test]
    fn misspelled_top_level_fields_are_rejected() {
        let err = StaticDataset::from_json(r#"{"employes": []}"#)
            .expect_err("unknown top-level field should fail");
        assert!(matches!(err, DatasetError::Serialization { .. }));
        assert!(err.to_string().contains("employes"));

        let json = serde_json::json!({
            "employes": [{
                "employee_id": "EMP001",
                "name": "Priya Sharma",
                "department": "Engineering",
                "leave_balance": 15,
                "sick_leave": 5,
                "joined_date": "2022-01-15"
            }],
            "polices": []
        })
        .to_string();
        assert!(matches!(
            StaticDataset::from_json(&json),
            Err(DatasetError::Serialization { .. })
        ));
    }

    #[test]
    fn unknown_record_fields_are_rejected() {
        let json = serde_json::json!({
            "employees": [{
                "employee_id": "EMP001",
                "name": "Priya Sharma",
                "department": "Engineering",
                "leave_balence": 15,
                "leave_balance": 15,
                "sick_leave": 5,
                "joined_date": "2022-01-15"
            }]
        })
        .to_string();
        assert!(StaticDataset::from_json(&json).is_err());

        let json = r#"{"policies": [{"policy_key": "benefits", "txt": "x", "text": "y"}]}"#;
        assert!(StaticDataset::from_json(json).is_err());
    }

    #[test]
    fn omitted_sections_default_to_empty() {
        let dataset = StaticDataset::from_json("{}").unwrap();
        assert_eq!(dataset.employee_count(), 0);
        assert_eq!(dataset.policy_count(), 0);
    }

    #[test]
    fn reads_snapshot_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hr.json");
        std::fs::write(&path, StaticDataset::fixture().to_json().unwrap()).unwrap();

        let dataset = StaticDataset::from_path(&path).unwrap();
        assert_eq!(dataset.employee_count(), 3);

        let err = StaticDataset::from_path(dir.path().join("missing.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
