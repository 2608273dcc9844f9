//! Immutable lookup tables for employees and policies.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use hr_primitives::{EmployeeId, PolicyKey};
use tracing::debug;

use crate::{DatasetError, DatasetResult, EmployeeRecord, PolicyEntry};

/// Read-only collection of employee records and policy entries.
///
/// Records are kept in declaration order for listing and indexed by key for
/// exact-match lookup. There are no mutating methods; build a new dataset to
/// change its contents.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset {
    employees: Vec<EmployeeRecord>,
    employee_index: HashMap<EmployeeId, usize>,
    policies: Vec<PolicyEntry>,
    policy_index: HashMap<PolicyKey, usize>,
}

impl StaticDataset {
    /// Starts building a dataset.
    #[must_use]
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Looks up an employee by exact identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::EmployeeNotFound`] when no record carries the
    /// identifier. Matching is case-sensitive.
    pub fn get_employee(&self, employee_id: &str) -> DatasetResult<&EmployeeRecord> {
        match self.employee_index.get(employee_id) {
            Some(&slot) => {
                debug!(employee_id, "employee lookup hit");
                Ok(&self.employees[slot])
            }
            None => {
                debug!(employee_id, "employee lookup miss");
                Err(DatasetError::EmployeeNotFound {
                    employee_id: employee_id.to_owned(),
                })
            }
        }
    }

    /// Looks up a policy by exact key.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::PolicyNotFound`] when no entry carries the key.
    pub fn get_policy(&self, policy_key: &str) -> DatasetResult<&PolicyEntry> {
        match self.policy_index.get(policy_key) {
            Some(&slot) => {
                debug!(policy_key, "policy lookup hit");
                Ok(&self.policies[slot])
            }
            None => {
                debug!(policy_key, "policy lookup miss");
                Err(DatasetError::PolicyNotFound {
                    policy_key: policy_key.to_owned(),
                })
            }
        }
    }

    /// Returns all employee records in declaration order.
    #[must_use]
    pub fn list_employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Returns all policy entries in declaration order.
    #[must_use]
    pub fn list_policies(&self) -> &[PolicyEntry] {
        &self.policies
    }

    /// Returns `true` if a record exists for the identifier.
    #[must_use]
    pub fn contains_employee(&self, employee_id: &str) -> bool {
        self.employee_index.contains_key(employee_id)
    }

    /// Returns `true` if an entry exists for the key.
    #[must_use]
    pub fn contains_policy(&self, policy_key: &str) -> bool {
        self.policy_index.contains_key(policy_key)
    }

    /// Number of employee records.
    #[must_use]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Number of policy entries.
    #[must_use]
    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }
}

/// Collects records and entries, enforcing key uniqueness on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    employees: Vec<EmployeeRecord>,
    policies: Vec<PolicyEntry>,
}

impl DatasetBuilder {
    /// Appends an employee record.
    #[must_use]
    pub fn employee(mut self, record: EmployeeRecord) -> Self {
        self.employees.push(record);
        self
    }

    /// Appends multiple employee records.
    #[must_use]
    pub fn employees<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = EmployeeRecord>,
    {
        self.employees.extend(records);
        self
    }

    /// Appends a policy entry.
    #[must_use]
    pub fn policy(mut self, entry: PolicyEntry) -> Self {
        self.policies.push(entry);
        self
    }

    /// Appends multiple policy entries.
    #[must_use]
    pub fn policies<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = PolicyEntry>,
    {
        self.policies.extend(entries);
        self
    }

    /// Finalises the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateEmployee`] or
    /// [`DatasetError::DuplicatePolicy`] for the first repeated key.
    pub fn build(self) -> DatasetResult<StaticDataset> {
        let mut employee_index = HashMap::with_capacity(self.employees.len());
        for (slot, record) in self.employees.iter().enumerate() {
            match employee_index.entry(record.employee_id().clone()) {
                Entry::Occupied(entry) => {
                    return Err(DatasetError::DuplicateEmployee {
                        employee_id: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(slot);
                }
            }
        }

        let mut policy_index = HashMap::with_capacity(self.policies.len());
        for (slot, policy) in self.policies.iter().enumerate() {
            match policy_index.entry(policy.policy_key().clone()) {
                Entry::Occupied(entry) => {
                    return Err(DatasetError::DuplicatePolicy {
                        policy_key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(slot);
                }
            }
        }

        Ok(StaticDataset {
            employees: self.employees,
            employee_index,
            policies: self.policies,
            policy_index,
        })
    }
}
