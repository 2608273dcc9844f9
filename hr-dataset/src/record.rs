//! Employee record type.

use hr_primitives::EmployeeId;
use serde::{Deserialize, Serialize};

use crate::{DatasetError, DatasetResult};

/// HR profile of a single employee.
///
/// Field contents are kept as given: departments are free text and the join
/// date is an opaque `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeRecord {
    employee_id: EmployeeId,
    name: String,
    department: String,
    leave_balance: u32,
    sick_leave: u32,
    joined_date: String,
}

impl EmployeeRecord {
    /// Creates a builder for a record with the given identifier and name.
    #[must_use]
    pub fn builder(employee_id: EmployeeId, name: impl Into<String>) -> EmployeeRecordBuilder {
        EmployeeRecordBuilder {
            employee_id,
            name: name.into(),
            department: None,
            leave_balance: None,
            sick_leave: None,
            joined_date: None,
        }
    }

    /// Returns the unique employee identifier.
    #[must_use]
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the department label.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Remaining annual leave days.
    #[must_use]
    pub fn leave_balance(&self) -> u32 {
        self.leave_balance
    }

    /// Remaining sick leave days.
    #[must_use]
    pub fn sick_leave(&self) -> u32 {
        self.sick_leave
    }

    /// Join date as written in the source data.
    #[must_use]
    pub fn joined_date(&self) -> &str {
        &self.joined_date
    }
}

/// Builder used to assemble [`EmployeeRecord`] instances.
#[derive(Debug)]
pub struct EmployeeRecordBuilder {
    employee_id: EmployeeId,
    name: String,
    department: Option<String>,
    leave_balance: Option<u32>,
    sick_leave: Option<u32>,
    joined_date: Option<String>,
}

impl EmployeeRecordBuilder {
    /// Sets the department label.
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the remaining annual leave days.
    #[must_use]
    pub fn leave_balance(mut self, days: u32) -> Self {
        self.leave_balance = Some(days);
        self
    }

    /// Sets the remaining sick leave days.
    #[must_use]
    pub fn sick_leave(mut self, days: u32) -> Self {
        self.sick_leave = Some(days);
        self
    }

    /// Sets the join date.
    #[must_use]
    pub fn joined_date(mut self, date: impl Into<String>) -> Self {
        self.joined_date = Some(date.into());
        self
    }

    /// Finalises the builder and produces the record.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IncompleteRecord`] naming the first field that
    /// was never set.
    pub fn build(self) -> DatasetResult<EmployeeRecord> {
        let missing = |field| DatasetError::IncompleteRecord {
            employee_id: self.employee_id.clone(),
            field,
        };

        let department = self.department.ok_or_else(|| missing("department"))?;
        let leave_balance = self.leave_balance.ok_or_else(|| missing("leave_balance"))?;
        let sick_leave = self.sick_leave.ok_or_else(|| missing("sick_leave"))?;
        let joined_date = self.joined_date.ok_or_else(|| missing("joined_date"))?;

        Ok(EmployeeRecord {
            employee_id: self.employee_id,
            name: self.name,
            department,
            leave_balance,
            sick_leave,
            joined_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> EmployeeId {
        EmployeeId::new(value).unwrap()
    }

    #[test]
    fn builder_constructs_record() {
        let record = EmployeeRecord::builder(id("EMP010"), "Test Person")
            .department("Finance")
            .leave_balance(12)
            .sick_leave(4)
            .joined_date("2023-09-01")
            .build()
            .unwrap();

        assert_eq!(record.employee_id().as_str(), "EMP010");
        assert_eq!(record.name(), "Test Person");
        assert_eq!(record.department(), "Finance");
        assert_eq!(record.leave_balance(), 12);
        assert_eq!(record.sick_leave(), 4);
        assert_eq!(record.joined_date(), "2023-09-01");
    }

    #[test]
    fn builder_reports_missing_field() {
        let err = EmployeeRecord::builder(id("EMP010"), "Test Person")
            .department("Finance")
            .leave_balance(12)
            .joined_date("2023-09-01")
            .build()
            .expect_err("missing sick leave should fail");

        assert!(matches!(
            err,
            DatasetError::IncompleteRecord { field: "sick_leave", .. }
        ));
    }

    #[test]
    fn negative_balances_do_not_deserialize() {
        let json = serde_json::json!({
            "employee_id": "EMP010",
            "name": "Test Person",
            "department": "Finance",
            "leave_balance": -1,
            "sick_leave": 4,
            "joined_date": "2023-09-01"
        });
        assert!(serde_json::from_value::<EmployeeRecord>(json).is_err());
    }
}
