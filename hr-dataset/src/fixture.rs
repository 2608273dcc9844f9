//! Built-in HR fixture used by the assistant demo and tests.

use std::sync::{Arc, LazyLock};

use hr_primitives::{EmployeeId, PolicyKey};

use crate::{DatasetResult, EmployeeRecord, PolicyEntry, StaticDataset};

struct EmployeeRow {
    id: &'static str,
    name: &'static str,
    department: &'static str,
    leave_balance: u32,
    sick_leave: u32,
    joined_date: &'static str,
}

const EMPLOYEES: &[EmployeeRow] = &[
    EmployeeRow {
        id: "EMP001",
        name: "Priya Sharma",
        department: "Engineering",
        leave_balance: 15,
        sick_leave: 5,
        joined_date: "2022-01-15",
    },
    EmployeeRow {
        id: "EMP002",
        name: "Rahul Verma",
        department: "Marketing",
        leave_balance: 20,
        sick_leave: 8,
        joined_date: "2021-06-01",
    },
    EmployeeRow {
        id: "EMP003",
        name: "Anjali Patel",
        department: "HR",
        leave_balance: 18,
        sick_leave: 6,
        joined_date: "2020-03-10",
    },
];

const LEAVE_POLICY: &str = "\
Annual Leave Policy:
- Employees get 20 days of annual leave per year.
- Leave must be requested at least 2 weeks in advance.
- Maximum consecutive leave: 15 days.
- Unused leave carries over up to 5 days.";

const WORK_FROM_HOME_POLICY: &str = "\
Work From Home Policy:
- Employees can work from home up to 3 days per week.
- Must inform manager 1 day in advance.
- Core hours: 10 AM - 4 PM must be available.";

const BENEFITS_POLICY: &str = "\
Employee Benefits:
- Health insurance (employee + family).
- Annual performance bonus.
- Professional development budget: ₹1,50,000/year.
- Gym membership reimbursement.
- Festival bonuses (Diwali, etc.).";

const POLICIES: &[(&str, &str)] = &[
    ("leave_policy", LEAVE_POLICY),
    ("work_from_home", WORK_FROM_HOME_POLICY),
    ("benefits", BENEFITS_POLICY),
];

static FIXTURE: LazyLock<Arc<StaticDataset>> = LazyLock::new(|| {
    Arc::new(build().expect("built-in HR fixture keys are unique and non-empty"))
});

impl StaticDataset {
    /// Returns the shared built-in fixture, constructed on first use.
    #[must_use]
    pub fn fixture() -> &'static StaticDataset {
        &FIXTURE
    }

    /// Returns a handle to the same fixture as [`StaticDataset::fixture`].
    #[must_use]
    pub fn shared_fixture() -> Arc<StaticDataset> {
        Arc::clone(&FIXTURE)
    }
}

fn build() -> DatasetResult<StaticDataset> {
    let mut builder = StaticDataset::builder();

    for row in EMPLOYEES {
        let record = EmployeeRecord::builder(EmployeeId::new(row.id)?, row.name)
            .department(row.department)
            .leave_balance(row.leave_balance)
            .sick_leave(row.sick_leave)
            .joined_date(row.joined_date)
            .build()?;
        builder = builder.employee(record);
    }

    for &(key, text) in POLICIES {
        builder = builder.policy(PolicyEntry::new(PolicyKey::new(key)?, text));
    }

    builder.build()
}
