use std::collections::HashSet;

use hr_dataset::{DatasetSource, EmployeeId, EmployeeRecord, PolicyEntry, PolicyKey, StaticDataset};
use hr_tools::hr::{GET_EMPLOYEE, GET_POLICY, LIST_EMPLOYEES, LIST_POLICIES, register_hr_tools};
use hr_tools::registry::{ToolError, ToolRegistry};
use serde_json::{Value, json};

fn custom_dataset() -> StaticDataset {
    let record = EmployeeRecord::builder(EmployeeId::new("EMP042").unwrap(), "Meera Iyer")
        .department("Finance")
        .leave_balance(9)
        .sick_leave(2)
        .joined_date("2023-11-20")
        .build()
        .unwrap();

    StaticDataset::builder()
        .employee(record)
        .policy(PolicyEntry::new(
            PolicyKey::new("travel").unwrap(),
            "Travel Policy:\n- Book economy class for trips under 6 hours.",
        ))
        .build()
        .unwrap()
}

#[tokio::test]
async fn assistant_answers_from_fixture() {
    let registry = ToolRegistry::new();
    let dataset = DatasetSource::Builtin.load().unwrap();
    register_hr_tools(&registry, dataset).unwrap();

    let names: Vec<_> = registry.list().iter().map(|m| m.name().to_owned()).collect();
    assert_eq!(names, [GET_EMPLOYEE, GET_POLICY, LIST_EMPLOYEES, LIST_POLICIES]);

    let priya = registry
        .invoke(GET_EMPLOYEE, json!({ "employee_id": "EMP001" }))
        .await
        .unwrap();
    assert_eq!(
        priya["employee"],
        json!({
            "employee_id": "EMP001",
            "name": "Priya Sharma",
            "department": "Engineering",
            "leave_balance": 15,
            "sick_leave": 5,
            "joined_date": "2022-01-15"
        })
    );

    let wfh = registry
        .invoke(GET_POLICY, json!({ "policy_key": "work_from_home" }))
        .await
        .unwrap();
    assert!(wfh["policy"]["text"].as_str().unwrap().contains("3 days per week"));

    let listed = registry.invoke(LIST_EMPLOYEES, Value::Null).await.unwrap();
    let ids: HashSet<_> = listed["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn assistant_answers_from_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hr.json");
    std::fs::write(&path, custom_dataset().to_json().unwrap()).unwrap();

    let registry = ToolRegistry::new();
    register_hr_tools(&registry, DatasetSource::JsonFile(path).load().unwrap()).unwrap();

    let meera = registry
        .invoke(GET_EMPLOYEE, json!({ "employee_id": "EMP042" }))
        .await
        .unwrap();
    assert_eq!(meera["employee"]["department"], "Finance");

    // The fixture's employees are not part of this dataset.
    let priya = registry
        .invoke(GET_EMPLOYEE, json!({ "employee_id": "EMP001" }))
        .await
        .unwrap();
    assert_eq!(priya["found"], false);

    let policies = registry.invoke(LIST_POLICIES, json!({})).await.unwrap();
    assert_eq!(policies["policies"][0]["policy_key"], "travel");
}

#[tokio::test]
async fn unknown_tools_fail_without_touching_the_dataset() {
    let registry = ToolRegistry::new();
    register_hr_tools(&registry, DatasetSource::Builtin.load().unwrap()).unwrap();

    let err = registry
        .invoke("update_employee", json!({ "employee_id": "EMP001" }))
        .await
        .expect_err("no mutation tool exists");
    assert!(matches!(err, ToolError::UnknownTool { .. }));

    let still_there = registry
        .invoke(GET_EMPLOYEE, json!({ "employee_id": "EMP001" }))
        .await
        .unwrap();
    assert_eq!(still_there["employee"]["leave_balance"], 15);
}
