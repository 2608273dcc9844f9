//! Dataset lookups exposed as assistant tools.
//!
//! A lookup miss is reported inside the tool output as `"found": false`. Only
//! malformed input produces a [`ToolError`].

use std::sync::Arc;

use hr_dataset::{DatasetError, EmployeeRecord, PolicyEntry, StaticDataset};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::registry::{ToolError, ToolMetadata, ToolRegistry, ToolResult};

/// Tool returning a single employee record.
pub const GET_EMPLOYEE: &str = "get_employee";
/// Tool returning a single policy entry.
pub const GET_POLICY: &str = "get_policy";
/// Tool returning every employee record.
pub const LIST_EMPLOYEES: &str = "list_employees";
/// Tool returning every policy entry.
pub const LIST_POLICIES: &str = "list_policies";

const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registers the four dataset tools against `dataset`.
///
/// # Errors
///
/// Returns [`ToolError::DuplicateTool`] if any of the names is already taken.
pub fn register_hr_tools(registry: &ToolRegistry, dataset: Arc<StaticDataset>) -> ToolResult<()> {
    let employees = dataset.employee_count();
    let policies = dataset.policy_count();

    let ds = Arc::clone(&dataset);
    registry.register_tool(
        metadata(
            GET_EMPLOYEE,
            "Look up an employee by exact id. Input: {\"employee_id\": \"EMP001\"}",
        )?,
        move |input: Value| {
            let ds = Arc::clone(&ds);
            async move { get_employee(&ds, &input) }
        },
    )?;

    let ds = Arc::clone(&dataset);
    registry.register_tool(
        metadata(
            GET_POLICY,
            "Look up a policy by exact key. Input: {\"policy_key\": \"leave_policy\"}",
        )?,
        move |input: Value| {
            let ds = Arc::clone(&ds);
            async move { get_policy(&ds, &input) }
        },
    )?;

    let ds = Arc::clone(&dataset);
    registry.register_tool(
        metadata(LIST_EMPLOYEES, "List every employee record.")?,
        move |_input: Value| {
            let ds = Arc::clone(&ds);
            async move {
                to_output(
                    LIST_EMPLOYEES,
                    &EmployeeList {
                        employees: ds.list_employees(),
                    },
                )
            }
        },
    )?;

    registry.register_tool(
        metadata(LIST_POLICIES, "List every policy entry.")?,
        move |_input: Value| {
            let ds = Arc::clone(&dataset);
            async move {
                to_output(
                    LIST_POLICIES,
                    &PolicyList {
                        policies: ds.list_policies(),
                    },
                )
            }
        },
    )?;

    info!(employees, policies, "hr tools registered");
    Ok(())
}

#[derive(Serialize)]
struct EmployeeHit<'a> {
    found: bool,
    employee: &'a EmployeeRecord,
}

#[derive(Serialize)]
struct PolicyHit<'a> {
    found: bool,
    policy: &'a PolicyEntry,
}

#[derive(Serialize)]
struct EmployeeList<'a> {
    employees: &'a [EmployeeRecord],
}

#[derive(Serialize)]
struct PolicyList<'a> {
    policies: &'a [PolicyEntry],
}

fn metadata(name: &str, description: &str) -> ToolResult<ToolMetadata> {
    Ok(ToolMetadata::new(name, TOOL_VERSION)?.with_description(description))
}

fn get_employee(dataset: &StaticDataset, input: &Value) -> ToolResult<Value> {
    let employee_id = required_str(GET_EMPLOYEE, input, "employee_id")?;
    match dataset.get_employee(employee_id) {
        Ok(employee) => to_output(
            GET_EMPLOYEE,
            &EmployeeHit {
                found: true,
                employee,
            },
        ),
        Err(DatasetError::EmployeeNotFound { employee_id }) => {
            Ok(json!({ "found": false, "employee_id": employee_id }))
        }
        Err(err) => Err(ToolError::execution(err.to_string())),
    }
}

fn get_policy(dataset: &StaticDataset, input: &Value) -> ToolResult<Value> {
    let policy_key = required_str(GET_POLICY, input, "policy_key")?;
    match dataset.get_policy(policy_key) {
        Ok(policy) => to_output(
            GET_POLICY,
            &PolicyHit {
                found: true,
                policy,
            },
        ),
        Err(DatasetError::PolicyNotFound { policy_key }) => {
            Ok(json!({ "found": false, "policy_key": policy_key }))
        }
        Err(err) => Err(ToolError::execution(err.to_string())),
    }
}

fn required_str<'a>(tool: &str, input: &'a Value, field: &str) -> ToolResult<&'a str> {
    match input.get(field) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ToolError::invalid_input(
            tool,
            format!("`{field}` must be a string"),
        )),
        None => Err(ToolError::invalid_input(tool, format!("missing `{field}`"))),
    }
}

fn to_output<T: Serialize>(tool: &str, value: &T) -> ToolResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| ToolError::execution(format!("{tool}: failed to encode output: {err}")))
}
