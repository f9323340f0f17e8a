//! Shared domain types for the Vallunex Command Center.
//!
//! Every record is server-owned: the backend mints the identifier and echoes
//! the full record on each mutation. Responses carry the id under either
//! `id` or `_id` depending on the backend's storage layer, so `id` fields
//! accept both spellings on deserialization.

use serde::{Deserialize, Serialize};

// ============================================================================
// Session
// ============================================================================

/// Workspace role. Closed set; every dispatch over it matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Sales,
    Development,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Sales => "Sales",
            Role::Development => "Development",
        }
    }
}

/// Logged-in identity returned by `POST /auth/login` and persisted between
/// launches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// Theme preference, persisted alongside the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

// ============================================================================
// Employees
// ============================================================================

/// Payroll state for the current cycle. Flips Pending → Paid only through
/// the approval actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub salary: f64,
    pub status: EmployeeStatus,
    /// Login password for the employee's account. Never shown in any view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// Create payload: everything but the server-minted id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    pub salary: f64,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_ids: Vec<String>,
}

/// Partial PATCH body; only set fields are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
}

/// Update echo. The backend may answer a PATCH with the full record or only
/// the fields it changed, so every field is optional; values merge over the
/// existing record and omitted fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEcho {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
    pub password: Option<String>,
    pub product_ids: Option<Vec<String>>,
}

// ============================================================================
// Tasks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Forward-only chain: Open → Submitted → {Approved, Rejected}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub priority: TaskPriority,
    /// Due date as a plain `YYYY-MM-DD` string, straight from the date input.
    pub deadline: String,
    /// Display name of the assignee, not an employee id. Renaming an
    /// employee orphans existing task rows; the backend owns that tradeoff.
    pub assigned_to: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub priority: TaskPriority,
    pub deadline: String,
    pub assigned_to: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Update echo; see [`EmployeeEcho`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEcho {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<TaskStatus>,
    pub submission_link: Option<String>,
}

// ============================================================================
// Leads
// ============================================================================

/// Sales pipeline stage. `Client` is the terminal, one-way conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    #[serde(rename = "In Review")]
    InReview,
    Negotiation,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadTemperature {
    Cold,
    Warm,
    Hot,
}

impl Default for LeadTemperature {
    fn default() -> Self {
        LeadTemperature::Cold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadValuePeriod {
    Monthly,
    Yearly,
}

impl Default for LeadValuePeriod {
    fn default() -> Self {
        LeadValuePeriod::Monthly
    }
}

/// A prospective client tracked through the pipeline. Temperature, value
/// period and product list default when the backend omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    pub client_name: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub temperature: LeadTemperature,
    pub value: f64,
    #[serde(default)]
    pub value_period: LeadValuePeriod,
    pub sales_rep: String,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub client_name: String,
    pub value: f64,
    pub sales_rep: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<LeadTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<LeadValuePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<LeadTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<LeadValuePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
}

/// Update echo; see [`EmployeeEcho`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEcho {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub status: Option<LeadStatus>,
    pub temperature: Option<LeadTemperature>,
    pub value: Option<f64>,
    pub value_period: Option<LeadValuePeriod>,
    pub sales_rep: Option<String>,
    pub product_ids: Option<Vec<String>>,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub client_name: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub owner_employee_id: String,
    /// Denormalized owner display name kept alongside the id.
    #[serde(default)]
    pub owner_employee_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub client_name: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub owner_employee_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_employee_id: Option<String>,
}

/// Update echo; see [`EmployeeEcho`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEcho {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub owner_employee_id: Option<String>,
    pub owner_employee_name: Option<String>,
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub tech_stack: String,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub tech_stack: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

/// Update echo; see [`EmployeeEcho`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEcho {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub tech_stack: Option<String>,
    pub revenue: Option<f64>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_accepts_mongo_id() {
        let json = r#"{
            "_id": "65ab03",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "role": "Employee",
            "salary": 0,
            "status": "Pending"
        }"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.id, "65ab03");
        assert_eq!(emp.status, EmployeeStatus::Pending);
        assert!(emp.product_ids.is_empty());
    }

    #[test]
    fn test_lead_defaults_applied_when_omitted() {
        let json = r#"{
            "id": "l1",
            "clientName": "Acme",
            "status": "New",
            "value": 45000,
            "salesRep": "Jordan"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.temperature, LeadTemperature::Cold);
        assert_eq!(lead.value_period, LeadValuePeriod::Monthly);
        assert!(lead.product_ids.is_empty());
    }

    #[test]
    fn test_lead_status_wire_names() {
        let lead_status: LeadStatus = serde_json::from_str("\"In Review\"").unwrap();
        assert_eq!(lead_status, LeadStatus::InReview);
        assert_eq!(
            serde_json::to_string(&LeadStatus::InReview).unwrap(),
            "\"In Review\""
        );

        let project_status: ProjectStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(project_status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Development).unwrap(),
            "\"development\""
        );
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_changes_serialize_only_set_fields() {
        let changes = EmployeeChanges {
            salary: Some(5200.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["salary"], 5200.0);
    }

    #[test]
    fn test_identity_roundtrip() {
        let identity = Identity {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@vallunex.com".to_string(),
            role: Role::Sales,
            token: "tok-123".to_string(),
        };
        let json = serde_json::to_string(&identity).unwrap();
        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, Role::Sales);
        assert_eq!(parsed.token, "tok-123");
    }
}
