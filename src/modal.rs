//! The shared action modal.
//!
//! One modal instance keyed by an action kind. Each kind keeps its own draft
//! fields, all held simultaneously; switching kinds while open leaves the
//! other drafts alone; closing wipes everything. Submit validates presence
//! only (non-empty strings, parseable numbers) and on failure the modal
//! closes without creating anything or showing an error. That silent drop is
//! shipped behavior and is kept as-is.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{
    Employee, EmployeeStatus, NewEmployee, NewLead, NewProject, NewTask, ProjectStatus,
    TaskPriority, TaskStatus,
};

/// The five actions the modal can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    AddEmployee,
    AddTask,
    ApprovePayroll,
    AddLead,
    AddProject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub priority: TaskPriority,
    pub deadline: String,
    pub assignee: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            priority: TaskPriority::Medium,
            deadline: String::new(),
            assignee: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub client_name: String,
    /// Free-text currency field ("$45,000"); scrubbed before parsing.
    pub value: String,
    pub sales_rep: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub owner: String,
    /// Collected by the form but not part of the create payload.
    pub due_date: String,
}

/// One draft update from the webview, tagged by kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DraftUpdate {
    Employee(EmployeeDraft),
    Task(TaskDraft),
    Lead(LeadDraft),
    Project(ProjectDraft),
}

/// The domain mutation a successful submit resolves to.
#[derive(Debug, Clone)]
pub enum ModalAction {
    CreateEmployee(NewEmployee),
    CreateTask(NewTask),
    ApproveAllPayroll,
    CreateLead(NewLead),
    CreateProject(NewProject),
}

#[derive(Debug, Default)]
pub struct ModalState {
    active: Option<ActionKind>,
    pub employee: EmployeeDraft,
    pub task: TaskDraft,
    pub lead: LeadDraft,
    pub project: ProjectDraft,
}

impl ModalState {
    pub fn active(&self) -> Option<ActionKind> {
        self.active
    }

    pub fn open(&mut self, kind: ActionKind) {
        self.active = Some(kind);
    }

    /// Closing tears the modal down: every draft resets.
    pub fn close(&mut self) {
        *self = ModalState::default();
    }

    pub fn apply_draft(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Employee(draft) => self.employee = draft,
            DraftUpdate::Task(draft) => self.task = draft,
            DraftUpdate::Lead(draft) => self.lead = draft,
            DraftUpdate::Project(draft) => self.project = draft,
        }
    }

    /// Resolve the active kind's draft into a domain mutation.
    ///
    /// `None` means validation failed (or no modal is open); the caller
    /// closes the modal and nothing is created.
    pub fn build_submission(&self, employees: &[Employee]) -> Option<ModalAction> {
        match self.active? {
            ActionKind::AddEmployee => {
                let d = &self.employee;
                if d.name.is_empty() || d.email.is_empty() || d.role.is_empty() || d.password.is_empty()
                {
                    return None;
                }
                Some(ModalAction::CreateEmployee(NewEmployee {
                    name: d.name.clone(),
                    email: Some(d.email.clone()),
                    role: d.role.clone(),
                    // Salary is managed on the payroll screen.
                    salary: 0.0,
                    status: EmployeeStatus::Pending,
                    password: Some(d.password.clone()),
                    product_ids: Vec::new(),
                }))
            }
            ActionKind::AddTask => {
                let d = &self.task;
                if d.title.is_empty() || d.assignee.is_empty() {
                    return None;
                }
                let deadline = if d.deadline.is_empty() {
                    chrono::Local::now().format("%Y-%m-%d").to_string()
                } else {
                    d.deadline.clone()
                };
                Some(ModalAction::CreateTask(NewTask {
                    title: d.title.clone(),
                    priority: d.priority,
                    deadline,
                    assigned_to: d.assignee.clone(),
                    status: TaskStatus::Open,
                    submission_link: None,
                }))
            }
            ActionKind::ApprovePayroll => Some(ModalAction::ApproveAllPayroll),
            ActionKind::AddLead => {
                let d = &self.lead;
                let value = parse_currency(&d.value)?;
                if d.client_name.is_empty() {
                    return None;
                }
                let sales_rep = if d.sales_rep.is_empty() {
                    "Unassigned".to_string()
                } else {
                    d.sales_rep.clone()
                };
                Some(ModalAction::CreateLead(NewLead {
                    client_name: d.client_name.clone(),
                    value,
                    sales_rep,
                    status: None,
                    temperature: None,
                    value_period: None,
                    product_ids: None,
                }))
            }
            ActionKind::AddProject => {
                let d = &self.project;
                if d.name.is_empty() {
                    return None;
                }
                // Owner resolves by display name, else the first employee.
                let owner = employees
                    .iter()
                    .find(|e| e.name == d.owner)
                    .or_else(|| employees.first());
                let client_name = if d.owner.is_empty() {
                    "Unassigned".to_string()
                } else {
                    d.owner.clone()
                };
                Some(ModalAction::CreateProject(NewProject {
                    name: d.name.clone(),
                    client_name,
                    status: ProjectStatus::Planned,
                    budget: None,
                    owner_employee_id: owner.map(|e| e.id.clone()).unwrap_or_default(),
                }))
            }
        }
    }
}

/// Strip everything but digits, dots and minus signs, then parse. An empty
/// field parses as zero, matching the form's lax numeric handling.
pub fn parse_currency(text: &str) -> Option<f64> {
    static SCRUB: OnceLock<Regex> = OnceLock::new();
    let scrub = SCRUB.get_or_init(|| Regex::new(r"[^0-9.\-]").expect("static pattern"));
    let cleaned = scrub.replace_all(text, "");
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LeadStatus;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            role: "Employee".to_string(),
            salary: 0.0,
            status: EmployeeStatus::Pending,
            password: None,
            product_ids: Vec::new(),
        }
    }

    #[test]
    fn test_parse_currency_scrubs_formatting() {
        assert_eq!(parse_currency("$45,000"), Some(45000.0));
        assert_eq!(parse_currency("1 200.50"), Some(1200.5));
        assert_eq!(parse_currency(""), Some(0.0));
        assert_eq!(parse_currency("n/a"), Some(0.0));
        assert_eq!(parse_currency("1.2.3"), None);
    }

    #[test]
    fn test_add_employee_defaults() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::AddEmployee);
        modal.employee = EmployeeDraft {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            role: "Employee".to_string(),
            password: "temp123".to_string(),
        };

        match modal.build_submission(&[]) {
            Some(ModalAction::CreateEmployee(input)) => {
                assert_eq!(input.salary, 0.0);
                assert_eq!(input.status, EmployeeStatus::Pending);
                assert_eq!(input.password.as_deref(), Some("temp123"));
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_employee_draft_is_dropped_silently() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::AddEmployee);
        modal.employee.name = "Jane Doe".to_string();
        // email, role, password missing
        assert!(modal.build_submission(&[]).is_none());
    }

    #[test]
    fn test_add_task_fills_todays_deadline() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::AddTask);
        modal.task = TaskDraft {
            title: "Prepare client presentation".to_string(),
            priority: TaskPriority::High,
            deadline: String::new(),
            assignee: "Jane Doe".to_string(),
        };

        match modal.build_submission(&[]) {
            Some(ModalAction::CreateTask(input)) => {
                assert_eq!(input.status, TaskStatus::Open);
                assert_eq!(
                    input.deadline,
                    chrono::Local::now().format("%Y-%m-%d").to_string()
                );
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_add_lead_defaults_rep_and_leaves_pipeline_fields_to_server() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::AddLead);
        modal.lead = LeadDraft {
            client_name: "Acme".to_string(),
            value: "$45,000".to_string(),
            sales_rep: String::new(),
        };

        match modal.build_submission(&[]) {
            Some(ModalAction::CreateLead(input)) => {
                assert_eq!(input.value, 45000.0);
                assert_eq!(input.sales_rep, "Unassigned");
                assert_eq!(input.status, None::<LeadStatus>);
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_add_project_resolves_owner_by_name_else_first() {
        let employees = vec![employee("e1", "Jane Doe"), employee("e2", "Ravi")];

        let mut modal = ModalState::default();
        modal.open(ActionKind::AddProject);
        modal.project = ProjectDraft {
            name: "New mobile dashboard".to_string(),
            owner: "Ravi".to_string(),
            due_date: String::new(),
        };
        match modal.build_submission(&employees) {
            Some(ModalAction::CreateProject(input)) => {
                assert_eq!(input.owner_employee_id, "e2");
                assert_eq!(input.client_name, "Ravi");
                assert_eq!(input.status, ProjectStatus::Planned);
            }
            other => panic!("unexpected submission: {other:?}"),
        }

        // Unknown owner name falls back to the first employee.
        modal.project.owner = "Squad Alpha".to_string();
        match modal.build_submission(&employees) {
            Some(ModalAction::CreateProject(input)) => {
                assert_eq!(input.owner_employee_id, "e1");
                assert_eq!(input.client_name, "Squad Alpha");
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_drafts_survive_kind_switch_but_not_close() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::AddLead);
        modal.lead.client_name = "Acme".to_string();

        // Switching to another kind keeps the lead draft.
        modal.open(ActionKind::AddTask);
        assert_eq!(modal.lead.client_name, "Acme");

        modal.close();
        assert!(modal.active().is_none());
        assert!(modal.lead.client_name.is_empty());
    }

    #[test]
    fn test_approve_payroll_needs_no_fields() {
        let mut modal = ModalState::default();
        modal.open(ActionKind::ApprovePayroll);
        assert!(matches!(
            modal.build_submission(&[]),
            Some(ModalAction::ApproveAllPayroll)
        ));
    }

    #[test]
    fn test_no_active_modal_submits_nothing() {
        let modal = ModalState::default();
        assert!(modal.build_submission(&[]).is_none());
    }
}
