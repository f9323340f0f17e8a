//! Read models computed over a domain snapshot.
//!
//! Pure aggregation: the numbers each dashboard screen shows. Readers take
//! slices so nothing here can touch the store.

use serde::Serialize;

use crate::types::{Employee, EmployeeStatus, Lead, LeadStatus, Task, TaskStatus};

/// Headline figures for the admin overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub total_employees: usize,
    pub pending_payroll_count: usize,
    pub lead_count: usize,
    /// Revenue from leads already converted to clients.
    pub client_revenue: f64,
    pub open_tasks: usize,
    pub submitted_tasks: usize,
    pub approved_tasks: usize,
}

pub fn admin_overview(employees: &[Employee], tasks: &[Task], leads: &[Lead]) -> AdminOverview {
    AdminOverview {
        total_employees: employees.len(),
        pending_payroll_count: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Pending)
            .count(),
        lead_count: leads.len(),
        client_revenue: client_revenue(leads),
        open_tasks: count_tasks(tasks, TaskStatus::Open),
        submitted_tasks: count_tasks(tasks, TaskStatus::Submitted),
        approved_tasks: count_tasks(tasks, TaskStatus::Approved),
    }
}

/// Salary obligations and approval backlog for the payroll screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub total_monthly: f64,
    pub pending_amount: f64,
    pub pending_count: usize,
}

pub fn payroll_summary(employees: &[Employee]) -> PayrollSummary {
    let pending: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::Pending)
        .collect();
    PayrollSummary {
        total_monthly: employees.iter().map(|e| e.salary).sum(),
        pending_amount: pending.iter().map(|e| e.salary).sum(),
        pending_count: pending.len(),
    }
}

/// The clients screen: converted leads plus the conversion rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBook {
    pub clients: Vec<Lead>,
    pub total_leads: usize,
    /// Rounded percentage; `None` when there are no leads to divide by.
    pub conversion_rate_pct: Option<u32>,
}

pub fn client_book(leads: &[Lead]) -> ClientBook {
    let clients: Vec<Lead> = leads
        .iter()
        .filter(|l| l.status == LeadStatus::Client)
        .cloned()
        .collect();
    let conversion_rate_pct = if leads.is_empty() {
        None
    } else {
        Some(((clients.len() as f64 / leads.len() as f64) * 100.0).round() as u32)
    };
    ClientBook {
        total_leads: leads.len(),
        conversion_rate_pct,
        clients,
    }
}

/// Headline figures for the sales workspace.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub pipeline_revenue: f64,
    pub deals_closed: usize,
    pub lead_count: usize,
}

pub fn sales_overview(leads: &[Lead]) -> SalesOverview {
    SalesOverview {
        pipeline_revenue: client_revenue(leads),
        deals_closed: leads
            .iter()
            .filter(|l| l.status == LeadStatus::Client)
            .count(),
        lead_count: leads.len(),
    }
}

/// Tasks scoped to one member. Assignment is by display name, so a renamed
/// employee's old tasks simply stop matching.
pub fn tasks_for_member(tasks: &[Task], member_name: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.assigned_to == member_name)
        .cloned()
        .collect()
}

/// The payroll row for one member, matched by name or email.
pub fn payroll_for_member<'a>(
    employees: &'a [Employee],
    member_name: &str,
    member_email: &str,
) -> Option<&'a Employee> {
    employees
        .iter()
        .find(|e| e.name == member_name || e.email.as_deref() == Some(member_email))
}

fn client_revenue(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter(|l| l.status == LeadStatus::Client)
        .map(|l| l.value)
        .sum()
}

fn count_tasks(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeadTemperature, LeadValuePeriod, TaskPriority};

    fn employee(name: &str, salary: f64, status: EmployeeStatus) -> Employee {
        Employee {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: Some(format!("{}@vallunex.com", name.to_lowercase())),
            role: "Employee".to_string(),
            salary,
            status,
            password: None,
            product_ids: Vec::new(),
        }
    }

    fn lead(client: &str, value: f64, status: LeadStatus) -> Lead {
        Lead {
            id: client.to_lowercase(),
            client_name: client.to_string(),
            status,
            temperature: LeadTemperature::Cold,
            value,
            value_period: LeadValuePeriod::Monthly,
            sales_rep: "Jordan".to_string(),
            product_ids: Vec::new(),
        }
    }

    fn task(title: &str, assigned_to: &str, status: TaskStatus) -> Task {
        Task {
            id: title.to_lowercase(),
            title: title.to_string(),
            priority: TaskPriority::Medium,
            deadline: "2026-09-15".to_string(),
            assigned_to: assigned_to.to_string(),
            status,
            submission_link: None,
        }
    }

    #[test]
    fn test_payroll_summary_sums() {
        let employees = vec![
            employee("Jane", 5000.0, EmployeeStatus::Paid),
            employee("Ravi", 4000.0, EmployeeStatus::Pending),
            employee("Asha", 6000.0, EmployeeStatus::Pending),
        ];
        let summary = payroll_summary(&employees);
        assert_eq!(summary.total_monthly, 15000.0);
        assert_eq!(summary.pending_amount, 10000.0);
        assert_eq!(summary.pending_count, 2);
    }

    #[test]
    fn test_client_revenue_only_counts_converted() {
        let leads = vec![
            lead("Acme", 45000.0, LeadStatus::Client),
            lead("Globex", 30000.0, LeadStatus::Negotiation),
            lead("Initech", 5000.0, LeadStatus::Client),
        ];
        let overview = sales_overview(&leads);
        assert_eq!(overview.pipeline_revenue, 50000.0);
        assert_eq!(overview.deals_closed, 2);
        assert_eq!(overview.lead_count, 3);
    }

    #[test]
    fn test_client_book_conversion_rate() {
        let leads = vec![
            lead("Acme", 45000.0, LeadStatus::Client),
            lead("Globex", 30000.0, LeadStatus::New),
            lead("Initech", 5000.0, LeadStatus::New),
        ];
        let book = client_book(&leads);
        assert_eq!(book.clients.len(), 1);
        assert_eq!(book.total_leads, 3);
        assert_eq!(book.conversion_rate_pct, Some(33));

        assert_eq!(client_book(&[]).conversion_rate_pct, None);
    }

    #[test]
    fn test_admin_overview_task_counts() {
        let tasks = vec![
            task("A", "Jane", TaskStatus::Open),
            task("B", "Jane", TaskStatus::Submitted),
            task("C", "Ravi", TaskStatus::Approved),
            task("D", "Ravi", TaskStatus::Rejected),
        ];
        let overview = admin_overview(&[], &tasks, &[]);
        assert_eq!(overview.open_tasks, 1);
        assert_eq!(overview.submitted_tasks, 1);
        assert_eq!(overview.approved_tasks, 1);
    }

    #[test]
    fn test_member_views_match_by_display_name() {
        let tasks = vec![
            task("A", "Jane Doe", TaskStatus::Open),
            task("B", "Ravi", TaskStatus::Open),
        ];
        let mine = tasks_for_member(&tasks, "Jane Doe");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "A");

        // A rename orphans the old rows.
        assert!(tasks_for_member(&tasks, "Jane D.").is_empty());
    }

    #[test]
    fn test_payroll_for_member_falls_back_to_email() {
        let employees = vec![employee("Jane", 5000.0, EmployeeStatus::Paid)];
        assert!(payroll_for_member(&employees, "Jane", "other@x.com").is_some());
        assert!(payroll_for_member(&employees, "Unknown", "jane@vallunex.com").is_some());
        assert!(payroll_for_member(&employees, "Unknown", "nobody@x.com").is_none());
    }
}
