//! In-memory source of truth for the five server-owned collections.
//!
//! One `DomainStore` lives inside the managed app state. Readers get a
//! cloned [`DomainSnapshot`]; writers go through the command layer, which
//! performs exactly one network round trip and then one of the merge
//! operations below. Local state never changes before the awaited response,
//! so a failed request leaves the snapshot untouched rather than corrupted.

use serde::Serialize;

use crate::types::{
    Employee, EmployeeEcho, EmployeeStatus, Lead, LeadEcho, LeadStatus, Product, ProductEcho,
    Project, ProjectEcho, Task, TaskEcho,
};

#[derive(Debug, Default)]
pub struct DomainStore {
    pub employees: Vec<Employee>,
    pub tasks: Vec<Task>,
    pub leads: Vec<Lead>,
    pub projects: Vec<Project>,
    pub products: Vec<Product>,
}

/// Immutable copy handed to readers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSnapshot {
    pub employees: Vec<Employee>,
    pub tasks: Vec<Task>,
    pub leads: Vec<Lead>,
    pub projects: Vec<Project>,
    pub products: Vec<Product>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            employees: self.employees.clone(),
            tasks: self.tasks.clone(),
            leads: self.leads.clone(),
            projects: self.projects.clone(),
            products: self.products.clone(),
        }
    }

    /// Initial load: all five collections land together or not at all.
    pub fn replace_all(
        &mut self,
        employees: Vec<Employee>,
        tasks: Vec<Task>,
        leads: Vec<Lead>,
        projects: Vec<Project>,
        products: Vec<Product>,
    ) {
        self.employees = employees;
        self.tasks = tasks;
        self.leads = leads;
        self.projects = projects;
        self.products = products;
    }

    // ------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------

    pub fn push_employee(&mut self, created: Employee) {
        self.employees.push(created);
    }

    /// Merge an update echo over the record matching either the requested id
    /// or the id the server echoed back (they differ when the backend answers
    /// with `_id`). Fields the echo omits keep their current values. Returns
    /// the merged record.
    pub fn merge_employee(&mut self, requested_id: &str, echo: EmployeeEcho) -> Option<Employee> {
        let existing = self
            .employees
            .iter_mut()
            .find(|e| e.id == requested_id || Some(e.id.as_str()) == echo.id.as_deref())?;
        if let Some(id) = echo.id {
            existing.id = id;
        }
        if let Some(name) = echo.name {
            existing.name = name;
        }
        if let Some(email) = echo.email {
            existing.email = Some(email);
        }
        if let Some(role) = echo.role {
            existing.role = role;
        }
        if let Some(salary) = echo.salary {
            existing.salary = salary;
        }
        if let Some(status) = echo.status {
            existing.status = status;
        }
        if let Some(password) = echo.password {
            existing.password = Some(password);
        }
        if let Some(product_ids) = echo.product_ids {
            existing.product_ids = product_ids;
        }
        Some(existing.clone())
    }

    /// Payroll approval touches only the status field.
    pub fn set_employee_status(&mut self, id: &str, echoed_id: &str, status: EmployeeStatus) {
        if let Some(existing) = self
            .employees
            .iter_mut()
            .find(|e| e.id == id || e.id == echoed_id)
        {
            existing.status = status;
        }
    }

    /// Batch approval echoes the whole directory; take it wholesale.
    pub fn replace_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn remove_employee(&mut self, id: &str) {
        self.employees.retain(|e| e.id != id);
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    pub fn push_task(&mut self, created: Task) {
        self.tasks.push(created);
    }

    pub fn merge_task(&mut self, requested_id: &str, echo: TaskEcho) -> Option<Task> {
        let existing = self
            .tasks
            .iter_mut()
            .find(|t| t.id == requested_id || Some(t.id.as_str()) == echo.id.as_deref())?;
        if let Some(id) = echo.id {
            existing.id = id;
        }
        if let Some(title) = echo.title {
            existing.title = title;
        }
        if let Some(priority) = echo.priority {
            existing.priority = priority;
        }
        if let Some(deadline) = echo.deadline {
            existing.deadline = deadline;
        }
        if let Some(assigned_to) = echo.assigned_to {
            existing.assigned_to = assigned_to;
        }
        if let Some(status) = echo.status {
            existing.status = status;
        }
        if let Some(submission_link) = echo.submission_link {
            existing.submission_link = Some(submission_link);
        }
        Some(existing.clone())
    }

    pub fn remove_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    // ------------------------------------------------------------------
    // Leads
    // ------------------------------------------------------------------

    pub fn push_lead(&mut self, created: Lead) {
        self.leads.push(created);
    }

    pub fn merge_lead(&mut self, requested_id: &str, echo: LeadEcho) -> Option<Lead> {
        let existing = self
            .leads
            .iter_mut()
            .find(|l| l.id == requested_id || Some(l.id.as_str()) == echo.id.as_deref())?;
        if let Some(id) = echo.id {
            existing.id = id;
        }
        if let Some(client_name) = echo.client_name {
            existing.client_name = client_name;
        }
        if let Some(status) = echo.status {
            existing.status = status;
        }
        if let Some(temperature) = echo.temperature {
            existing.temperature = temperature;
        }
        if let Some(value) = echo.value {
            existing.value = value;
        }
        if let Some(value_period) = echo.value_period {
            existing.value_period = value_period;
        }
        if let Some(sales_rep) = echo.sales_rep {
            existing.sales_rep = sales_rep;
        }
        if let Some(product_ids) = echo.product_ids {
            existing.product_ids = product_ids;
        }
        Some(existing.clone())
    }

    /// Conversion touches only the status field, mirroring the approval path.
    pub fn set_lead_status(&mut self, id: &str, echoed_id: &str, status: LeadStatus) {
        if let Some(existing) = self
            .leads
            .iter_mut()
            .find(|l| l.id == id || l.id == echoed_id)
        {
            existing.status = status;
        }
    }

    pub fn remove_lead(&mut self, id: &str) {
        self.leads.retain(|l| l.id != id);
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub fn push_project(&mut self, created: Project) {
        self.projects.push(created);
    }

    pub fn merge_project(&mut self, requested_id: &str, echo: ProjectEcho) -> Option<Project> {
        let existing = self
            .projects
            .iter_mut()
            .find(|p| p.id == requested_id || Some(p.id.as_str()) == echo.id.as_deref())?;
        if let Some(id) = echo.id {
            existing.id = id;
        }
        if let Some(name) = echo.name {
            existing.name = name;
        }
        if let Some(client_name) = echo.client_name {
            existing.client_name = client_name;
        }
        if let Some(status) = echo.status {
            existing.status = status;
        }
        if let Some(budget) = echo.budget {
            existing.budget = Some(budget);
        }
        if let Some(owner_employee_id) = echo.owner_employee_id {
            existing.owner_employee_id = owner_employee_id;
        }
        if let Some(owner_employee_name) = echo.owner_employee_name {
            existing.owner_employee_name = owner_employee_name;
        }
        Some(existing.clone())
    }

    pub fn remove_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub fn push_product(&mut self, created: Product) {
        self.products.push(created);
    }

    pub fn merge_product(&mut self, requested_id: &str, echo: ProductEcho) -> Option<Product> {
        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == requested_id || Some(p.id.as_str()) == echo.id.as_deref())?;
        if let Some(id) = echo.id {
            existing.id = id;
        }
        if let Some(name) = echo.name {
            existing.name = name;
        }
        if let Some(tech_stack) = echo.tech_stack {
            existing.tech_stack = tech_stack;
        }
        if let Some(revenue) = echo.revenue {
            existing.revenue = revenue;
        }
        Some(existing.clone())
    }

    /// Remove a product and scrub its id from every lead's and employee's
    /// product list in the same state update. There is no separate cleanup
    /// pass; a snapshot taken after this call never sees a dangling id.
    pub fn remove_product(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
        for lead in &mut self.leads {
            lead.product_ids.retain(|pid| pid != id);
        }
        for employee in &mut self.employees {
            employee.product_ids.retain(|pid| pid != id);
        }
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeadTemperature, LeadValuePeriod, TaskPriority, TaskStatus};

    fn employee(id: &str, name: &str, product_ids: &[&str]) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            role: "Employee".to_string(),
            salary: 4000.0,
            status: EmployeeStatus::Pending,
            password: None,
            product_ids: product_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn lead(id: &str, client: &str, product_ids: &[&str]) -> Lead {
        Lead {
            id: id.to_string(),
            client_name: client.to_string(),
            status: LeadStatus::New,
            temperature: LeadTemperature::Cold,
            value: 1000.0,
            value_period: LeadValuePeriod::Monthly,
            sales_rep: "Jordan".to_string(),
            product_ids: product_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            tech_stack: "Rust".to_string(),
            revenue: 0.0,
        }
    }

    #[test]
    fn test_merge_matches_echoed_id_when_ids_differ() {
        let mut store = DomainStore::new();
        store.push_employee(employee("local-1", "Jane", &[]));

        // Server answered with its canonical `_id`-derived id.
        let echo: EmployeeEcho =
            serde_json::from_str(r#"{"_id":"srv-9","name":"Jane Doe","salary":5200}"#).unwrap();
        let merged = store.merge_employee("local-1", echo).unwrap();

        assert_eq!(store.employees.len(), 1);
        assert_eq!(merged.id, "srv-9");
        assert_eq!(merged.name, "Jane Doe");
        assert_eq!(merged.salary, 5200.0);
    }

    #[test]
    fn test_update_echo_keeps_fields_it_omits() {
        let mut store = DomainStore::new();
        let mut hot = lead("l1", "Acme", &["p1"]);
        hot.temperature = LeadTemperature::Hot;
        store.push_lead(hot);

        // The PATCH echo carries only what changed.
        let echo: LeadEcho =
            serde_json::from_str(r#"{"id":"l1","value":50000,"status":"Negotiation"}"#).unwrap();
        store.merge_lead("l1", echo).unwrap();

        let l = &store.leads[0];
        assert_eq!(l.value, 50000.0);
        assert_eq!(l.status, LeadStatus::Negotiation);
        assert_eq!(l.temperature, LeadTemperature::Hot);
        assert_eq!(l.product_ids, vec!["p1".to_string()]);
        assert_eq!(l.sales_rep, "Jordan");

        let mut emp = employee("e1", "Ravi", &["p2"]);
        emp.email = Some("ravi@vallunex.com".to_string());
        emp.password = Some("temp123".to_string());
        store.push_employee(emp);

        let echo: EmployeeEcho = serde_json::from_str(r#"{"id":"e1","role":"Lead"}"#).unwrap();
        store.merge_employee("e1", echo).unwrap();

        let e = &store.employees[0];
        assert_eq!(e.role, "Lead");
        assert_eq!(e.email.as_deref(), Some("ravi@vallunex.com"));
        assert_eq!(e.password.as_deref(), Some("temp123"));
        assert_eq!(e.product_ids, vec!["p2".to_string()]);
    }

    #[test]
    fn test_merge_unknown_id_changes_nothing() {
        let mut store = DomainStore::new();
        store.push_lead(lead("l1", "Acme", &[]));

        let echo: LeadEcho = serde_json::from_str(r#"{"id":"l9","value":1}"#).unwrap();
        assert!(store.merge_lead("l9", echo).is_none());
        assert_eq!(store.leads[0].value, 1000.0);
    }

    #[test]
    fn test_set_employee_status_touches_nothing_else() {
        let mut store = DomainStore::new();
        store.push_employee(employee("e1", "Ravi", &["p1"]));

        store.set_employee_status("e1", "e1", EmployeeStatus::Paid);

        let emp = &store.employees[0];
        assert_eq!(emp.status, EmployeeStatus::Paid);
        assert_eq!(emp.name, "Ravi");
        assert_eq!(emp.salary, 4000.0);
        assert_eq!(emp.product_ids, vec!["p1".to_string()]);
    }

    #[test]
    fn test_remove_product_scrubs_all_references() {
        let mut store = DomainStore::new();
        store.push_product(product("p1", "Analytics"));
        store.push_product(product("p2", "CRM"));
        store.push_employee(employee("e1", "Jane", &["p1", "p2"]));
        store.push_lead(lead("l1", "Acme", &["p1"]));
        store.push_lead(lead("l2", "Globex", &["p2"]));

        store.remove_product("p1");

        assert_eq!(store.products.len(), 1);
        assert_eq!(store.employees[0].product_ids, vec!["p2".to_string()]);
        assert!(store.leads[0].product_ids.is_empty());
        assert_eq!(store.leads[1].product_ids, vec!["p2".to_string()]);
    }

    #[test]
    fn test_set_lead_status_only_flips_status() {
        let mut store = DomainStore::new();
        store.push_lead(lead("l1", "Acme", &["p1"]));

        store.set_lead_status("l1", "l1", LeadStatus::Client);

        let l = &store.leads[0];
        assert_eq!(l.status, LeadStatus::Client);
        assert_eq!(l.client_name, "Acme");
        assert_eq!(l.product_ids, vec!["p1".to_string()]);
    }

    #[test]
    fn test_merge_task_applies_echoed_fields_in_place() {
        let mut store = DomainStore::new();
        store.push_task(Task {
            id: "t1".to_string(),
            title: "Ship report".to_string(),
            priority: TaskPriority::Medium,
            deadline: "2026-09-01".to_string(),
            assigned_to: "Jane Doe".to_string(),
            status: TaskStatus::Open,
            submission_link: None,
        });

        let echo: TaskEcho = serde_json::from_str(
            r#"{"id":"t1","status":"Submitted","submissionLink":"https://repo/pr/1"}"#,
        )
        .unwrap();
        store.merge_task("t1", echo).unwrap();

        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].status, TaskStatus::Submitted);
        assert_eq!(store.tasks[0].title, "Ship report");
        assert_eq!(
            store.tasks[0].submission_link.as_deref(),
            Some("https://repo/pr/1")
        );
    }

    #[test]
    fn test_remove_is_by_id_only() {
        let mut store = DomainStore::new();
        store.push_employee(employee("e1", "Jane", &[]));
        store.push_employee(employee("e2", "Ravi", &[]));

        store.remove_employee("e1");

        assert_eq!(store.employees.len(), 1);
        assert_eq!(store.employees[0].id, "e2");
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut store = DomainStore::new();
        store.push_product(product("p1", "Analytics"));

        let snap = store.snapshot();
        store.remove_product("p1");

        assert_eq!(snap.products.len(), 1);
        assert!(store.products.is_empty());
    }
}
