//! Tauri command surface.
//!
//! Every mutation follows the same shape: read what the guard needs under a
//! short lock, issue exactly one request, then merge the echoed record. No
//! lock is ever held across an await, and local state never changes before
//! the response lands.

use std::sync::{Arc, Mutex, MutexGuard};

use tauri::State;

use crate::api;
use crate::modal::{ActionKind, DraftUpdate, ModalAction};
use crate::queries::{self, AdminOverview, ClientBook, PayrollSummary, SalesOverview};
use crate::router::{self, Screen, Section};
use crate::session;
use crate::state::{self, AppState};
use crate::store::DomainSnapshot;
use crate::transitions;
use crate::types::{
    Employee, EmployeeChanges, EmployeeStatus, Identity, Lead, LeadChanges, LeadStatus,
    NewEmployee, NewLead, NewProduct, NewProject, NewTask, Product, ProductChanges, Project,
    ProjectChanges, Task, TaskChanges, TaskStatus, ThemeMode,
};

fn lock<'a, T>(mutex: &'a Mutex<T>) -> Result<MutexGuard<'a, T>, String> {
    mutex.lock().map_err(|_| "Lock poisoned".to_string())
}

/// The role of the current session, for role-gated navigation.
fn current_identity(state: &AppState) -> Result<Identity, String> {
    lock(&state.session)?
        .clone()
        .ok_or_else(|| "Not signed in".to_string())
}

// ============================================================================
// Session
// ============================================================================

#[tauri::command]
pub async fn login(
    state: State<'_, Arc<AppState>>,
    email: String,
    password: String,
) -> Result<Identity, String> {
    let identity = api::auth::login(&state.api, &email, &password)
        .await
        .map_err(|e| e.user_message())?;

    state.api.set_token(Some(identity.token.clone()));
    if let Ok(dir) = session::session_dir() {
        if let Err(e) = session::save_identity(&dir, &identity) {
            log::warn!("Could not persist session: {e}");
        }
    }

    *lock(&state.session)? = Some(identity.clone());
    lock(&state.router)?.reset();
    Ok(identity)
}

#[tauri::command]
pub fn logout(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    if let Ok(dir) = session::session_dir() {
        session::clear_identity(&dir);
    }
    state.api.set_token(None);
    *lock(&state.session)? = None;
    lock(&state.router)?.reset();
    lock(&state.modal)?.close();

    // The next login starts from a fresh load.
    *lock(&state.store)? = Default::default();
    *lock(&state.loading)? = true;
    Ok(())
}

#[tauri::command]
pub fn get_session(state: State<'_, Arc<AppState>>) -> Result<Option<Identity>, String> {
    Ok(lock(&state.session)?.clone())
}

#[tauri::command]
pub fn get_theme(state: State<'_, Arc<AppState>>) -> Result<ThemeMode, String> {
    Ok(*lock(&state.theme)?)
}

#[tauri::command]
pub fn toggle_theme(state: State<'_, Arc<AppState>>) -> Result<ThemeMode, String> {
    let mut theme = lock(&state.theme)?;
    *theme = theme.toggled();
    if let Ok(dir) = session::session_dir() {
        if let Err(e) = session::save_theme(&dir, *theme) {
            log::warn!("Could not persist theme: {e}");
        }
    }
    Ok(*theme)
}

// ============================================================================
// Data loading
// ============================================================================

/// Fetch all five collections in parallel and return the resulting snapshot.
/// A failed load is not an error to the caller: it logs, leaves the snapshot
/// empty and drops the loading flag.
#[tauri::command]
pub async fn load_data(state: State<'_, Arc<AppState>>) -> Result<DomainSnapshot, String> {
    state::load_all(&state).await;
    get_snapshot(state)
}

#[tauri::command]
pub fn get_snapshot(state: State<'_, Arc<AppState>>) -> Result<DomainSnapshot, String> {
    Ok(lock(&state.store)?.snapshot())
}

#[tauri::command]
pub fn is_loading(state: State<'_, Arc<AppState>>) -> Result<bool, String> {
    Ok(*lock(&state.loading)?)
}

// ============================================================================
// Employees
// ============================================================================

#[tauri::command]
pub async fn add_employee(
    state: State<'_, Arc<AppState>>,
    input: NewEmployee,
) -> Result<Employee, String> {
    let created = api::employees::create(&state.api, &input)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.push_employee(created.clone());
    Ok(created)
}

#[tauri::command]
pub async fn update_employee(
    state: State<'_, Arc<AppState>>,
    id: String,
    changes: EmployeeChanges,
) -> Result<Employee, String> {
    if let Some(to) = changes.status {
        let from = employee_status(&state, &id)?;
        transitions::check_payroll(from, to).map_err(|e| e.to_string())?;
    }
    let echo = api::employees::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_employee(&id, echo)
        .ok_or_else(|| format!("Employee not found: {id}"))
}

/// Salary edit from the payroll screen. The raw field value arrives as text;
/// anything that doesn't parse to a non-negative number is rejected with the
/// screen's one validation message.
#[tauri::command]
pub async fn set_employee_salary(
    state: State<'_, Arc<AppState>>,
    id: String,
    salary: String,
) -> Result<Employee, String> {
    let changes = EmployeeChanges {
        salary: Some(parse_salary(&salary)?),
        ..Default::default()
    };
    let echo = api::employees::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_employee(&id, echo)
        .ok_or_else(|| format!("Employee not found: {id}"))
}

/// An empty field counts as zero, like the form's lax numeric coercion;
/// anything else must parse to a non-negative number.
fn parse_salary(text: &str) -> Result<f64, String> {
    const MESSAGE: &str = "Enter a valid monthly salary amount.";
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let parsed: f64 = trimmed.parse().map_err(|_| MESSAGE.to_string())?;
    if parsed.is_nan() || parsed < 0.0 {
        return Err(MESSAGE.to_string());
    }
    Ok(parsed)
}

#[tauri::command]
pub async fn delete_employee(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    api::employees::delete(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.remove_employee(&id);
    Ok(())
}

#[tauri::command]
pub async fn approve_employee(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    let from = employee_status(&state, &id)?;
    transitions::check_payroll(from, EmployeeStatus::Paid).map_err(|e| e.to_string())?;

    let echo = api::employees::approve(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    // Only the status flips locally; the rest of the row stays as loaded.
    let echoed_id = echo.id.unwrap_or_default();
    lock(&state.store)?.set_employee_status(&id, &echoed_id, EmployeeStatus::Paid);
    Ok(())
}

#[tauri::command]
pub async fn approve_all_payroll(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let employees = api::employees::approve_all(&state.api)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.replace_employees(employees);
    Ok(())
}

fn employee_status(state: &AppState, id: &str) -> Result<EmployeeStatus, String> {
    lock(&state.store)?
        .find_employee(id)
        .map(|e| e.status)
        .ok_or_else(|| format!("Employee not found: {id}"))
}

// ============================================================================
// Tasks
// ============================================================================

#[tauri::command]
pub async fn add_task(state: State<'_, Arc<AppState>>, input: NewTask) -> Result<Task, String> {
    let created = api::tasks::create(&state.api, &input)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.push_task(created.clone());
    Ok(created)
}

#[tauri::command]
pub async fn update_task(
    state: State<'_, Arc<AppState>>,
    id: String,
    changes: TaskChanges,
) -> Result<Task, String> {
    if let Some(to) = changes.status {
        let from = task_status(&state, &id)?;
        transitions::check_task(from, to).map_err(|e| e.to_string())?;
    }
    let echo = api::tasks::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_task(&id, echo)
        .ok_or_else(|| format!("Task not found: {id}"))
}

#[tauri::command]
pub async fn delete_task(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    api::tasks::delete(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.remove_task(&id);
    Ok(())
}

#[tauri::command]
pub async fn submit_task(
    state: State<'_, Arc<AppState>>,
    id: String,
    submission_link: String,
) -> Result<Task, String> {
    let from = task_status(&state, &id)?;
    transitions::check_task(from, TaskStatus::Submitted).map_err(|e| e.to_string())?;

    let echo = api::tasks::submit(&state.api, &id, &submission_link)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_task(&id, echo)
        .ok_or_else(|| format!("Task not found: {id}"))
}

#[tauri::command]
pub async fn approve_task(state: State<'_, Arc<AppState>>, id: String) -> Result<Task, String> {
    review_task(&state, &id, TaskStatus::Approved).await
}

#[tauri::command]
pub async fn reject_task(state: State<'_, Arc<AppState>>, id: String) -> Result<Task, String> {
    review_task(&state, &id, TaskStatus::Rejected).await
}

async fn review_task(state: &AppState, id: &str, verdict: TaskStatus) -> Result<Task, String> {
    let from = task_status(state, id)?;
    transitions::check_task(from, verdict).map_err(|e| e.to_string())?;

    let echo = match verdict {
        TaskStatus::Approved => api::tasks::approve(&state.api, id).await,
        _ => api::tasks::reject(&state.api, id).await,
    }
    .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_task(id, echo)
        .ok_or_else(|| format!("Task not found: {id}"))
}

fn task_status(state: &AppState, id: &str) -> Result<TaskStatus, String> {
    lock(&state.store)?
        .find_task(id)
        .map(|t| t.status)
        .ok_or_else(|| format!("Task not found: {id}"))
}

// ============================================================================
// Leads
// ============================================================================

#[tauri::command]
pub async fn add_lead(state: State<'_, Arc<AppState>>, input: NewLead) -> Result<Lead, String> {
    let created = api::leads::create(&state.api, &input)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.push_lead(created.clone());
    Ok(created)
}

#[tauri::command]
pub async fn update_lead(
    state: State<'_, Arc<AppState>>,
    id: String,
    changes: LeadChanges,
) -> Result<Lead, String> {
    if let Some(to) = changes.status {
        let from = lead_status(&state, &id)?;
        transitions::check_lead(from, to).map_err(|e| e.to_string())?;
    }
    let echo = api::leads::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_lead(&id, echo)
        .ok_or_else(|| format!("Lead not found: {id}"))
}

#[tauri::command]
pub async fn delete_lead(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    api::leads::delete(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.remove_lead(&id);
    Ok(())
}

#[tauri::command]
pub async fn convert_lead_to_client(
    state: State<'_, Arc<AppState>>,
    id: String,
) -> Result<(), String> {
    let from = lead_status(&state, &id)?;
    transitions::check_lead(from, LeadStatus::Client).map_err(|e| e.to_string())?;

    let echo = api::leads::convert(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    let echoed_id = echo.id.unwrap_or_default();
    lock(&state.store)?.set_lead_status(&id, &echoed_id, LeadStatus::Client);
    Ok(())
}

fn lead_status(state: &AppState, id: &str) -> Result<LeadStatus, String> {
    lock(&state.store)?
        .find_lead(id)
        .map(|l| l.status)
        .ok_or_else(|| format!("Lead not found: {id}"))
}

// ============================================================================
// Projects
// ============================================================================

#[tauri::command]
pub async fn add_project(
    state: State<'_, Arc<AppState>>,
    input: NewProject,
) -> Result<Project, String> {
    let created = api::projects::create(&state.api, &input)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.push_project(created.clone());
    Ok(created)
}

#[tauri::command]
pub async fn update_project(
    state: State<'_, Arc<AppState>>,
    id: String,
    changes: ProjectChanges,
) -> Result<Project, String> {
    let echo = api::projects::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_project(&id, echo)
        .ok_or_else(|| format!("Project not found: {id}"))
}

#[tauri::command]
pub async fn delete_project(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    api::projects::delete(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.remove_project(&id);
    Ok(())
}

// ============================================================================
// Products
// ============================================================================

#[tauri::command]
pub async fn add_product(
    state: State<'_, Arc<AppState>>,
    input: NewProduct,
) -> Result<Product, String> {
    let created = api::products::create(&state.api, &input)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.push_product(created.clone());
    Ok(created)
}

#[tauri::command]
pub async fn update_product(
    state: State<'_, Arc<AppState>>,
    id: String,
    changes: ProductChanges,
) -> Result<Product, String> {
    let echo = api::products::update(&state.api, &id, &changes)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?
        .merge_product(&id, echo)
        .ok_or_else(|| format!("Product not found: {id}"))
}

/// Delete a product and scrub its id from every lead and employee in the
/// same store update.
#[tauri::command]
pub async fn delete_product(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
    api::products::delete(&state.api, &id)
        .await
        .map_err(|e| e.to_string())?;
    lock(&state.store)?.remove_product(&id);
    Ok(())
}

// ============================================================================
// Navigation
// ============================================================================

#[tauri::command]
pub fn get_sections(state: State<'_, Arc<AppState>>) -> Result<Vec<Section>, String> {
    let identity = current_identity(&state)?;
    Ok(router::sections_for(identity.role).to_vec())
}

#[tauri::command]
pub fn get_active_section(state: State<'_, Arc<AppState>>) -> Result<Section, String> {
    Ok(lock(&state.router)?.active())
}

#[tauri::command]
pub fn set_active_section(
    state: State<'_, Arc<AppState>>,
    section: Section,
) -> Result<(), String> {
    let identity = current_identity(&state)?;
    lock(&state.router)?
        .set_active(identity.role, section)
        .map_err(|e| e.to_string())
}

/// The screen the layout should render for the current role and section.
/// `None` for the sidebar entries that have no screen wired up.
#[tauri::command]
pub fn get_screen(state: State<'_, Arc<AppState>>) -> Result<Option<Screen>, String> {
    let identity = current_identity(&state)?;
    let section = lock(&state.router)?.active();
    Ok(router::screen_for(identity.role, section))
}

// ============================================================================
// Action modal
// ============================================================================

#[tauri::command]
pub fn open_action_modal(state: State<'_, Arc<AppState>>, kind: ActionKind) -> Result<(), String> {
    lock(&state.modal)?.open(kind);
    Ok(())
}

#[tauri::command]
pub fn close_action_modal(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    lock(&state.modal)?.close();
    Ok(())
}

#[tauri::command]
pub fn get_active_modal(state: State<'_, Arc<AppState>>) -> Result<Option<ActionKind>, String> {
    Ok(lock(&state.modal)?.active())
}

#[tauri::command]
pub fn update_modal_draft(
    state: State<'_, Arc<AppState>>,
    update: DraftUpdate,
) -> Result<(), String> {
    lock(&state.modal)?.apply_draft(update);
    Ok(())
}

/// Submit the open modal. The modal closes first either way; an invalid
/// draft is dropped without an error, matching the form's behavior.
#[tauri::command]
pub async fn submit_action_modal(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let action = {
        let employees = lock(&state.store)?.employees.clone();
        let mut modal = lock(&state.modal)?;
        let action = modal.build_submission(&employees);
        modal.close();
        action
    };

    let Some(action) = action else {
        return Ok(());
    };

    match action {
        ModalAction::CreateEmployee(input) => {
            let created = api::employees::create(&state.api, &input)
                .await
                .map_err(|e| e.to_string())?;
            lock(&state.store)?.push_employee(created);
        }
        ModalAction::CreateTask(input) => {
            let created = api::tasks::create(&state.api, &input)
                .await
                .map_err(|e| e.to_string())?;
            lock(&state.store)?.push_task(created);
        }
        ModalAction::ApproveAllPayroll => {
            let employees = api::employees::approve_all(&state.api)
                .await
                .map_err(|e| e.to_string())?;
            lock(&state.store)?.replace_employees(employees);
        }
        ModalAction::CreateLead(input) => {
            let created = api::leads::create(&state.api, &input)
                .await
                .map_err(|e| e.to_string())?;
            lock(&state.store)?.push_lead(created);
        }
        ModalAction::CreateProject(input) => {
            let created = api::projects::create(&state.api, &input)
                .await
                .map_err(|e| e.to_string())?;
            lock(&state.store)?.push_project(created);
        }
    }
    Ok(())
}

// ============================================================================
// Read models
// ============================================================================

#[tauri::command]
pub fn get_admin_overview(state: State<'_, Arc<AppState>>) -> Result<AdminOverview, String> {
    let store = lock(&state.store)?;
    Ok(queries::admin_overview(
        &store.employees,
        &store.tasks,
        &store.leads,
    ))
}

#[tauri::command]
pub fn get_payroll_summary(state: State<'_, Arc<AppState>>) -> Result<PayrollSummary, String> {
    let store = lock(&state.store)?;
    Ok(queries::payroll_summary(&store.employees))
}

#[tauri::command]
pub fn get_client_book(state: State<'_, Arc<AppState>>) -> Result<ClientBook, String> {
    let store = lock(&state.store)?;
    Ok(queries::client_book(&store.leads))
}

#[tauri::command]
pub fn get_sales_overview(state: State<'_, Arc<AppState>>) -> Result<SalesOverview, String> {
    let store = lock(&state.store)?;
    Ok(queries::sales_overview(&store.leads))
}

/// Tasks assigned to the signed-in member, matched by display name.
#[tauri::command]
pub fn get_my_tasks(state: State<'_, Arc<AppState>>) -> Result<Vec<Task>, String> {
    let identity = current_identity(&state)?;
    let store = lock(&state.store)?;
    Ok(queries::tasks_for_member(&store.tasks, &identity.name))
}

/// The signed-in member's payroll row, matched by name or email.
#[tauri::command]
pub fn get_my_payroll(state: State<'_, Arc<AppState>>) -> Result<Option<Employee>, String> {
    let identity = current_identity(&state)?;
    let store = lock(&state.store)?;
    Ok(queries::payroll_for_member(&store.employees, &identity.name, &identity.email).cloned())
}
