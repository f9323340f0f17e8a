pub mod api;
mod commands;
pub mod error;
pub mod modal;
pub mod queries;
pub mod router;
pub mod session;
pub mod state;
pub mod store;
pub mod transitions;
pub mod types;

use std::sync::Arc;

use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            let state = Arc::new(AppState::new());
            app.manage(state.clone());

            // A restored session loads its data before the window asks for it.
            // Without one the load runs after login instead.
            let has_session = state
                .session
                .lock()
                .map(|session| session.is_some())
                .unwrap_or(false);
            if has_session {
                let load_state = state.clone();
                tauri::async_runtime::spawn(async move {
                    state::load_all(&load_state).await;
                });
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Session
            commands::login,
            commands::logout,
            commands::get_session,
            commands::get_theme,
            commands::toggle_theme,
            // Data loading
            commands::load_data,
            commands::get_snapshot,
            commands::is_loading,
            // Employees & payroll
            commands::add_employee,
            commands::update_employee,
            commands::set_employee_salary,
            commands::delete_employee,
            commands::approve_employee,
            commands::approve_all_payroll,
            // Tasks
            commands::add_task,
            commands::update_task,
            commands::delete_task,
            commands::submit_task,
            commands::approve_task,
            commands::reject_task,
            // Leads & clients
            commands::add_lead,
            commands::update_lead,
            commands::delete_lead,
            commands::convert_lead_to_client,
            // Projects
            commands::add_project,
            commands::update_project,
            commands::delete_project,
            // Products
            commands::add_product,
            commands::update_product,
            commands::delete_product,
            // Navigation
            commands::get_sections,
            commands::get_active_section,
            commands::set_active_section,
            commands::get_screen,
            // Action modal
            commands::open_action_modal,
            commands::close_action_modal,
            commands::get_active_modal,
            commands::update_modal_draft,
            commands::submit_action_modal,
            // Read models
            commands::get_admin_overview,
            commands::get_payroll_summary,
            commands::get_client_book,
            commands::get_sales_overview,
            commands::get_my_tasks,
            commands::get_my_payroll,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
