//! Role-gated navigation: which sections a role can open, and which screen
//! a (role, section) pair composes to.
//!
//! The active section always starts at Overview, moves only via sidebar
//! selection, and is never persisted across restarts. The sidebar offers a
//! few admin sections (tasks, leads, products) that the layout has no screen
//! for; those compose to `None`, matching the shipped behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Role;

/// Sidebar sections across all roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Overview,
    Employees,
    Payroll,
    AdminTasks,
    Leads,
    Products,
    Clients,
    Projects,
    DevTasks,
    DevPayroll,
    DevProjects,
}

/// Screens the layout can actually render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    AdminOverview,
    Employees,
    Payroll,
    Clients,
    Projects,
    SalesOverview,
    DevOverview,
    DevTasks,
    DevPayroll,
    DevProjects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("section {section:?} is not available to the {role:?} role")]
pub struct SectionNotAvailable {
    pub role: Role,
    pub section: Section,
}

/// The sections a role's sidebar offers.
pub fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Admin => &[
            Section::Overview,
            Section::Employees,
            Section::Payroll,
            Section::AdminTasks,
            Section::Leads,
            Section::Products,
            Section::Clients,
            Section::Projects,
        ],
        Role::Sales => &[Section::Overview],
        Role::Development => &[
            Section::Overview,
            Section::DevTasks,
            Section::DevPayroll,
            Section::DevProjects,
        ],
    }
}

/// Compose the screen for the current role and section. `None` means the
/// section is reachable from the sidebar but has nothing to render.
pub fn screen_for(role: Role, section: Section) -> Option<Screen> {
    match role {
        Role::Admin => match section {
            Section::Overview => Some(Screen::AdminOverview),
            Section::Employees => Some(Screen::Employees),
            Section::Payroll => Some(Screen::Payroll),
            Section::Clients => Some(Screen::Clients),
            Section::Projects => Some(Screen::Projects),
            // Offered in the sidebar, never wired to a screen.
            Section::AdminTasks | Section::Leads | Section::Products => None,
            _ => None,
        },
        // The sales workspace is a single dashboard regardless of section.
        Role::Sales => Some(Screen::SalesOverview),
        Role::Development => match section {
            Section::Overview => Some(Screen::DevOverview),
            Section::DevTasks => Some(Screen::DevTasks),
            Section::DevPayroll => Some(Screen::DevPayroll),
            Section::DevProjects => Some(Screen::DevProjects),
            _ => None,
        },
    }
}

/// Per-session navigation state.
#[derive(Debug)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self {
            active: Section::Overview,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Sidebar click. Sections outside the role's set are rejected.
    pub fn set_active(&mut self, role: Role, section: Section) -> Result<(), SectionNotAvailable> {
        if sections_for(role).contains(&section) {
            self.active = section;
            Ok(())
        } else {
            Err(SectionNotAvailable { role, section })
        }
    }

    /// Back to Overview on login, logout, or role change.
    pub fn reset(&mut self) {
        self.active = Section::Overview;
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}
