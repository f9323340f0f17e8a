//! Status transition tables for the three forward-only chains.
//!
//! The backend accepts any PATCH and sets whatever status it's handed; these
//! tables are the client-side guard that rejects out-of-order edges before a
//! request is ever issued. Task review is strict (no self-edges); the payroll
//! and pipeline chains allow repeating the current state so that batch
//! approval and double conversion stay idempotent.

use thiserror::Error;

use crate::types::{EmployeeStatus, LeadStatus, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("task cannot move from {from:?} to {to:?}")]
    Task { from: TaskStatus, to: TaskStatus },

    #[error("lead cannot move from {from:?} back to {to:?}")]
    Lead { from: LeadStatus, to: LeadStatus },

    #[error("payroll status cannot move from {from:?} to {to:?}")]
    Payroll {
        from: EmployeeStatus,
        to: EmployeeStatus,
    },
}

/// Open → Submitted → {Approved, Rejected}. Everything else is rejected,
/// including re-submitting or re-reviewing.
pub fn check_task(from: TaskStatus, to: TaskStatus) -> Result<(), TransitionError> {
    let ok = matches!(
        (from, to),
        (TaskStatus::Open, TaskStatus::Submitted)
            | (TaskStatus::Submitted, TaskStatus::Approved)
            | (TaskStatus::Submitted, TaskStatus::Rejected)
    );
    if ok {
        Ok(())
    } else {
        Err(TransitionError::Task { from, to })
    }
}

fn lead_rank(status: LeadStatus) -> u8 {
    match status {
        LeadStatus::New => 0,
        LeadStatus::InReview => 1,
        LeadStatus::Negotiation => 2,
        LeadStatus::Client => 3,
    }
}

/// New → In Review → Negotiation → Client, forward-only. Staying in place is
/// allowed, which makes converting an already-converted lead a no-op edge.
pub fn check_lead(from: LeadStatus, to: LeadStatus) -> Result<(), TransitionError> {
    if lead_rank(to) >= lead_rank(from) {
        Ok(())
    } else {
        Err(TransitionError::Lead { from, to })
    }
}

/// Pending → Paid, one way. Approving an already-paid employee is a no-op.
pub fn check_payroll(from: EmployeeStatus, to: EmployeeStatus) -> Result<(), TransitionError> {
    match (from, to) {
        (EmployeeStatus::Paid, EmployeeStatus::Pending) => {
            Err(TransitionError::Payroll { from, to })
        }
        _ => Ok(()),
    }
}
