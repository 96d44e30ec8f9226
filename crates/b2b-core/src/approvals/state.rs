//! Approvals slice state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::PaginationState;
use crate::types::{Approval, ApprovalFilters, AsyncStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalsState {
    pub approvals: Vec<Approval>,
    pub selected_approval: Option<Approval>,
    /// Pending approvals across all pages, as reported by the server and
    /// adjusted locally after each decision.
    pub pending_count: u32,
    pub filters: ApprovalFilters,
    pub list_status: AsyncStatus,
    pub detail_status: AsyncStatus,
    pub decision_status: AsyncStatus,
    pub error: Option<String>,
    pub pagination: PaginationState,
}

impl Default for ApprovalsState {
    fn default() -> Self {
        initial_approvals_state()
    }
}

pub fn initial_approvals_state() -> ApprovalsState {
    ApprovalsState {
        approvals: Vec::new(),
        selected_approval: None,
        pending_count: 0,
        filters: ApprovalFilters::default(),
        list_status: AsyncStatus::Idle,
        detail_status: AsyncStatus::Idle,
        decision_status: AsyncStatus::Idle,
        error: None,
        pagination: PaginationState::default(),
    }
}
