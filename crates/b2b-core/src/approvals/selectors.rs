//! Approval selectors.

use std::sync::Arc;

use crate::approvals::state::ApprovalsState;
use crate::memo::{ParamMemo, ShallowMemo};
use crate::pagination::PaginationState;
use crate::types::{Approval, ApprovalStatus};
use crate::DEFAULT_SELECTOR_CACHE_SIZE;

pub fn select_approvals(state: &ApprovalsState) -> &[Approval] {
    &state.approvals
}

pub fn select_pending_count(state: &ApprovalsState) -> u32 {
    state.pending_count
}

pub fn select_selected_approval(state: &ApprovalsState) -> Option<&Approval> {
    state.selected_approval.as_ref()
}

pub fn select_approvals_pagination(state: &ApprovalsState) -> &PaginationState {
    &state.pagination
}

pub fn select_approvals_is_loading(state: &ApprovalsState) -> bool {
    state.list_status.is_loading()
        || state.detail_status.is_loading()
        || state.decision_status.is_loading()
}

fn find_approval(state: &ApprovalsState, approval_id: &String) -> Option<Approval> {
    state
        .approvals
        .iter()
        .chain(state.selected_approval.iter())
        .find(|approval| approval.id == *approval_id)
        .cloned()
}

#[derive(Debug)]
pub struct ApprovalSelectors {
    pending: ShallowMemo<ApprovalsState, Vec<Approval>>,
    by_id: ParamMemo<ApprovalsState, String, Option<Approval>>,
}

impl Default for ApprovalSelectors {
    fn default() -> Self {
        ApprovalSelectors::new(DEFAULT_SELECTOR_CACHE_SIZE)
    }
}

impl ApprovalSelectors {
    pub fn new(cache_size: usize) -> Self {
        ApprovalSelectors {
            pending: ShallowMemo::new(|state: &ApprovalsState| -> Vec<Approval> {
                state
                    .approvals
                    .iter()
                    .filter(|approval| approval.status == ApprovalStatus::Pending)
                    .cloned()
                    .collect()
            }),
            by_id: ParamMemo::new(cache_size, find_approval),
        }
    }

    /// Pending approvals on the current page.
    pub fn pending_approvals(&mut self, state: &Arc<ApprovalsState>) -> Arc<Vec<Approval>> {
        self.pending.select(state)
    }

    pub fn approval_by_id(&mut self, state: &Arc<ApprovalsState>, approval_id: &str) -> Arc<Option<Approval>> {
        self.by_id.select(state, &approval_id.to_string())
    }
}
