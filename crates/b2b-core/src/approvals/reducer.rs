//! Approvals reducer.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::approvals::actions::ApprovalsAction;
use crate::approvals::state::{initial_approvals_state, ApprovalsState};
use crate::pagination::create_pagination_state;
use crate::types::{Approval, ApprovalFilters, ApprovalStatus, AsyncStatus};

pub fn approvals_reducer(state: &Arc<ApprovalsState>, action: &ApprovalsAction) -> Arc<ApprovalsState> {
    match action {
        ApprovalsAction::FetchApprovalsStart => Arc::new(ApprovalsState {
            list_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        ApprovalsAction::FetchApprovalsSuccess {
            approvals,
            total,
            page,
            page_size,
            pending_count,
        } => Arc::new(ApprovalsState {
            approvals: approvals.clone(),
            pending_count: *pending_count,
            list_status: AsyncStatus::Succeeded,
            pagination: create_pagination_state(*page, *page_size, *total),
            ..(**state).clone()
        }),

        ApprovalsAction::FetchApprovalsFailure(message) => Arc::new(ApprovalsState {
            list_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        ApprovalsAction::FetchApprovalDetailStart => Arc::new(ApprovalsState {
            detail_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        ApprovalsAction::FetchApprovalDetailSuccess(approval) => Arc::new(ApprovalsState {
            selected_approval: Some(approval.clone()),
            detail_status: AsyncStatus::Succeeded,
            ..(**state).clone()
        }),

        ApprovalsAction::FetchApprovalDetailFailure(message) => Arc::new(ApprovalsState {
            detail_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        ApprovalsAction::DecisionStart => Arc::new(ApprovalsState {
            decision_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        ApprovalsAction::DecisionSuccess {
            approval_id,
            status,
            comment,
            decided_at,
        } => {
            let decision = Decision {
                status: *status,
                comment: comment.as_ref(),
                decided_at: *decided_at,
            };

            let previous = state
                .approvals
                .iter()
                .chain(state.selected_approval.iter())
                .find(|approval| approval.id == *approval_id)
                .map(|approval| approval.status);

            let left_pending = previous == Some(ApprovalStatus::Pending) && *status != ApprovalStatus::Pending;
            let pending_count = if left_pending {
                state.pending_count.saturating_sub(1)
            } else {
                state.pending_count
            };

            Arc::new(ApprovalsState {
                approvals: state
                    .approvals
                    .iter()
                    .map(|approval| decision.apply_if(approval, approval_id))
                    .collect(),
                selected_approval: state
                    .selected_approval
                    .as_ref()
                    .map(|approval| decision.apply_if(approval, approval_id)),
                pending_count,
                decision_status: AsyncStatus::Succeeded,
                ..(**state).clone()
            })
        }

        ApprovalsAction::DecisionFailure(message) => Arc::new(ApprovalsState {
            decision_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        ApprovalsAction::SetFilters(filters) => Arc::new(ApprovalsState {
            filters: filters.clone(),
            pagination: create_pagination_state(1, state.pagination.page_size, state.pagination.total_items),
            ..(**state).clone()
        }),

        ApprovalsAction::ClearFilters => Arc::new(ApprovalsState {
            filters: ApprovalFilters::default(),
            pagination: create_pagination_state(1, state.pagination.page_size, state.pagination.total_items),
            ..(**state).clone()
        }),

        ApprovalsAction::SetPage(page) => Arc::new(ApprovalsState {
            pagination: create_pagination_state(*page, state.pagination.page_size, state.pagination.total_items),
            ..(**state).clone()
        }),

        ApprovalsAction::ClearSelectedApproval => Arc::new(ApprovalsState {
            selected_approval: None,
            detail_status: AsyncStatus::Idle,
            ..(**state).clone()
        }),

        ApprovalsAction::ClearError if state.error.is_none() => Arc::clone(state),

        ApprovalsAction::ClearError => Arc::new(ApprovalsState {
            error: None,
            ..(**state).clone()
        }),

        ApprovalsAction::Reset => Arc::new(initial_approvals_state()),
    }
}

struct Decision<'a> {
    status: ApprovalStatus,
    comment: Option<&'a String>,
    decided_at: DateTime<Utc>,
}

impl Decision<'_> {
    fn apply_if(&self, approval: &Approval, approval_id: &str) -> Approval {
        if approval.id != approval_id {
            return approval.clone();
        }
        Approval {
            status: self.status,
            comment: self.comment.cloned(),
            decided_at: Some(self.decided_at),
            ..approval.clone()
        }
    }
}
