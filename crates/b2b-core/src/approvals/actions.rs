//! Approvals actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Approval, ApprovalFilters, ApprovalStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ApprovalsAction {
    #[serde(rename = "approvals/fetchApprovalsStart")]
    FetchApprovalsStart,

    #[serde(rename = "approvals/fetchApprovalsSuccess", rename_all = "camelCase")]
    FetchApprovalsSuccess {
        approvals: Vec<Approval>,
        total: u64,
        page: u32,
        page_size: u32,
        pending_count: u32,
    },

    #[serde(rename = "approvals/fetchApprovalsFailure")]
    FetchApprovalsFailure(String),

    #[serde(rename = "approvals/fetchApprovalDetailStart")]
    FetchApprovalDetailStart,

    #[serde(rename = "approvals/fetchApprovalDetailSuccess")]
    FetchApprovalDetailSuccess(Approval),

    #[serde(rename = "approvals/fetchApprovalDetailFailure")]
    FetchApprovalDetailFailure(String),

    #[serde(rename = "approvals/decisionStart")]
    DecisionStart,

    /// The server accepted an approve/reject/escalate decision.
    #[serde(rename = "approvals/decisionSuccess", rename_all = "camelCase")]
    DecisionSuccess {
        approval_id: String,
        status: ApprovalStatus,
        comment: Option<String>,
        decided_at: DateTime<Utc>,
    },

    #[serde(rename = "approvals/decisionFailure")]
    DecisionFailure(String),

    /// Replace the filters and go back to the first page.
    #[serde(rename = "approvals/setFilters")]
    SetFilters(ApprovalFilters),

    #[serde(rename = "approvals/clearFilters")]
    ClearFilters,

    #[serde(rename = "approvals/setPage")]
    SetPage(u32),

    #[serde(rename = "approvals/clearSelectedApproval")]
    ClearSelectedApproval,

    #[serde(rename = "approvals/clearError")]
    ClearError,

    #[serde(rename = "approvals/reset")]
    Reset,
}

impl ApprovalsAction {
    /// Every `type` this slice accepts.
    pub const TYPES: &'static [&'static str] = &[
        "approvals/fetchApprovalsStart",
        "approvals/fetchApprovalsSuccess",
        "approvals/fetchApprovalsFailure",
        "approvals/fetchApprovalDetailStart",
        "approvals/fetchApprovalDetailSuccess",
        "approvals/fetchApprovalDetailFailure",
        "approvals/decisionStart",
        "approvals/decisionSuccess",
        "approvals/decisionFailure",
        "approvals/setFilters",
        "approvals/clearFilters",
        "approvals/setPage",
        "approvals/clearSelectedApproval",
        "approvals/clearError",
        "approvals/reset",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ApprovalsAction::FetchApprovalsStart => "approvals/fetchApprovalsStart",
            ApprovalsAction::FetchApprovalsSuccess { .. } => "approvals/fetchApprovalsSuccess",
            ApprovalsAction::FetchApprovalsFailure(_) => "approvals/fetchApprovalsFailure",
            ApprovalsAction::FetchApprovalDetailStart => "approvals/fetchApprovalDetailStart",
            ApprovalsAction::FetchApprovalDetailSuccess(_) => "approvals/fetchApprovalDetailSuccess",
            ApprovalsAction::FetchApprovalDetailFailure(_) => "approvals/fetchApprovalDetailFailure",
            ApprovalsAction::DecisionStart => "approvals/decisionStart",
            ApprovalsAction::DecisionSuccess { .. } => "approvals/decisionSuccess",
            ApprovalsAction::DecisionFailure(_) => "approvals/decisionFailure",
            ApprovalsAction::SetFilters(_) => "approvals/setFilters",
            ApprovalsAction::ClearFilters => "approvals/clearFilters",
            ApprovalsAction::SetPage(_) => "approvals/setPage",
            ApprovalsAction::ClearSelectedApproval => "approvals/clearSelectedApproval",
            ApprovalsAction::ClearError => "approvals/clearError",
            ApprovalsAction::Reset => "approvals/reset",
        }
    }
}
