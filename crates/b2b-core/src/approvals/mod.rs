//! # Approvals Slice
//!
//! Orders waiting on a manager's decision because they breached a spending
//! limit, and the decision flow itself.
//!
//! ## Decision Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Manager opens approval A-17 (pending, $12,400.00)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DecisionStart ──► decision_status = loading                            │
//! │       │                                                                 │
//! │       ├──► DecisionSuccess(approved) ──► list + selected updated        │
//! │       │                                  pending_count − 1              │
//! │       │                                                                 │
//! │       └──► DecisionFailure(msg) ──► decision_status = failed, error     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::ApprovalsAction;
pub use reducer::approvals_reducer;
pub use selectors::ApprovalSelectors;
pub use state::{initial_approvals_state, ApprovalsState};
