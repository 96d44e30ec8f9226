//! Company slice state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::PaginationState;
use crate::types::{AsyncStatus, Company, Employee, ShippingAddress, SpendingLimit};

/// Company context loaded once per session, plus the paged employee
/// directory used by admin screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompanyState {
    pub company: Option<Company>,
    pub current_employee: Option<Employee>,
    pub employees: Vec<Employee>,
    pub spending_limits: Vec<SpendingLimit>,
    pub shipping_addresses: Vec<ShippingAddress>,
    /// Status of the company context fetch.
    pub status: AsyncStatus,
    pub employees_status: AsyncStatus,
    pub error: Option<String>,
    pub employees_pagination: PaginationState,
}

impl Default for CompanyState {
    fn default() -> Self {
        initial_company_state()
    }
}

pub fn initial_company_state() -> CompanyState {
    CompanyState {
        company: None,
        current_employee: None,
        employees: Vec::new(),
        spending_limits: Vec::new(),
        shipping_addresses: Vec::new(),
        status: AsyncStatus::Idle,
        employees_status: AsyncStatus::Idle,
        error: None,
        employees_pagination: PaginationState::default(),
    }
}
