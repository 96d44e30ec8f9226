//! Company actions.

use serde::{Deserialize, Serialize};

use crate::types::{Company, Employee, ShippingAddress, SpendingLimit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CompanyAction {
    #[serde(rename = "company/fetchCompanyStart")]
    FetchCompanyStart,

    /// Everything the storefront needs to know about the buyer's company,
    /// delivered in one response.
    #[serde(rename = "company/fetchCompanySuccess", rename_all = "camelCase")]
    FetchCompanySuccess {
        company: Company,
        current_employee: Employee,
        spending_limits: Vec<SpendingLimit>,
        shipping_addresses: Vec<ShippingAddress>,
    },

    #[serde(rename = "company/fetchCompanyFailure")]
    FetchCompanyFailure(String),

    #[serde(rename = "company/fetchEmployeesStart")]
    FetchEmployeesStart,

    #[serde(rename = "company/fetchEmployeesSuccess", rename_all = "camelCase")]
    FetchEmployeesSuccess {
        employees: Vec<Employee>,
        total: u64,
        page: u32,
        page_size: u32,
    },

    #[serde(rename = "company/fetchEmployeesFailure")]
    FetchEmployeesFailure(String),

    /// Limits changed after an order or an admin edit.
    #[serde(rename = "company/updateSpendingLimits")]
    UpdateSpendingLimits(Vec<SpendingLimit>),

    #[serde(rename = "company/setCurrentEmployee")]
    SetCurrentEmployee(Option<Employee>),

    #[serde(rename = "company/clearError")]
    ClearError,

    #[serde(rename = "company/reset")]
    Reset,
}

impl CompanyAction {
    /// Every `type` this slice accepts.
    pub const TYPES: &'static [&'static str] = &[
        "company/fetchCompanyStart",
        "company/fetchCompanySuccess",
        "company/fetchCompanyFailure",
        "company/fetchEmployeesStart",
        "company/fetchEmployeesSuccess",
        "company/fetchEmployeesFailure",
        "company/updateSpendingLimits",
        "company/setCurrentEmployee",
        "company/clearError",
        "company/reset",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CompanyAction::FetchCompanyStart => "company/fetchCompanyStart",
            CompanyAction::FetchCompanySuccess { .. } => "company/fetchCompanySuccess",
            CompanyAction::FetchCompanyFailure(_) => "company/fetchCompanyFailure",
            CompanyAction::FetchEmployeesStart => "company/fetchEmployeesStart",
            CompanyAction::FetchEmployeesSuccess { .. } => "company/fetchEmployeesSuccess",
            CompanyAction::FetchEmployeesFailure(_) => "company/fetchEmployeesFailure",
            CompanyAction::UpdateSpendingLimits(_) => "company/updateSpendingLimits",
            CompanyAction::SetCurrentEmployee(_) => "company/setCurrentEmployee",
            CompanyAction::ClearError => "company/clearError",
            CompanyAction::Reset => "company/reset",
        }
    }
}
