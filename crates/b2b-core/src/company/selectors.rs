//! # Company Selectors
//!
//! Permission checks, spending-limit views and address lookups over
//! [`CompanyState`].
//!
//! ## Role Permissions
//! ```text
//! ┌──────────┬─────────────┬──────────────┐
//! │ Role     │ can_approve │ can_purchase │
//! ├──────────┼─────────────┼──────────────┤
//! │ Admin    │     yes     │     yes      │
//! │ Manager  │     yes     │     yes      │
//! │ Buyer    │     no      │     yes      │
//! │ Viewer   │     no      │     no       │
//! └──────────┴─────────────┴──────────────┘
//! ```
//! An inactive employee can neither approve nor purchase.

use std::sync::Arc;

use crate::company::state::CompanyState;
use crate::memo::{ParamMemo, ShallowMemo};
use crate::money::Money;
use crate::pagination::PaginationState;
use crate::types::{Company, Employee, EmployeeRole, ShippingAddress, SpendingLimit};
use crate::{DEFAULT_SELECTOR_CACHE_SIZE, DEFAULT_WARNING_THRESHOLD_BPS};

// =============================================================================
// Plain Selectors
// =============================================================================

pub fn select_company(state: &CompanyState) -> Option<&Company> {
    state.company.as_ref()
}

pub fn select_company_name(state: &CompanyState) -> Option<&str> {
    state.company.as_ref().map(|company| company.name.as_str())
}

pub fn select_current_employee(state: &CompanyState) -> Option<&Employee> {
    state.current_employee.as_ref()
}

pub fn select_employee_role(state: &CompanyState) -> Option<EmployeeRole> {
    state.current_employee.as_ref().map(|employee| employee.role)
}

fn active_role(state: &CompanyState) -> Option<EmployeeRole> {
    state
        .current_employee
        .as_ref()
        .filter(|employee| employee.is_active)
        .map(|employee| employee.role)
}

pub fn select_is_admin(state: &CompanyState) -> bool {
    active_role(state) == Some(EmployeeRole::Admin)
}

/// Admins and managers can approve orders and quotes.
pub fn select_can_approve(state: &CompanyState) -> bool {
    matches!(active_role(state), Some(EmployeeRole::Admin | EmployeeRole::Manager))
}

pub fn select_can_purchase(state: &CompanyState) -> bool {
    matches!(active_role(state), Some(role) if role != EmployeeRole::Viewer)
}

pub fn select_spending_limits(state: &CompanyState) -> &[SpendingLimit] {
    &state.spending_limits
}

/// Budget left on a limit, never negative. `None` for an unknown id.
pub fn select_remaining_budget(state: &CompanyState, limit_id: &str) -> Option<Money> {
    state
        .spending_limits
        .iter()
        .find(|limit| limit.id == limit_id)
        .map(SpendingLimit::remaining)
}

pub fn select_shipping_addresses(state: &CompanyState) -> &[ShippingAddress] {
    &state.shipping_addresses
}

/// The address flagged as default, falling back to the first one.
pub fn select_default_shipping_address(state: &CompanyState) -> Option<&ShippingAddress> {
    state
        .shipping_addresses
        .iter()
        .find(|address| address.is_default)
        .or_else(|| state.shipping_addresses.first())
}

pub fn select_employees(state: &CompanyState) -> &[Employee] {
    &state.employees
}

pub fn select_employees_pagination(state: &CompanyState) -> &PaginationState {
    &state.employees_pagination
}

pub fn select_company_is_loading(state: &CompanyState) -> bool {
    state.status.is_loading() || state.employees_status.is_loading()
}

// =============================================================================
// Memoized Selectors
// =============================================================================

fn find_limit(state: &CompanyState, limit_id: &String) -> Option<SpendingLimit> {
    state
        .spending_limits
        .iter()
        .find(|limit| limit.id == *limit_id)
        .cloned()
}

/// Active limits whose utilisation is at or above `threshold_bps`.
///
/// Zero-amount limits have no utilisation and are never reported.
fn limits_near_threshold(state: &CompanyState, threshold_bps: &i64) -> Vec<SpendingLimit> {
    state
        .spending_limits
        .iter()
        .filter(|limit| limit.is_active)
        .filter(|limit| {
            limit
                .utilisation_bps()
                .is_some_and(|bps| bps >= *threshold_bps)
        })
        .cloned()
        .collect()
}

#[derive(Debug)]
pub struct CompanySelectors {
    active_limits: ShallowMemo<CompanyState, Vec<SpendingLimit>>,
    limit_by_id: ParamMemo<CompanyState, String, Option<SpendingLimit>>,
    near_threshold: ParamMemo<CompanyState, i64, Vec<SpendingLimit>>,
    warning_threshold_bps: i64,
}

impl Default for CompanySelectors {
    fn default() -> Self {
        CompanySelectors::new(DEFAULT_SELECTOR_CACHE_SIZE, DEFAULT_WARNING_THRESHOLD_BPS)
    }
}

impl CompanySelectors {
    pub fn new(cache_size: usize, warning_threshold_bps: i64) -> Self {
        CompanySelectors {
            active_limits: ShallowMemo::new(|state: &CompanyState| -> Vec<SpendingLimit> {
                state
                    .spending_limits
                    .iter()
                    .filter(|limit| limit.is_active)
                    .cloned()
                    .collect()
            }),
            limit_by_id: ParamMemo::new(cache_size, find_limit),
            near_threshold: ParamMemo::new(cache_size, limits_near_threshold),
            warning_threshold_bps,
        }
    }

    pub fn active_spending_limits(&mut self, state: &Arc<CompanyState>) -> Arc<Vec<SpendingLimit>> {
        self.active_limits.select(state)
    }

    pub fn spending_limit_by_id(
        &mut self,
        state: &Arc<CompanyState>,
        limit_id: &str,
    ) -> Arc<Option<SpendingLimit>> {
        self.limit_by_id.select(state, &limit_id.to_string())
    }

    /// Limits at or above an explicit utilisation threshold.
    pub fn limits_near_threshold(
        &mut self,
        state: &Arc<CompanyState>,
        threshold_bps: i64,
    ) -> Arc<Vec<SpendingLimit>> {
        self.near_threshold.select(state, &threshold_bps)
    }

    /// Limits at or above the configured warning threshold.
    pub fn limits_near_warning(&mut self, state: &Arc<CompanyState>) -> Arc<Vec<SpendingLimit>> {
        let threshold = self.warning_threshold_bps;
        self.limits_near_threshold(state, threshold)
    }

    pub fn warning_threshold_bps(&self) -> i64 {
        self.warning_threshold_bps
    }
}
