//! Company reducer.

use std::sync::Arc;

use crate::company::actions::CompanyAction;
use crate::company::state::{initial_company_state, CompanyState};
use crate::pagination::create_pagination_state;
use crate::types::AsyncStatus;

pub fn company_reducer(state: &Arc<CompanyState>, action: &CompanyAction) -> Arc<CompanyState> {
    match action {
        CompanyAction::FetchCompanyStart => Arc::new(CompanyState {
            status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        CompanyAction::FetchCompanySuccess {
            company,
            current_employee,
            spending_limits,
            shipping_addresses,
        } => Arc::new(CompanyState {
            company: Some(company.clone()),
            current_employee: Some(current_employee.clone()),
            spending_limits: spending_limits.clone(),
            shipping_addresses: shipping_addresses.clone(),
            status: AsyncStatus::Succeeded,
            error: None,
            ..(**state).clone()
        }),

        CompanyAction::FetchCompanyFailure(message) => Arc::new(CompanyState {
            status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        CompanyAction::FetchEmployeesStart => Arc::new(CompanyState {
            employees_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        CompanyAction::FetchEmployeesSuccess {
            employees,
            total,
            page,
            page_size,
        } => Arc::new(CompanyState {
            employees: employees.clone(),
            employees_status: AsyncStatus::Succeeded,
            employees_pagination: create_pagination_state(*page, *page_size, *total),
            ..(**state).clone()
        }),

        CompanyAction::FetchEmployeesFailure(message) => Arc::new(CompanyState {
            employees_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        CompanyAction::UpdateSpendingLimits(limits) => Arc::new(CompanyState {
            spending_limits: limits.clone(),
            ..(**state).clone()
        }),

        CompanyAction::SetCurrentEmployee(employee) => Arc::new(CompanyState {
            current_employee: employee.clone(),
            ..(**state).clone()
        }),

        CompanyAction::ClearError if state.error.is_none() => Arc::clone(state),

        CompanyAction::ClearError => Arc::new(CompanyState {
            error: None,
            ..(**state).clone()
        }),

        CompanyAction::Reset => Arc::new(initial_company_state()),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::money::Money;
    use crate::types::{
        Company, CompanyTier, Employee, EmployeeRole, ShippingAddress, SpendingLimit,
        SpendingPeriod, SpendingScope,
    };

    pub fn company() -> Company {
        Company {
            id: "C1".to_string(),
            name: "Acme Industrial Supply".to_string(),
            tax_id: Some("DE811907980".to_string()),
            tier: CompanyTier::Gold,
            credit_limit: Money::from_cents(5_000_000),
            currency: "USD".to_string(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn employee(id: &str, role: EmployeeRole) -> Employee {
        Employee {
            id: id.to_string(),
            company_id: "C1".to_string(),
            name: format!("Employee {id}"),
            email: format!("{}@acme.example", id.to_lowercase()),
            role,
            department: Some("Facilities".to_string()),
            is_active: true,
        }
    }

    pub fn limit(id: &str, amount: i64, spent: i64) -> SpendingLimit {
        SpendingLimit {
            id: id.to_string(),
            scope: SpendingScope::Employee,
            scope_id: Some("E1".to_string()),
            period: SpendingPeriod::Monthly,
            amount: Money::from_cents(amount),
            spent: Money::from_cents(spent),
            currency: "USD".to_string(),
            requires_approval_above: None,
            is_active: true,
        }
    }

    pub fn address(id: &str, is_default: bool) -> ShippingAddress {
        ShippingAddress {
            id: id.to_string(),
            label: format!("Warehouse {id}"),
            line1: "1 Harbour Road".to_string(),
            line2: None,
            city: "Rotterdam".to_string(),
            postal_code: "3011".to_string(),
            country: "NL".to_string(),
            is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::types::EmployeeRole;

    fn loaded() -> Arc<CompanyState> {
        let state = Arc::new(initial_company_state());
        company_reducer(
            &state,
            &CompanyAction::FetchCompanySuccess {
                company: company(),
                current_employee: employee("E1", EmployeeRole::Buyer),
                spending_limits: vec![limit("L1", 100_000, 20_000)],
                shipping_addresses: vec![address("A1", true)],
            },
        )
    }

    #[test]
    fn test_fetch_company_lifecycle() {
        let state = Arc::new(initial_company_state());
        let loading = company_reducer(&state, &CompanyAction::FetchCompanyStart);
        assert_eq!(loading.status, AsyncStatus::Loading);

        let failed = company_reducer(&loading, &CompanyAction::FetchCompanyFailure("403".to_string()));
        assert_eq!(failed.status, AsyncStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("403"));

        let state = loaded();
        assert_eq!(state.status, AsyncStatus::Succeeded);
        assert_eq!(state.company.as_ref().map(|c| c.name.as_str()), Some("Acme Industrial Supply"));
        assert_eq!(state.spending_limits.len(), 1);
    }

    #[test]
    fn test_employees_page_updates_pagination() {
        let state = company_reducer(
            &loaded(),
            &CompanyAction::FetchEmployeesSuccess {
                employees: vec![employee("E1", EmployeeRole::Buyer), employee("E2", EmployeeRole::Admin)],
                total: 42,
                page: 2,
                page_size: 20,
            },
        );
        assert_eq!(state.employees.len(), 2);
        assert_eq!(state.employees_status, AsyncStatus::Succeeded);
        assert_eq!(state.employees_pagination.total_pages, 3);
        assert!(state.employees_pagination.has_next_page);
        assert!(state.employees_pagination.has_previous_page);
    }

    #[test]
    fn test_clear_error_without_error_keeps_state() {
        let state = loaded();
        let next = company_reducer(&state, &CompanyAction::ClearError);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_update_limits_and_reset() {
        let state = company_reducer(
            &loaded(),
            &CompanyAction::UpdateSpendingLimits(vec![limit("L1", 100_000, 90_000), limit("L2", 5_000, 0)]),
        );
        assert_eq!(state.spending_limits.len(), 2);
        assert!(state.company.is_some());

        let reset = company_reducer(&state, &CompanyAction::Reset);
        assert_eq!(*reset, initial_company_state());
    }
}
