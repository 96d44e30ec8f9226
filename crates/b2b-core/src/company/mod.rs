//! # Company Slice
//!
//! Company context for the signed-in buyer: the company account, the
//! current employee, the employee directory, spending limits and shipping
//! addresses.

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::CompanyAction;
pub use reducer::company_reducer;
pub use selectors::CompanySelectors;
pub use state::{initial_company_state, CompanyState};
