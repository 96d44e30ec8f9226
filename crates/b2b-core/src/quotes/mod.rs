//! # Quotes Slice
//!
//! Negotiated price quotes: a paged, filterable list plus the quote open in
//! the detail view.

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::QuotesAction;
pub use reducer::quotes_reducer;
pub use selectors::QuoteSelectors;
pub use state::{initial_quotes_state, QuotesState};
