//! Quotes slice state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::PaginationState;
use crate::types::{AsyncStatus, Quote, QuoteFilters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotesState {
    /// The current page of quotes, newest first.
    pub quotes: Vec<Quote>,
    pub selected_quote: Option<Quote>,
    pub filters: QuoteFilters,
    pub list_status: AsyncStatus,
    pub detail_status: AsyncStatus,
    pub error: Option<String>,
    pub pagination: PaginationState,
}

impl Default for QuotesState {
    fn default() -> Self {
        initial_quotes_state()
    }
}

pub fn initial_quotes_state() -> QuotesState {
    QuotesState {
        quotes: Vec::new(),
        selected_quote: None,
        filters: QuoteFilters::default(),
        list_status: AsyncStatus::Idle,
        detail_status: AsyncStatus::Idle,
        error: None,
        pagination: PaginationState::default(),
    }
}
