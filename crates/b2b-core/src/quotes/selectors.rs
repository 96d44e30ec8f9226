//! Quote selectors.

use std::sync::Arc;

use crate::memo::{Memo, ParamMemo};
use crate::pagination::PaginationState;
use crate::quotes::state::QuotesState;
use crate::types::{Quote, QuoteFilters, QuoteStatus};
use crate::DEFAULT_SELECTOR_CACHE_SIZE;

pub fn select_quotes(state: &QuotesState) -> &[Quote] {
    &state.quotes
}

pub fn select_selected_quote(state: &QuotesState) -> Option<&Quote> {
    state.selected_quote.as_ref()
}

pub fn select_quote_filters(state: &QuotesState) -> &QuoteFilters {
    &state.filters
}

pub fn select_quotes_pagination(state: &QuotesState) -> &PaginationState {
    &state.pagination
}

pub fn select_quotes_is_loading(state: &QuotesState) -> bool {
    state.list_status.is_loading() || state.detail_status.is_loading()
}

fn find_quote(state: &QuotesState, quote_id: &String) -> Option<Quote> {
    state
        .quotes
        .iter()
        .chain(state.selected_quote.iter())
        .find(|quote| quote.id == *quote_id)
        .cloned()
}

fn quotes_with_status(state: &QuotesState, status: &QuoteStatus) -> Vec<Quote> {
    state
        .quotes
        .iter()
        .filter(|quote| quote.status == *status)
        .cloned()
        .collect()
}

/// Draft and pending quotes on the current page.
fn count_open(state: &QuotesState) -> usize {
    state.quotes.iter().filter(|quote| quote.status.is_open()).count()
}

#[derive(Debug)]
pub struct QuoteSelectors {
    by_id: ParamMemo<QuotesState, String, Option<Quote>>,
    by_status: ParamMemo<QuotesState, QuoteStatus, Vec<Quote>>,
    active_count: Memo<QuotesState, usize>,
}

impl Default for QuoteSelectors {
    fn default() -> Self {
        QuoteSelectors::new(DEFAULT_SELECTOR_CACHE_SIZE)
    }
}

impl QuoteSelectors {
    pub fn new(cache_size: usize) -> Self {
        QuoteSelectors {
            by_id: ParamMemo::new(cache_size, find_quote),
            by_status: ParamMemo::new(cache_size, quotes_with_status),
            active_count: Memo::new(count_open),
        }
    }

    /// Looks in the list first, then in the detail slot.
    pub fn quote_by_id(&mut self, state: &Arc<QuotesState>, quote_id: &str) -> Arc<Option<Quote>> {
        self.by_id.select(state, &quote_id.to_string())
    }

    pub fn quotes_by_status(&mut self, state: &Arc<QuotesState>, status: QuoteStatus) -> Arc<Vec<Quote>> {
        self.by_status.select(state, &status)
    }

    pub fn active_quote_count(&mut self, state: &Arc<QuotesState>) -> usize {
        *self.active_count.select(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::reducer::fixtures::quote;
    use crate::quotes::state::initial_quotes_state;

    fn state() -> Arc<QuotesState> {
        Arc::new(QuotesState {
            quotes: vec![
                quote("Q1", QuoteStatus::Draft),
                quote("Q2", QuoteStatus::Pending),
                quote("Q3", QuoteStatus::Approved),
                quote("Q4", QuoteStatus::Pending),
            ],
            selected_quote: Some(quote("Q9", QuoteStatus::Converted)),
            ..initial_quotes_state()
        })
    }

    #[test]
    fn test_quote_by_id_checks_selected_slot() {
        let mut selectors = QuoteSelectors::default();
        let state = state();
        assert!(selectors.quote_by_id(&state, "Q3").is_some());
        assert!(selectors.quote_by_id(&state, "Q9").is_some());
        assert!(selectors.quote_by_id(&state, "Q0").is_none());
    }

    #[test]
    fn test_quotes_by_status_and_active_count() {
        let mut selectors = QuoteSelectors::default();
        let state = state();

        let pending = selectors.quotes_by_status(&state, QuoteStatus::Pending);
        let ids: Vec<&str> = pending.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["Q2", "Q4"]);
        assert!(Arc::ptr_eq(&pending, &selectors.quotes_by_status(&state, QuoteStatus::Pending)));

        assert_eq!(selectors.active_quote_count(&state), 3);
    }

    #[test]
    fn test_is_loading_covers_list_and_detail() {
        let mut state = initial_quotes_state();
        assert!(!select_quotes_is_loading(&state));
        state.detail_status = crate::types::AsyncStatus::Loading;
        assert!(select_quotes_is_loading(&state));
    }
}
