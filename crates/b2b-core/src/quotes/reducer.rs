//! Quotes reducer.

use std::sync::Arc;

use crate::pagination::{create_pagination_state, PaginationState};
use crate::quotes::actions::QuotesAction;
use crate::quotes::state::{initial_quotes_state, QuotesState};
use crate::types::{AsyncStatus, Quote, QuoteFilters};

pub fn quotes_reducer(state: &Arc<QuotesState>, action: &QuotesAction) -> Arc<QuotesState> {
    match action {
        QuotesAction::FetchQuotesStart => Arc::new(QuotesState {
            list_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        QuotesAction::FetchQuotesSuccess {
            quotes,
            total,
            page,
            page_size,
        } => Arc::new(QuotesState {
            quotes: quotes.clone(),
            list_status: AsyncStatus::Succeeded,
            pagination: create_pagination_state(*page, *page_size, *total),
            ..(**state).clone()
        }),

        QuotesAction::FetchQuotesFailure(message) => Arc::new(QuotesState {
            list_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        QuotesAction::FetchQuoteDetailStart => Arc::new(QuotesState {
            detail_status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        QuotesAction::FetchQuoteDetailSuccess(quote) => Arc::new(QuotesState {
            selected_quote: Some(quote.clone()),
            detail_status: AsyncStatus::Succeeded,
            ..(**state).clone()
        }),

        QuotesAction::FetchQuoteDetailFailure(message) => Arc::new(QuotesState {
            detail_status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        QuotesAction::SetFilters(filters) => Arc::new(QuotesState {
            filters: filters.clone(),
            pagination: first_page(&state.pagination),
            ..(**state).clone()
        }),

        QuotesAction::ClearFilters => Arc::new(QuotesState {
            filters: QuoteFilters::default(),
            pagination: first_page(&state.pagination),
            ..(**state).clone()
        }),

        QuotesAction::SetPage(page) => Arc::new(QuotesState {
            pagination: create_pagination_state(
                *page,
                state.pagination.page_size,
                state.pagination.total_items,
            ),
            ..(**state).clone()
        }),

        QuotesAction::QuoteCreated(quote) => {
            let mut quotes = Vec::with_capacity(state.quotes.len() + 1);
            quotes.push(quote.clone());
            quotes.extend(state.quotes.iter().cloned());

            Arc::new(QuotesState {
                quotes,
                pagination: create_pagination_state(
                    state.pagination.current_page,
                    state.pagination.page_size,
                    state.pagination.total_items + 1,
                ),
                ..(**state).clone()
            })
        }

        QuotesAction::QuoteUpdated(quote) => Arc::new(QuotesState {
            quotes: replace_by_id(&state.quotes, quote),
            selected_quote: match &state.selected_quote {
                Some(selected) if selected.id == quote.id => Some(quote.clone()),
                other => other.clone(),
            },
            ..(**state).clone()
        }),

        QuotesAction::ClearSelectedQuote => Arc::new(QuotesState {
            selected_quote: None,
            detail_status: AsyncStatus::Idle,
            ..(**state).clone()
        }),

        QuotesAction::ClearError if state.error.is_none() => Arc::clone(state),

        QuotesAction::ClearError => Arc::new(QuotesState {
            error: None,
            ..(**state).clone()
        }),

        QuotesAction::Reset => Arc::new(initial_quotes_state()),
    }
}

fn first_page(pagination: &PaginationState) -> PaginationState {
    create_pagination_state(1, pagination.page_size, pagination.total_items)
}

fn replace_by_id(quotes: &[Quote], updated: &Quote) -> Vec<Quote> {
    quotes
        .iter()
        .map(|quote| {
            if quote.id == updated.id {
                updated.clone()
            } else {
                quote.clone()
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::money::Money;
    use crate::types::{Quote, QuoteLineItem, QuoteStatus};

    pub fn quote(id: &str, status: QuoteStatus) -> Quote {
        let unit_price = Money::from_cents(1_250);
        Quote {
            id: id.to_string(),
            quote_number: format!("Q-{id}"),
            company_id: "C1".to_string(),
            status,
            items: vec![QuoteLineItem {
                product_id: "P1".to_string(),
                sku: "SKU-P1".to_string(),
                name: "Pallet wrap".to_string(),
                quantity: 40,
                unit_price,
                line_total: unit_price.multiply_quantity(40),
            }],
            total: unit_price.multiply_quantity(40),
            currency: "USD".to_string(),
            valid_until: Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
        }
    }
}
