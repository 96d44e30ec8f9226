//! Quotes actions.

use serde::{Deserialize, Serialize};

use crate::types::{Quote, QuoteFilters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum QuotesAction {
    #[serde(rename = "quotes/fetchQuotesStart")]
    FetchQuotesStart,

    #[serde(rename = "quotes/fetchQuotesSuccess", rename_all = "camelCase")]
    FetchQuotesSuccess {
        quotes: Vec<Quote>,
        total: u64,
        page: u32,
        page_size: u32,
    },

    #[serde(rename = "quotes/fetchQuotesFailure")]
    FetchQuotesFailure(String),

    #[serde(rename = "quotes/fetchQuoteDetailStart")]
    FetchQuoteDetailStart,

    #[serde(rename = "quotes/fetchQuoteDetailSuccess")]
    FetchQuoteDetailSuccess(Quote),

    #[serde(rename = "quotes/fetchQuoteDetailFailure")]
    FetchQuoteDetailFailure(String),

    /// Replace the filters and go back to the first page.
    #[serde(rename = "quotes/setFilters")]
    SetFilters(QuoteFilters),

    #[serde(rename = "quotes/clearFilters")]
    ClearFilters,

    #[serde(rename = "quotes/setPage")]
    SetPage(u32),

    /// A quote request was submitted; it goes to the top of the list.
    #[serde(rename = "quotes/quoteCreated")]
    QuoteCreated(Quote),

    /// A quote changed server-side (status, prices, validity).
    #[serde(rename = "quotes/quoteUpdated")]
    QuoteUpdated(Quote),

    #[serde(rename = "quotes/clearSelectedQuote")]
    ClearSelectedQuote,

    #[serde(rename = "quotes/clearError")]
    ClearError,

    #[serde(rename = "quotes/reset")]
    Reset,
}

impl QuotesAction {
    /// Every `type` this slice accepts.
    pub const TYPES: &'static [&'static str] = &[
        "quotes/fetchQuotesStart",
        "quotes/fetchQuotesSuccess",
        "quotes/fetchQuotesFailure",
        "quotes/fetchQuoteDetailStart",
        "quotes/fetchQuoteDetailSuccess",
        "quotes/fetchQuoteDetailFailure",
        "quotes/setFilters",
        "quotes/clearFilters",
        "quotes/setPage",
        "quotes/quoteCreated",
        "quotes/quoteUpdated",
        "quotes/clearSelectedQuote",
        "quotes/clearError",
        "quotes/reset",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuotesAction::FetchQuotesStart => "quotes/fetchQuotesStart",
            QuotesAction::FetchQuotesSuccess { .. } => "quotes/fetchQuotesSuccess",
            QuotesAction::FetchQuotesFailure(_) => "quotes/fetchQuotesFailure",
            QuotesAction::FetchQuoteDetailStart => "quotes/fetchQuoteDetailStart",
            QuotesAction::FetchQuoteDetailSuccess(_) => "quotes/fetchQuoteDetailSuccess",
            QuotesAction::FetchQuoteDetailFailure(_) => "quotes/fetchQuoteDetailFailure",
            QuotesAction::SetFilters(_) => "quotes/setFilters",
            QuotesAction::ClearFilters => "quotes/clearFilters",
            QuotesAction::SetPage(_) => "quotes/setPage",
            QuotesAction::QuoteCreated(_) => "quotes/quoteCreated",
            QuotesAction::QuoteUpdated(_) => "quotes/quoteUpdated",
            QuotesAction::ClearSelectedQuote => "quotes/clearSelectedQuote",
            QuotesAction::ClearError => "quotes/clearError",
            QuotesAction::Reset => "quotes/reset",
        }
    }
}
