//! # b2b-store: Host Layer for the B2B Storefront State
//!
//! Owns the single-writer [`Store`] around the pure reducers in `b2b_core`,
//! plus the ambient pieces a host needs: configuration and tracing.
//!
//! ## Modules
//!
//! - [`store`] - `Store`: dispatch, snapshots, selector caches, persistence glue
//! - [`config`] - `StoreConfig`: defaults, `store.toml`, environment overrides
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - `StoreError`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use b2b_store::{init_tracing, Store, StoreConfig};
//! use b2b_core::cart::CartB2BAction;
//!
//! let config = StoreConfig::load_or_default(None);
//! init_tracing(&config.logging);
//!
//! let store = Store::new(&config);
//! store.dispatch(CartB2BAction::SetShippingAddress(Some("addr-1".to_string())));
//! let summary = store.checkout_summary();
//! println!("blocked: {:?}", summary.blocked_reason);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use logging::init_tracing;
pub use store::{SelectorSet, Store};
