//! marklogic-bridge — query translation and pagination for a MarkLogic
//! search backend.
//!
//! The bridge sits between a content host and its search engine. It turns a
//! free-text or structured request into a backend query (appending
//! admin-configured exclusion clauses and expanding placeholder tokens),
//! dispatches it through a named driver, and derives next/previous page
//! links from the result.
//!
//! # Data flow
//!
//! ```text
//! querytext / filter terms ──► normalize ──► exclusions (text only)
//!        │                                        │
//!   paging params ──► merge defaults ──► hooks ──► sanitize ──► driver
//!                                                                 │
//!                           (result, next link, prev link) ◄── paginate
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marklogic_bridge::{
//!     BridgeOptions, DriverRegistry, ParamOverrides, QueryInput, SearchBridge, SearchHooks,
//! };
//!
//! let mut registry = DriverRegistry::new();
//! registry.add("marklogic", Arc::new(my_driver));
//!
//! let bridge = SearchBridge::new(
//!     Arc::new(registry),
//!     BridgeOptions::load(options_path)?,
//!     SearchHooks::new(),
//! );
//!
//! let outcome = bridge.search(
//!     &QueryInput::FreeText("moby dick".into()),
//!     ParamOverrides::default(),
//! );
//! ```

pub mod config;
pub mod drivers;
pub mod hooks;
pub mod request;
pub mod search;

// Re-export the types a host needs to wire the bridge up.
pub use config::{BridgeOptions, ConfigError};
pub use drivers::{DEFAULT_DRIVER, DriverRegistry, ResultPage, SearchDriver, SearchResult};
pub use hooks::SearchHooks;
pub use request::SearchRequest;
pub use search::dispatch::{SearchBridge, SearchOutcome};
pub use search::params::{ParamOverrides, SearchParams};
pub use search::query::{FilterTerm, NormalizedQuery, QueryInput};
