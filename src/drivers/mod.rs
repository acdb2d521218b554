//! Pluggable search drivers.
//!
//! A driver adapts one search backend behind a uniform capability: take a
//! query value plus final parameters and return one page of results, or
//! nothing. The bridge never talks to a backend directly; everything goes
//! through a [`SearchDriver`] looked up by name in a [`DriverRegistry`].
//!
//! The registry is built once during startup and shared by reference
//! afterwards. Request handlers only ever call [`DriverRegistry::get`], so
//! concurrent lookups need no locking as long as registration finishes
//! before the first request.

use std::collections::HashMap;
use std::sync::Arc;

use crate::search::params::SearchParams;

/// Driver name used when configuration does not specify one.
pub const DEFAULT_DRIVER: &str = "marklogic";

/// Read-only view over one page of backend results.
///
/// The driver owns the concrete representation; the bridge reads only the
/// paging fields it needs to derive navigation links.
pub trait SearchResult {
    /// Total matching documents across all pages.
    fn total(&self) -> u64;
    /// 1-based index of the page this result represents.
    fn current_page(&self) -> u64;
    fn total_pages(&self) -> u64;
    /// 1-based start offset of the following page.
    fn next_start(&self) -> u64;
    /// 1-based start offset of the preceding page.
    fn previous_start(&self) -> u64;
    fn page_length(&self) -> u64;
}

/// Backend adapter.
///
/// `structured` tells the driver whether `query` is raw query text or the
/// serialized structured form. Returning `Ok(None)` means "no results"; an
/// `Err` is absorbed by the dispatcher and surfaces the same way.
pub trait SearchDriver: Send + Sync {
    fn search(
        &self,
        query: &str,
        params: &SearchParams,
        structured: bool,
    ) -> anyhow::Result<Option<Box<dyn SearchResult>>>;
}

/// Plain paging record for drivers that have no richer result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub next_start: u64,
    pub previous_start: u64,
    pub page_length: u64,
}

impl SearchResult for ResultPage {
    fn total(&self) -> u64 {
        self.total
    }

    fn current_page(&self) -> u64 {
        self.current_page
    }

    fn total_pages(&self) -> u64 {
        self.total_pages
    }

    fn next_start(&self) -> u64 {
        self.next_start
    }

    fn previous_start(&self) -> u64 {
        self.previous_start
    }

    fn page_length(&self) -> u64 {
        self.page_length
    }
}

/// Named driver lookup table.
///
/// Populated via [`add`](DriverRegistry::add) during startup, then wrapped
/// in an [`Arc`] and handed to every [`SearchBridge`](crate::SearchBridge).
#[derive(Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, Arc<dyn SearchDriver>>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, driver: Arc<dyn SearchDriver>) {
        self.drivers.insert(name.into(), driver);
    }

    /// Look up a driver by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn SearchDriver>> {
        self.drivers.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Registered driver names, for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
