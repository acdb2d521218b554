//! Search dispatch: normalization, exclusion clauses, hooks, driver
//! invocation, and pagination.
//!
//! Every failure state collapses into an absent value rather than an error:
//! no query, no driver, a driver error, and zero results all surface through
//! the same [`SearchOutcome`] shape. Nothing at this layer panics or returns
//! `Err` to the host.

use std::sync::Arc;

use chrono::Utc;

use crate::config::BridgeOptions;
use crate::drivers::{DriverRegistry, SearchResult};
use crate::hooks::SearchHooks;
use crate::request::SearchRequest;
use crate::search::exclusions::apply_exclusions;
use crate::search::pagination::build_links;
use crate::search::params::{ParamOverrides, SearchParams};
use crate::search::query::{self, NormalizedQuery, QueryInput};
use crate::search::sanitize::sanitize;

/// Outcome of one search invocation.
///
/// Three terminal shapes: no query ran → every field absent; the query ran
/// with zero results → result present, links absent; results → result plus
/// whichever links the page position allows.
pub struct SearchOutcome {
    pub result: Option<Box<dyn SearchResult>>,
    pub next_link: Option<String>,
    pub prev_link: Option<String>,
}

impl SearchOutcome {
    fn none() -> Self {
        Self {
            result: None,
            next_link: None,
            prev_link: None,
        }
    }

    /// True when no result came back, whether because no query ran or the
    /// driver produced nothing.
    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }
}

/// The bridge between a content host and its search backend.
///
/// Holds the process-wide driver registry, the loaded options, and the
/// injected customization hooks. Each [`search`](SearchBridge::search) call
/// is self-contained; concurrent calls share nothing mutable.
pub struct SearchBridge {
    registry: Arc<DriverRegistry>,
    options: BridgeOptions,
    hooks: SearchHooks,
}

impl SearchBridge {
    pub fn new(registry: Arc<DriverRegistry>, options: BridgeOptions, hooks: SearchHooks) -> Self {
        Self {
            registry,
            options,
            hooks,
        }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// Run one search.
    ///
    /// Free text gets the configured exclusion clauses appended; structured
    /// input is dispatched as its serialized form untouched. Caller
    /// overrides merge over the parameter defaults, hooks run (parameters
    /// first, then the query value), the value is sanitized, and the active
    /// driver is invoked.
    pub fn search(&self, input: &QueryInput, overrides: ParamOverrides) -> SearchOutcome {
        let Some(normalized) = query::normalize(input) else {
            return SearchOutcome::none();
        };

        let (query_value, structured, link_text) = match normalized {
            NormalizedQuery::Text(text) => {
                let expanded =
                    apply_exclusions(&text, &self.options.search_exclude, Utc::now().date_naive());
                (expanded, false, text)
            }
            NormalizedQuery::Structured(json) => (json.clone(), true, json),
        };

        let params = self.hooks.apply_params(SearchParams::merged(overrides));
        let query_value = sanitize(&self.hooks.apply_query(query_value, &params));

        let Some(driver) = self.registry.get(&self.options.driver) else {
            tracing::warn!(driver = %self.options.driver, "no search driver registered");
            return SearchOutcome::none();
        };

        tracing::info!(
            driver = %self.options.driver,
            query = %query_value,
            start = params.start,
            page_length = params.page_length,
            structured,
            "search_dispatch"
        );

        let result = match driver.search(&query_value, &params, structured) {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(driver = %self.options.driver, %error, "driver search failed");
                None
            }
        };
        let Some(result) = result else {
            return SearchOutcome::none();
        };

        let (next_link, prev_link) = build_links(
            result.as_ref(),
            &link_text,
            self.options.search_page.as_deref(),
        );
        SearchOutcome {
            result: Some(result),
            next_link,
            prev_link,
        }
    }

    /// Serve one inbound request.
    ///
    /// Reads `querytext`, `start`, and `pageLength` from the request pairs,
    /// folds the configured REST options and transform names into the
    /// caller overrides, and runs the free-text search path.
    pub fn handle_request<'a, I>(&self, pairs: I) -> SearchOutcome
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let request = SearchRequest::from_pairs(pairs);
        let overrides = ParamOverrides {
            start: request.start,
            page_length: request.page_length,
            options: (!self.options.rest_config_option.is_empty())
                .then(|| self.options.rest_config_option.clone()),
            transform: (!self.options.rest_transform.is_empty())
                .then(|| self.options.rest_transform.clone()),
            view: None,
        };
        self.search(&QueryInput::FreeText(request.querytext), overrides)
    }
}
