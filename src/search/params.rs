//! Search parameter defaults and merging.

use serde::Serialize;

/// Default 1-based offset of the first result.
pub const DEFAULT_START: u64 = 1;

/// Default page size.
pub const DEFAULT_PAGE_LENGTH: u64 = 10;

/// Default result view.
pub const DEFAULT_VIEW: &str = "all";

/// Final parameter map handed to a driver.
///
/// Field names serialize to the backend wire names (`pageLength`, not
/// `page_length`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// 1-based offset of the first result to return.
    pub start: u64,
    #[serde(rename = "pageLength")]
    pub page_length: u64,
    /// Name of the stored options node the backend searches with.
    pub options: String,
    /// Name of the result transform the backend applies.
    pub transform: String,
    pub view: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            page_length: DEFAULT_PAGE_LENGTH,
            options: String::new(),
            transform: String::new(),
            view: DEFAULT_VIEW.to_string(),
        }
    }
}

/// Caller-supplied subset of parameters; anything left `None` falls back to
/// the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub start: Option<u64>,
    pub page_length: Option<u64>,
    pub options: Option<String>,
    pub transform: Option<String>,
    pub view: Option<String>,
}

impl SearchParams {
    /// Layer `overrides` over the defaults.
    pub fn merged(overrides: ParamOverrides) -> Self {
        let defaults = Self::default();
        Self {
            start: overrides.start.unwrap_or(defaults.start),
            page_length: overrides.page_length.unwrap_or(defaults.page_length),
            options: overrides.options.unwrap_or(defaults.options),
            transform: overrides.transform.unwrap_or(defaults.transform),
            view: overrides.view.unwrap_or(defaults.view),
        }
    }
}
