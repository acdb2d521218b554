//! Ordered query/parameter customization hooks.
//!
//! Extensions register plain transformation functions at construction time;
//! the dispatcher applies parameter filters first, then query filters, each
//! list in registration order. A filter sees the value produced by the one
//! before it and may rewrite it freely.

use crate::search::params::SearchParams;

pub type ParamFilter = Box<dyn Fn(SearchParams) -> SearchParams + Send + Sync>;
pub type QueryFilter = Box<dyn Fn(String, &SearchParams) -> String + Send + Sync>;

/// Extension points applied before dispatch.
#[derive(Default)]
pub struct SearchHooks {
    param_filters: Vec<ParamFilter>,
    query_filters: Vec<QueryFilter>,
}

impl SearchHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter over the final parameter map.
    pub fn on_params(
        mut self,
        filter: impl Fn(SearchParams) -> SearchParams + Send + Sync + 'static,
    ) -> Self {
        self.param_filters.push(Box::new(filter));
        self
    }

    /// Register a filter over the final query value. The filter also sees
    /// the merged parameters, which are settled by the time query filters
    /// run.
    pub fn on_query(
        mut self,
        filter: impl Fn(String, &SearchParams) -> String + Send + Sync + 'static,
    ) -> Self {
        self.query_filters.push(Box::new(filter));
        self
    }

    pub fn apply_params(&self, params: SearchParams) -> SearchParams {
        self.param_filters.iter().fold(params, |acc, f| f(acc))
    }

    pub fn apply_query(&self, query: String, params: &SearchParams) -> String {
        self.query_filters.iter().fold(query, |acc, f| f(acc, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hooks_pass_values_through() {
        let hooks = SearchHooks::new();
        assert_eq!(hooks.apply_params(SearchParams::default()), SearchParams::default());
        assert_eq!(
            hooks.apply_query("whale".into(), &SearchParams::default()),
            "whale"
        );
    }

    #[test]
    fn filters_run_in_registration_order() {
        let hooks = SearchHooks::new()
            .on_query(|q, _| format!("{q}-first"))
            .on_query(|q, _| format!("{q}-second"));
        assert_eq!(
            hooks.apply_query("q".into(), &SearchParams::default()),
            "q-first-second"
        );
    }

    #[test]
    fn query_filter_sees_the_merged_params() {
        let hooks = SearchHooks::new()
            .on_query(|q, params| format!("{q} (page of {})", params.page_length));
        let query = hooks.apply_query("whale".into(), &SearchParams::default());
        assert_eq!(query, "whale (page of 10)");
    }

    #[test]
    fn param_filter_can_rewrite_fields() {
        let hooks = SearchHooks::new().on_params(|mut p| {
            p.page_length = 25;
            p
        });
        let params = hooks.apply_params(SearchParams::default());
        assert_eq!(params.page_length, 25);
        assert_eq!(params.start, 1);
    }
}
