//! Search layer facade.
//!
//! This module holds the query-translation pipeline, in dispatch order:
//!
//! - **[`query`]**: query input normalization (free text vs structured).
//! - **[`exclusions`]**: admin-configured exclusion rules appended to
//!   free-text queries as negated clauses.
//! - **[`params`]**: paging parameter defaults and merging.
//! - **[`sanitize`]**: query text cleanup before dispatch.
//! - **[`dispatch`]**: the bridge tying normalization, hooks, and the
//!   driver registry together.
//! - **[`pagination`]**: next/previous link derivation from a result page.

pub mod dispatch;
pub mod exclusions;
pub mod pagination;
pub mod params;
pub mod query;
pub mod sanitize;
