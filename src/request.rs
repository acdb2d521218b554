//! Request-facing surface.
//!
//! The host hands over whatever key/value pairs its request layer produced;
//! this module picks out the three the bridge understands.

use crate::search::params::ParamOverrides;

/// Search request read from inbound request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub querytext: String,
    pub start: Option<u64>,
    pub page_length: Option<u64>,
}

impl SearchRequest {
    /// Read `querytext`, `start`, and `pageLength` from request pairs.
    ///
    /// Absent or unparseable numbers are treated as absent and fall back to
    /// the parameter defaults downstream. Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            match key {
                "querytext" => request.querytext = value.to_string(),
                "start" => request.start = value.parse().ok(),
                "pageLength" => request.page_length = value.parse().ok(),
                _ => {}
            }
        }
        request
    }

    /// Paging overrides carried by this request.
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            start: self.start,
            page_length: self.page_length,
            ..Default::default()
        }
    }
}
