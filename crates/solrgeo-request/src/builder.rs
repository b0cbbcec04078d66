//! Rule chaining for one request.

use solrgeo_config::Config;

use crate::{
    RequestParams, SearchParams, SpatialOutcome, VisibilityOutcome, spatial::apply_spatial,
    visibility::apply_visibility,
};

/// Applies the shaping rules to an outgoing Solr request.
///
/// Borrows the configuration and holds no other state, so a single builder
/// can serve any number of concurrent request handlers.
#[derive(Debug, Clone, Copy)]
pub struct SearchBuilder<'a> {
    /// Field names and rule settings.
    config: &'a Config,
}

/// Combined outcome of one shaping pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutcome {
    /// What the spatial rule did.
    pub spatial: SpatialOutcome,
    /// What the child-visibility rule did.
    pub visibility: VisibilityOutcome,
}

impl<'a> SearchBuilder<'a> {
    /// Creates a builder over the given configuration.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Runs the full chain: the spatial rule, then the child-visibility
    /// rule.
    pub fn shape(&self, request: &RequestParams, params: &mut SearchParams) -> ShapeOutcome {
        let spatial = self.apply_spatial(request, params);
        let visibility = self.apply_visibility(request, params);
        ShapeOutcome {
            spatial,
            visibility,
        }
    }

    /// Runs only the spatial boost/filter rule.
    pub fn apply_spatial(
        &self,
        request: &RequestParams,
        params: &mut SearchParams,
    ) -> SpatialOutcome {
        apply_spatial(self.config, request, params)
    }

    /// Runs only the child-visibility rule.
    pub fn apply_visibility(
        &self,
        request: &RequestParams,
        params: &mut SearchParams,
    ) -> VisibilityOutcome {
        apply_visibility(self.config, request, params)
    }
}
