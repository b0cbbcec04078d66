//! The collection child-visibility rule.

use solrgeo_config::Config;

use crate::{RequestParams, SearchParams};

/// Result of the child-visibility rule for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityOutcome {
    /// Detail views show every record; the rule did not fire.
    ShowAction,
    /// Collection members were excluded from the result set.
    ChildrenHidden,
    /// The user faceted on a parent collection: the membership filter was
    /// widened to also match the parent record itself, and results were
    /// sorted by type so the parent lists first.
    ParentExpanded {
        /// The selected parent value.
        parent: String,
    },
}

/// Applies the child-visibility rule.
///
/// Outside of show actions exactly one branch fires: with no parent facet
/// selected, records carrying a non-empty membership field are filtered
/// out of the listing; with a parent facet selected, any existing
/// filter-query entry naming the membership field is rewritten to a
/// disjunction that also matches the parent by identifier, and the sort
/// expression gets a type-first prefix.
pub(crate) fn apply_visibility(
    config: &Config,
    request: &RequestParams,
    params: &mut SearchParams,
) -> VisibilityOutcome {
    if config.is_show_action(&request.action) {
        return VisibilityOutcome::ShowAction;
    }

    let is_part_of = &config.fields.is_part_of;
    let parent = request
        .facets
        .get(is_part_of)
        .and_then(|values| values.first());

    let Some(parent) = parent else {
        params
            .filter_query
            .push(format!("!{is_part_of}:['' TO *]"));
        return VisibilityOutcome::ChildrenHidden;
    };

    let query = format!(
        "{is_part_of}:{parent} OR {identifier}:{parent}",
        identifier = config.fields.identifier
    );
    for entry in &mut params.filter_query {
        if entry.contains(is_part_of.as_str()) {
            *entry = query.clone();
        }
    }
    params
        .sort
        .insert_str(0, &format!("{} asc, ", config.fields.resource_type));

    VisibilityOutcome::ParentExpanded {
        parent: parent.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_action_changes_nothing() {
        let request = RequestParams::new("show");
        let mut params = SearchParams::with_sort("score desc");
        let before = params.clone();

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(outcome, VisibilityOutcome::ShowAction);
        assert_eq!(params, before);
    }

    #[test]
    fn configured_show_actions_respected() {
        let config = Config {
            show_actions: vec![String::from("show"), String::from("preview")],
            ..Config::default()
        };
        let request = RequestParams::new("preview");
        let mut params = SearchParams::default();

        let outcome = apply_visibility(&config, &request, &mut params);

        assert_eq!(outcome, VisibilityOutcome::ShowAction);
        assert!(params.filter_query.is_empty());
    }

    #[test]
    fn listing_without_parent_facet_hides_children() {
        let request = RequestParams::new("index");
        let mut params = SearchParams::with_sort("score desc");

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(outcome, VisibilityOutcome::ChildrenHidden);
        assert_eq!(params.filter_query, vec!["!dct_isPartOf_sm:['' TO *]"]);
        assert_eq!(params.sort, "score desc");
    }

    #[test]
    fn parent_facet_rewrites_membership_filter_and_sort() {
        let request = RequestParams::new("index").with_facet("dct_isPartOf_sm", "col123");
        let mut params = SearchParams::with_sort("score desc");
        params
            .filter_query
            .push(String::from("dct_isPartOf_sm:col123"));

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(
            outcome,
            VisibilityOutcome::ParentExpanded {
                parent: String::from("col123")
            }
        );
        assert_eq!(
            params.filter_query,
            vec!["dct_isPartOf_sm:col123 OR dc_identifier_s:col123"]
        );
        assert_eq!(params.sort, "dc_type_s asc, score desc");
    }

    #[test]
    fn unrelated_filter_entries_are_left_alone() {
        let request = RequestParams::new("index").with_facet("dct_isPartOf_sm", "col123");
        let mut params = SearchParams::with_sort("score desc");
        params.filter_query.push(String::from("format:Shapefile"));
        params
            .filter_query
            .push(String::from("dct_isPartOf_sm:col123"));

        let _outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(params.filter_query[0], "format:Shapefile");
        assert_eq!(
            params.filter_query[1],
            "dct_isPartOf_sm:col123 OR dc_identifier_s:col123"
        );
    }

    #[test]
    fn parent_facet_with_no_matching_entry_still_prefixes_sort() {
        let request = RequestParams::new("index").with_facet("dct_isPartOf_sm", "col123");
        let mut params = SearchParams::with_sort("score desc");

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        // Nothing to rewrite, but the type-first sort still applies.
        assert!(matches!(outcome, VisibilityOutcome::ParentExpanded { .. }));
        assert!(params.filter_query.is_empty());
        assert_eq!(params.sort, "dc_type_s asc, score desc");
    }

    #[test]
    fn only_first_facet_value_is_used() {
        let request = RequestParams::new("index")
            .with_facet("dct_isPartOf_sm", "first")
            .with_facet("dct_isPartOf_sm", "second");
        let mut params = SearchParams::default();
        params.filter_query.push(String::from("dct_isPartOf_sm:x"));

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(
            outcome,
            VisibilityOutcome::ParentExpanded {
                parent: String::from("first")
            }
        );
        assert_eq!(
            params.filter_query,
            vec!["dct_isPartOf_sm:first OR dc_identifier_s:first"]
        );
    }

    #[test]
    fn custom_field_names_flow_through() {
        let mut config = Config::default();
        config.fields.is_part_of = String::from("collection_sm");
        config.fields.identifier = String::from("id_s");
        config.fields.resource_type = String::from("kind_s");

        let request = RequestParams::new("index").with_facet("collection_sm", "maps");
        let mut params = SearchParams::with_sort("score desc");
        params.filter_query.push(String::from("collection_sm:maps"));

        let _outcome = apply_visibility(&config, &request, &mut params);

        assert_eq!(params.filter_query, vec!["collection_sm:maps OR id_s:maps"]);
        assert_eq!(params.sort, "kind_s asc, score desc");
    }

    #[test]
    fn facet_on_other_field_does_not_count_as_parent() {
        let request = RequestParams::new("index").with_facet("dc_format_s", "Shapefile");
        let mut params = SearchParams::default();

        let outcome = apply_visibility(&Config::default(), &request, &mut params);

        assert_eq!(outcome, VisibilityOutcome::ChildrenHidden);
        assert_eq!(params.filter_query, vec!["!dct_isPartOf_sm:['' TO *]"]);
    }
}
